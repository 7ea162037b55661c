//! Client-side routing for the front-end pages.
//!
//! The route table is declared once at startup and never mutated. The
//! router resolves locations against it, following redirects, and the
//! navigator records resolved locations into a [`History`].

mod history;
mod router;
mod table;

pub use history::{History, MemoryHistory, Navigator};
pub use router::{MAX_REDIRECTS, Resolution, Router};
pub use table::{PageId, Route, RouteTable, RouteTarget, normalize_path};
