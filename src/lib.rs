//! Front-end pages and markdown rendering for the NLP chat admin console.
//!
//! Two independent pieces make up the core: [`render_markdown`], which turns
//! optional markdown text into HTML, and [`RouteTable`], the declarative map
//! from URL paths to page components. [`generate_site`] writes every route
//! of a table out as static HTML.

mod assets;
pub mod components;
mod config;
mod generators;
mod markdown;
pub mod pages;
mod path;
pub mod routes;

pub use config::Config;
pub use generators::{SiteOptions, SiteReport, generate_site};
pub use markdown::{MarkdownRenderer, render_markdown};
pub use path::UrlLayout;
pub use routes::{
    History, MemoryHistory, Navigator, PageId, Resolution, Route, RouteTable, RouteTarget, Router,
};
