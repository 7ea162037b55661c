//! Reusable HTML components for page generation
//!
//! Maud component functions shared across the front-end pages: the
//! document wrapper, site header, footer and the form building blocks used
//! by the sign in and registration pages.

pub mod footer;
pub mod form;
pub mod layout;
pub mod nav;
