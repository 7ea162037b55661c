//! Page generation for each page component of the route table
//!
//! Each page module renders one [`PageId`] with the shared components.
//! [`render_page`] dispatches from a page identifier to its module.

pub mod dashboard;
pub mod login;
pub mod register;

use maud::Markup;

use crate::path::UrlLayout;
use crate::routes::{PageId, RouteTable};

/// Stylesheet every page links to, relative to the assets directory
pub const SITE_CSS: &str = "site.css";

/// Everything a page needs to render itself
pub struct PageContext<'a> {
    pub site_name: &'a str,
    /// Backend base URL without trailing slash
    pub api_base: &'a str,
    pub layout: UrlLayout,
    pub routes: &'a RouteTable,
    /// Declared route path the page is generated for
    pub path: &'a str,
    /// Rendered markdown shown on the dashboard
    pub notice_html: Option<&'a str>,
}

impl PageContext<'_> {
    /// Link from this page to the page rendering `page`.
    ///
    /// Falls back to `#` when no route renders the page.
    pub fn href_to(&self, page: PageId) -> String {
        self.routes
            .path_of(page)
            .map(|to| self.layout.href(self.path, to))
            .unwrap_or_else(|| "#".to_string())
    }

    /// Link from this page to the site stylesheet.
    pub fn stylesheet(&self) -> String {
        self.layout.asset_href(self.path, SITE_CSS)
    }

    /// Backend endpoint URL for a path such as `/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// Renders the page component identified by `page`
pub fn render_page(page: PageId, ctx: &PageContext<'_>) -> Markup {
    match page {
        PageId::Login => login::generate(ctx),
        PageId::Register => register::generate(ctx),
        PageId::AdminDashboard => dashboard::generate(ctx),
    }
}
