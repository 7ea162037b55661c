//! Site header navigation component

use maud::{Markup, html};

/// Single entry in the site header
pub struct NavLink<'a> {
    pub label: &'a str,
    pub href: String,
    pub active: bool,
}

/// Renders the site header with brand and navigation links
///
/// The active link is rendered as plain text so the current page is not
/// linked to itself.
///
/// # Arguments
///
/// * `site_name`: Brand text at the left of the header
/// * `links`: Navigation entries in display order
///
/// # Returns
///
/// Header markup
pub fn site_header(site_name: &str, links: &[NavLink<'_>]) -> Markup {
    html! {
        header class="site-header" {
            span class="brand" { (site_name) }
            @if !links.is_empty() {
                nav class="site-nav" {
                    @for link in links {
                        @if link.active {
                            span class="nav-link nav-current" { (link.label) }
                        } @else {
                            a class="nav-link" href=(link.href) { (link.label) }
                        }
                    }
                }
            }
        }
    }
}
