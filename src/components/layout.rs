//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all pages. The caller provides page-specific body content.
///
/// # Arguments
///
/// * `site_name`: Site name appended to the title and shown in the footer
/// * `title`: Page title text (without suffix)
/// * `stylesheets`: CSS hrefs to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(site_name: &str, title: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site_name) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="container" {
                    (body)
                }
                (footer(site_name))
            }
        }
    }
}

/// Renders a document that immediately forwards the browser to `target`.
///
/// Used for redirect routes. The refresh meta tag performs the redirect,
/// the canonical link and the visible anchor cover clients that ignore it.
pub fn redirect_document(target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content=(format!("0; url={}", target));
                link rel="canonical" href=(target);
                title { "Redirecting" }
            }
            body {
                p { "Redirecting to " a href=(target) { (target) } }
            }
        }
    }
}
