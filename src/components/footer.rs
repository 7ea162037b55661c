//! Site footer component

use maud::{Markup, html};

pub fn footer(site_name: &str) -> Markup {
    html! {
        footer class="site-footer" {
            span { (site_name) }
        }
    }
}
