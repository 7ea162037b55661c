//! Sign in page

use maud::{Markup, html};

use super::PageContext;
use crate::components::form::{Field, form_card};
use crate::components::layout::page_wrapper;
use crate::components::nav::site_header;
use crate::routes::PageId;

/// Generates the sign in page
///
/// Posts username and password to the backend `/login` endpoint and links
/// to the registration page.
pub fn generate(ctx: &PageContext<'_>) -> Markup {
    let page = PageId::Login;
    let stylesheet = ctx.stylesheet();

    page_wrapper(
        ctx.site_name,
        page.title(),
        &[stylesheet.as_str()],
        html! {
            div data-page=(page.name()) {
                (site_header(ctx.site_name, &[]))
                (form_card(
                    page.title(),
                    &ctx.endpoint("/login"),
                    &[Field::username(), Field::password("current-password")],
                    "Sign in",
                    html! {
                        "No account yet? "
                        a href=(ctx.href_to(PageId::Register)) { "Create one" }
                    },
                ))
            }
        },
    )
}
