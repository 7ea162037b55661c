//! Registration page

use maud::{Markup, html};

use super::PageContext;
use crate::components::form::{Field, form_card};
use crate::components::layout::page_wrapper;
use crate::components::nav::site_header;
use crate::routes::PageId;

pub fn generate(ctx: &PageContext<'_>) -> Markup {
    let page = PageId::Register;
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
                    &ctx.endpoint("/register"),
                    &[Field::username(), Field::password("new-password")],
                    "Register",
                    html! {
                        "Already registered? "
                        a href=(ctx.href_to(PageId::Login)) { "Sign in" }
                    },
                ))
            }
        },
    )
}
