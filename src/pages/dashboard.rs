//! Admin dashboard page

use maud::{Markup, PreEscaped, html};

use super::PageContext;
use crate::components::layout::page_wrapper;
use crate::components::nav::{NavLink, site_header};
use crate::routes::PageId;

/// Admin resource sections and their table columns
///
/// Each entry mirrors a collection the backend exposes. Rows are filled in
/// by the client at runtime; the generated page only carries the shells.
const SECTIONS: [(&str, &str, &[&str]); 3] = [
    ("doctors", "Doctors", &["ID", "Username"]),
    ("admins", "Administrators", &["ID", "Username"]),
    (
        "patients",
        "Patients",
        &["ID", "Name", "Age", "Gender", "Contact"],
    ),
];

/// Series shown in the statistics summary, keyed as the backend reports them
const STATISTICS: [(&str, &str); 3] = [
    ("doctors", "Doctors"),
    ("patients", "Patients"),
    ("diagnoses", "Diagnoses"),
];

/// Generates the admin dashboard page
///
/// Renders the header navigation, an optional markdown notice, a statistics
/// summary and one table shell per admin resource. Each shell carries the
/// backend endpoint it is loaded from in `data-source`.
pub fn generate(ctx: &PageContext<'_>) -> Markup {
    let page = PageId::AdminDashboard;
    let stylesheet = ctx.stylesheet();

    let mut links = vec![NavLink {
        label: page.title(),
        href: ctx.href_to(page),
        active: true,
    }];
    links.extend(SECTIONS.iter().map(|&(id, label, _)| NavLink {
        label,
        href: format!("#{}", id),
        active: false,
    }));
    links.push(NavLink {
        label: "Sign out",
        href: ctx.href_to(PageId::Login),
        active: false,
    });

    page_wrapper(
        ctx.site_name,
        page.title(),
        &[stylesheet.as_str()],
        html! {
            div data-page=(page.name()) {
                (site_header(ctx.site_name, &links))

                main class="dashboard" {
                    h1 class="page-title" { (page.title()) }

                    @if let Some(notice) = ctx.notice_html
                        && !notice.is_empty() {
                        section class="notice markdown-body" {
                            (PreEscaped(notice))
                        }
                    }

                    section id="statistics" class="stats" data-source=(ctx.endpoint("/statistics")) {
                        @for (key, label) in STATISTICS {
                            div class="stat-card" data-key=(key) {
                                span class="stat-value" { "-" }
                                span class="stat-label" { (label) }
                            }
                        }
                    }

                    @for (id, label, columns) in SECTIONS {
                        section id=(id) class="resource" data-source=(ctx.endpoint(&format!("/{}", id))) {
                            h2 { (label) }
                            table class="resource-table" {
                                thead {
                                    tr {
                                        @for column in columns {
                                            th { (column) }
                                        }
                                    }
                                }
                                tbody {
                                    tr class="empty-state" {
                                        td colspan=(columns.len()) { "No records loaded" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
