//! Path resolution against a route table.

use anyhow::{Result, bail};

use super::table::{PageId, RouteTable, RouteTarget, normalize_path};

/// Redirect hops followed before resolution gives up.
pub const MAX_REDIRECTS: usize = 10;

/// Outcome of resolving one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A page component is displayed.
    Page {
        page: PageId,
        /// Declared path of the matched route, after redirects.
        path: &'static str,
        /// Normalized location originally requested, when a redirect was taken.
        redirected_from: Option<String>,
    },
    /// No route matched. Navigation leaves the current view unchanged.
    NotFound { path: String },
}

impl Resolution {
    pub fn page(&self) -> Option<PageId> {
        match self {
            Resolution::Page { page, .. } => Some(*page),
            Resolution::NotFound { .. } => None,
        }
    }
}

/// Immutable router over a route table.
#[derive(Debug, Clone, Default)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolves a location to a page, following redirects.
    ///
    /// # Errors
    ///
    /// Returns error if more than [`MAX_REDIRECTS`] redirects are chained,
    /// which only happens for tables containing a redirect cycle.
    pub fn resolve(&self, location: &str) -> Result<Resolution> {
        let requested = normalize_path(location);
        let mut current = requested.clone();
        let mut redirected = false;

        for _ in 0..=MAX_REDIRECTS {
            let Some(route) = self.table.find(&current) else {
                return Ok(Resolution::NotFound { path: current });
            };

            match route.target() {
                RouteTarget::Page(page) => {
                    return Ok(Resolution::Page {
                        page,
                        path: route.path(),
                        redirected_from: redirected.then_some(requested),
                    });
                }
                RouteTarget::Redirect(to) => {
                    tracing::debug!("Redirecting {} to {}", current, to);
                    current = normalize_path(to);
                    redirected = true;
                }
            }
        }

        bail!(
            "Too many redirects resolving {} (limit {})",
            requested,
            MAX_REDIRECTS
        )
    }
}
