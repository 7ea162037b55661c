//! Mapping route paths to generated files and links.

use clap::ValueEnum;
use std::path::PathBuf;

/// How route paths are laid out as files in the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UrlLayout {
    /// `/login` becomes `login/index.html` and links are root-absolute.
    /// Needs a static file server rooted at the output directory.
    Clean,
    /// `/login` becomes `login.html` and links are relative, so the site
    /// also works when opened straight from disk.
    #[default]
    Flat,
}

impl UrlLayout {
    /// Output file for a route path, relative to the output directory.
    pub fn file_path(self, route_path: &str) -> PathBuf {
        let segments = segments(route_path);
        if segments.is_empty() {
            return PathBuf::from("index.html");
        }

        let mut path: PathBuf = segments.iter().collect();
        match self {
            UrlLayout::Clean => path.push("index.html"),
            UrlLayout::Flat => {
                path.set_extension("html");
            }
        }
        path
    }

    /// Link from the page at `from` to the route path `to`.
    pub fn href(self, from: &str, to: &str) -> String {
        match self {
            UrlLayout::Clean => crate::routes::normalize_path(to),
            UrlLayout::Flat => format!(
                "{}{}",
                "../".repeat(self.depth(from)),
                self.file_path(to).display()
            ),
        }
    }

    /// Link from the page at `from` to a bundled asset file.
    pub fn asset_href(self, from: &str, asset: &str) -> String {
        match self {
            UrlLayout::Clean => format!("/assets/{}", asset),
            UrlLayout::Flat => format!("{}assets/{}", "../".repeat(self.depth(from)), asset),
        }
    }

    /// Number of `../` hops from the page file back to the output root.
    pub fn depth(self, route_path: &str) -> usize {
        let count = segments(route_path).len();
        match self {
            UrlLayout::Clean => count,
            UrlLayout::Flat => count.saturating_sub(1),
        }
    }
}

fn segments(route_path: &str) -> Vec<&str> {
    let end = route_path.find(['?', '#']).unwrap_or(route_path.len());
    route_path[..end]
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}
