//! Static site generation from the route table.

use anyhow::{Context, Result, bail};
use maud::Markup;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_css_assets;
use crate::components::layout::redirect_document;
use crate::markdown::MarkdownRenderer;
use crate::pages::{PageContext, render_page};
use crate::path::UrlLayout;
use crate::routes::{RouteTable, RouteTarget, normalize_path};

/// Inputs for one site generation run.
pub struct SiteOptions<'a> {
    pub output: &'a Path,
    pub site_name: &'a str,
    /// Backend base URL without trailing slash
    pub api_base: &'a str,
    pub layout: UrlLayout,
    /// Markdown file rendered on the admin dashboard
    pub notice: Option<&'a Path>,
    pub routes: &'a RouteTable,
}

/// Files written by a generation run.
#[derive(Debug, Clone, Default)]
pub struct SiteReport {
    /// Page and redirect documents, relative to the output directory,
    /// in route table order
    pub pages: Vec<PathBuf>,
    /// Document for the root path, if the table routes `/`
    pub entry: Option<PathBuf>,
}

/// Generates one HTML document per route plus the bundled stylesheet.
///
/// Page routes are rendered through their page module. Redirect routes
/// become refresh documents pointing at their target. When several routes
/// share a path only the first one is written, matching router precedence.
///
/// # Errors
///
/// Returns error if:
/// - The notice file cannot be read or rendered
/// - Two distinct routes map to the same output file in the chosen layout
/// - The output directory or any file in it cannot be written
pub fn generate_site(options: &SiteOptions<'_>) -> Result<SiteReport> {
    fs::create_dir_all(options.output).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            options.output.display()
        )
    })?;

    let assets_dir = options.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    let notice_html = match options.notice {
        Some(path) => Some(
            MarkdownRenderer::new()
                .render_file(path)
                .context("Failed to render dashboard notice")?,
        ),
        None => None,
    };

    let mut report = SiteReport::default();
    let mut seen = HashSet::new();
    let mut written: HashSet<PathBuf> = HashSet::new();

    for route in options.routes.routes() {
        let normalized = normalize_path(route.path()).to_ascii_lowercase();
        if !seen.insert(normalized) {
            tracing::debug!(route = route.path(), "Skipping shadowed route");
            continue;
        }

        let relative = options.layout.file_path(route.path());
        if !written.insert(relative.clone()) {
            bail!(
                "Route {} maps to output file {} already written by another route",
                route.path(),
                relative.display()
            );
        }

        let markup = match route.target() {
            RouteTarget::Page(page) => {
                let ctx = PageContext {
                    site_name: options.site_name,
                    api_base: options.api_base,
                    layout: options.layout,
                    routes: options.routes,
                    path: route.path(),
                    notice_html: notice_html.as_deref(),
                };
                render_page(page, &ctx)
            }
            RouteTarget::Redirect(to) => {
                redirect_document(&options.layout.href(route.path(), to))
            }
        };

        write_document(options.output, &relative, markup)?;
        tracing::info!(route = route.path(), file = %relative.display(), "Generated page");

        if normalize_path(route.path()) == "/" {
            report.entry = Some(relative.clone());
        }
        report.pages.push(relative);
    }

    Ok(report)
}

fn write_document(output: &Path, relative: &Path, markup: Markup) -> Result<()> {
    let path = output.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, markup.into_string())
        .with_context(|| format!("Failed to write page: {}", path.display()))
}
