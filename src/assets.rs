//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::pages::SITE_CSS;

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const FORM: &str = include_str!("../assets/components/form.css");

const DASHBOARD_PAGE: &str = include_str!("../assets/page-dashboard.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes the bundled site stylesheet to the assets directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        SITE_CSS,
        &[BASE, LAYOUT, NAV, FORM, DASHBOARD_PAGE, MARKDOWN],
    )
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
