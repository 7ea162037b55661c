//! Shared test utilities for integration tests.
//!
//! Provides helpers for generating a site into a temporary directory and
//! reading the generated documents back.

use anyhow::{Context, Result};
use chatfront::{RouteTable, SiteOptions, SiteReport, UrlLayout, generate_site};
use std::path::Path;
use tempfile::TempDir;

/// Generates the application site into a fresh temporary directory.
///
/// # Errors
///
/// Returns error if directory creation or generation fails
pub fn generate_app_site(layout: UrlLayout) -> Result<(TempDir, SiteReport)> {
    let dir = TempDir::new()?;
    let routes = RouteTable::app();
    let report = generate_site(&SiteOptions {
        output: dir.path(),
        site_name: "Test Clinic",
        api_base: "http://api.test",
        layout,
        notice: None,
        routes: &routes,
    })?;
    Ok((dir, report))
}

/// Reads a generated document relative to the output directory.
///
/// # Errors
///
/// Returns error if the file is missing or not UTF-8
pub fn read_output(output: &Path, relative: &str) -> Result<String> {
    std::fs::read_to_string(output.join(relative))
        .with_context(|| format!("Missing generated file: {}", relative))
}
