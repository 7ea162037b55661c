//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! Wraps comrak with the GFM extensions a browser markdown library enables
//! by default (tables, strikethrough, autolinks, task lists) and highlights
//! fenced code blocks with syntect through comrak's highlighter plugin.

mod highlight;
mod renderer;

pub use renderer::{MarkdownRenderer, render_markdown};
