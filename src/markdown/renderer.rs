//! Markdown rendering for chat messages and dashboard notices.

use anyhow::{Context, Result};
use comrak::{Arena, Options, Plugins};
use std::path::Path;
use syntect::parsing::SyntaxSet;

use super::highlight::ClassedHighlighter;

thread_local! {
    static DEFAULT_RENDERER: MarkdownRenderer<'static> = MarkdownRenderer::new();
}

/// Renders optional markdown text to HTML.
///
/// Absent and empty input both produce an empty string. Highlighting
/// failures never reach the caller: the plain comrak output is returned
/// instead, so this function has no error path.
///
/// # Arguments
///
/// * `text`: Markdown source, or `None` when there is nothing to render
///
/// # Returns
///
/// HTML fragment, possibly empty
pub fn render_markdown(text: Option<&str>) -> String {
    let content = text.unwrap_or_default();
    if content.is_empty() {
        return String::new();
    }

    DEFAULT_RENDERER.with(|renderer| {
        renderer.render(content).unwrap_or_else(|e| {
            tracing::warn!("Code highlighting failed, using plain output: {:#}", e);
            comrak::markdown_to_html(content, &renderer.options)
        })
    })
}

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Enables the GFM subset chat replies rely on (tables, strikethrough,
/// autolinks, task lists) and highlights fenced code blocks with syntect
/// when a language is given.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer that passes raw HTML through.
    ///
    /// Configured like a stock browser markdown library:
    /// - Tables, strikethrough, autolinks, task lists
    /// - No smart punctuation
    /// - Raw HTML emitted as written
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        options.render.unsafe_ = true;

        Self {
            options,
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Creates renderer that omits raw HTML from the output.
    ///
    /// Use for untrusted content such as user submitted chat messages.
    /// Inline and block HTML are replaced by comrak's omission comment.
    pub fn escaped() -> Self {
        let mut renderer = Self::new();
        renderer.options.render.unsafe_ = false;
        renderer
    }

    /// Renders markdown content to HTML string.
    ///
    /// Fenced code blocks go through [`ClassedHighlighter`] while comrak
    /// formats the document; everything else is comrak's own output.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let highlighter = ClassedHighlighter::new(&self.syntax_set);
        let mut plugins = Plugins::default();
        plugins.render.codefence_syntax_highlighter = Some(&highlighter);

        let arena = Arena::new();
        let root = comrak::parse_document(&arena, content, &self.options);

        let mut html = Vec::with_capacity(content.len() * 2);
        comrak::format_html_with_plugins(root, &self.options, &mut html, &plugins)
            .context("Failed to format markdown as HTML")?;

        String::from_utf8(html).context("Rendered HTML is not valid UTF-8")
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or rendering fails
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        self.render(&content)
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_absent_and_empty_are_equal() {
        // Arrange & Act
        let absent = render_markdown(None);
        let empty = render_markdown(Some(""));

        // Assert
        assert_eq!(absent, "");
        assert_eq!(empty, "");
    }

    #[test]
    fn test_render_heading() {
        // Act
        let html = render_markdown(Some("# Hi"));

        // Assert
        assert!(html.contains("<h1>Hi</h1>"), "Should wrap heading: {}", html);
    }

    #[test]
    fn test_render_bold() {
        // Act
        let html = render_markdown(Some("**bold**"));

        // Assert
        assert!(
            html.contains("<strong>bold</strong>"),
            "Should wrap bold text: {}",
            html
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        // Arrange
        let markdown = "# Title\n\n- one\n- two\n\n```rust\nfn main() {}\n```\n";

        // Act
        let first = render_markdown(Some(markdown));
        let second = render_markdown(Some(markdown));

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_basic_markdown() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "# Hello\n\nThis is *emphasis* and a [link](https://example.com).";

        // Act
        let html = renderer.render(markdown).expect("Should render markdown");

        // Assert
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<a href=\"https://example.com\">link</a>"));
    }

    #[test]
    fn test_render_gfm_tables() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = r#"
| Symptom | Days |
|---------|------|
| Cough   | 3    |
"#;

        // Act
        let html = renderer.render(markdown).expect("Should render table");

        // Assert
        assert!(html.contains("<table>"), "Should contain table tag");
        assert!(html.contains("<th>Symptom</th>"), "Should contain header");
        assert!(html.contains("<td>Cough</td>"), "Should contain cell");
    }

    #[test]
    fn test_render_gfm_strikethrough() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer
            .render("This is ~~gone~~ text.")
            .expect("Should render strikethrough");

        // Assert
        assert!(html.contains("<del>gone</del>"), "Got: {}", html);
    }

    #[test]
    fn test_render_gfm_tasklist() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "- [ ] Unchecked task\n- [x] Checked task\n";

        // Act
        let html = renderer.render(markdown).expect("Should render tasklist");

        // Assert
        assert!(html.contains("type=\"checkbox\""), "Should contain checkbox");
        assert!(html.contains("Checked task"));
    }

    #[test]
    fn test_render_autolinks() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer
            .render("Visit https://example.com for more info.")
            .expect("Should render autolinks");

        // Assert
        assert!(html.contains("<a href=\"https://example.com\">"), "Got: {}", html);
    }

    #[test]
    fn test_render_no_smart_punctuation() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer
            .render(r#"He said "Hello" -- fine."#)
            .expect("Should render quotes");

        // Assert
        assert!(!html.contains('\u{201C}'), "Quotes stay straight: {}", html);
        assert!(html.contains("--"), "Dashes stay literal: {}", html);
    }

    #[test]
    fn test_render_html_passthrough() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "<div class=\"note\">hi</div>\n\nNormal text.";

        // Act
        let html = renderer.render(markdown).expect("Should render HTML");

        // Assert
        assert!(html.contains("<div class=\"note\">"), "Got: {}", html);
        assert!(html.contains("Normal text"));
    }

    #[test]
    fn test_escaped_renderer_omits_raw_html() {
        // Arrange
        let renderer = MarkdownRenderer::escaped();
        let markdown = "<script>alert('xss')</script>\n\nNormal text.";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(!html.contains("<script>"), "Raw HTML must be dropped: {}", html);
        assert!(html.contains("Normal text"));
    }

    #[test]
    fn test_render_code_block_highlighted() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render code block");

        // Assert
        assert!(html.contains("<pre>"), "Should contain pre tag: {}", html);
        assert!(html.contains("<code class=\"language-rust\">"));
        assert!(html.contains("<span class=\"hljs-"), "Got: {}", html);
        assert!(html.contains("println!"));
    }

    #[test]
    fn test_render_code_block_unknown_language() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```unknownlang\na < b\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(html.contains("<code class=\"language-unknownlang\">"));
        assert!(html.contains("a &lt; b"), "Should stay escaped: {}", html);
    }

    #[test]
    fn test_render_empty_code_block() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("```rust\n```\n").expect("Should render");

        // Assert
        assert!(html.contains("<code class=\"language-rust\"></code>"), "Got: {}", html);
    }

    #[test]
    fn test_render_file_missing() {
        // Arrange
        let renderer = MarkdownRenderer::default();

        // Act
        let result = renderer.render_file("does/not/exist.md");

        // Assert
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("does/not/exist.md"));
    }

    #[test]
    fn test_raw_code_html_passes_through_untouched() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let raw = "<pre><code class=\"language-html\"><b>bold</b></code></pre>";

        // Act
        let html = renderer.render(raw).expect("Should render");

        // Assert
        assert_eq!(html, format!("{}\n", raw));
    }

    #[test]
    fn test_raw_code_html_unknown_language_untouched() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let raw = "<pre><code class=\"language-x\">a &amp; <i>b</i></code></pre>";

        // Act
        let html = renderer.render(raw).expect("Should render");

        // Assert
        assert!(html.contains(raw), "Got: {}", html);
        assert!(!html.contains("&lt;i&gt;"));
    }

    #[test]
    fn test_fence_after_raw_html_still_highlighted() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "<pre><code class=\"language-rust\">raw</code></pre>\n\n```rust\nlet x = 1;\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(html.contains("<code class=\"language-rust\">raw</code>"), "Got: {}", html);
        assert!(html.contains("<span class=\"hljs-"), "Got: {}", html);
    }
}
