//! Fenced code block highlighting plugged into comrak's HTML formatter.

use comrak::adapters::SyntaxHighlighterAdapter;
use std::collections::HashMap;
use std::io::{self, Write};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::renderer::html_escape;

/// Highlights fenced code with syntect using `hljs-` prefixed CSS classes.
///
/// comrak only calls the adapter for code fences it parsed itself, so raw
/// HTML `<pre><code>` blocks in the source are never touched.
pub struct ClassedHighlighter<'s> {
    syntax_set: &'s SyntaxSet,
}

impl<'s> ClassedHighlighter<'s> {
    pub fn new(syntax_set: &'s SyntaxSet) -> Self {
        Self { syntax_set }
    }

    /// Highlights code for a language token or extension.
    ///
    /// Unknown or missing languages produce escaped plain text.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> Result<String, syntect::Error> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let syntax = language.filter(|l| !l.is_empty()).and_then(|l| {
            self.syntax_set
                .find_syntax_by_token(l)
                .or_else(|| self.syntax_set.find_syntax_by_extension(l))
        });
        let Some(syntax) = syntax else {
            return Ok(html_escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }
}

impl SyntaxHighlighterAdapter for ClassedHighlighter<'_> {
    fn write_highlighted(
        &self,
        output: &mut dyn Write,
        lang: Option<&str>,
        code: &str,
    ) -> io::Result<()> {
        let html = self
            .highlight(code, lang)
            .map_err(|e| io::Error::other(format!("syntax highlighting failed: {}", e)))?;
        output.write_all(html.as_bytes())
    }

    fn write_pre_tag(
        &self,
        output: &mut dyn Write,
        attributes: HashMap<String, String>,
    ) -> io::Result<()> {
        write_opening_tag(output, "pre", attributes)
    }

    fn write_code_tag(
        &self,
        output: &mut dyn Write,
        attributes: HashMap<String, String>,
    ) -> io::Result<()> {
        write_opening_tag(output, "code", attributes)
    }
}

fn write_opening_tag(
    output: &mut dyn Write,
    tag: &str,
    attributes: HashMap<String, String>,
) -> io::Result<()> {
    let mut attributes: Vec<_> = attributes.into_iter().collect();
    attributes.sort();

    write!(output, "<{}", tag)?;
    for (name, value) in attributes {
        write!(output, " {}=\"{}\"", name, html_escape(&value))?;
    }
    output.write_all(b">")
}
