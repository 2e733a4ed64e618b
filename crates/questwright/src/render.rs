//! Markdown to HTML export.
//!
//! Generated adventures are plain markdown. These helpers turn that text into
//! an HTML fragment or a standalone, print-ready page that any HTML-to-PDF
//! tool can consume.

use pulldown_cmark::{Options, Parser, html};

const PRINT_STYLE: &str = "\
body { font-family: Georgia, 'Times New Roman', serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; line-height: 1.5; color: #1a1a1a; }
h1, h2, h3 { font-family: 'Trebuchet MS', Helvetica, sans-serif; line-height: 1.2; }
h2 { border-bottom: 1px solid #999; padding-bottom: 0.2rem; margin-top: 2rem; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid #999; padding: 0.25rem 0.5rem; text-align: left; }
blockquote { border-left: 3px solid #999; margin-left: 0; padding-left: 1rem; font-style: italic; }
@media print { body { margin: 0; max-width: none; } h2 { page-break-after: avoid; } }
";

/// Render markdown to an HTML fragment.
///
/// Tables and strikethrough are enabled.
///
/// # Examples
///
/// ```
/// use questwright::markdown_to_html;
///
/// let html = markdown_to_html("## Scene 1: Combat\n\n**Goblins** attack.");
/// assert!(html.contains("<h2>Scene 1: Combat</h2>"));
/// assert!(html.contains("<strong>Goblins</strong>"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Wrap rendered markdown in a complete HTML document with print styling.
///
/// The title is escaped; the markdown is rendered as-is.
pub fn export_document(title: &str, markdown: &str) -> String {
    let title = escape_text(title.trim());
    let body = markdown_to_html(markdown);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{PRINT_STYLE}</style>\n</head>\n<body>\n\
         <article>\n{body}</article>\n</body>\n</html>\n"
    )
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
