//! Markdown export command handler.

use super::files::{read_file, write_file};
use questwright::{QuestwrightResult, export_document};
use std::path::Path;

/// Convert a markdown file to a standalone HTML document.
pub fn render(input: &Path, output: Option<&Path>, title: Option<&str>) -> QuestwrightResult<()> {
    let markdown = read_file(input)?;
    let title = title
        .map(str::to_string)
        .or_else(|| document_title(&markdown))
        .unwrap_or_else(|| {
            input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Adventure".to_string())
        });

    let document = export_document(&title, &markdown);
    match output {
        Some(path) => write_file(path, &document)?,
        None => print!("{}", document),
    }
    Ok(())
}

/// Text of the first top-level heading, if the markdown has one.
pub fn document_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("# "))
        .map(|title| title.trim().trim_matches('*').trim().to_string())
        .find(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_h1_becomes_title() {
        let md = "## Prologue\n# **The Silent Bells**\n# Second";
        assert_eq!(document_title(md).as_deref(), Some("The Silent Bells"));
    }

    #[test]
    fn no_h1_means_no_title() {
        assert_eq!(document_title("## Prologue\nText"), None);
    }
}
