use questwright::{export_document, markdown_to_html};

const ADVENTURE: &str = "\
# The Silent Bells of Harrowmere

## Prologue
The bells stopped ringing at midnight.

## Scene 1: Combat
**Objective:** Hold the chapel door.

| Creature | AC | HP |
|----------|----|----|
| Zombie   | 8  | 22 |

## Scene 2: Puzzle
~~Ring the bells in order~~ Ring them in reverse.

## Conclusion
Dawn.

## DM Notes
- 300 XP each
";

#[test]
fn every_section_becomes_a_heading() {
    let html = markdown_to_html(ADVENTURE);

    for heading in [
        "<h2>Prologue</h2>",
        "<h2>Scene 1: Combat</h2>",
        "<h2>Scene 2: Puzzle</h2>",
        "<h2>Conclusion</h2>",
        "<h2>DM Notes</h2>",
    ] {
        assert!(html.contains(heading), "missing {heading}");
    }
    assert!(html.contains("<del>Ring the bells in order</del>"));
    assert!(html.contains("<td>Zombie</td>"));
}

#[test]
fn document_is_standalone_and_printable() {
    let doc = export_document("The Silent Bells of Harrowmere", ADVENTURE);

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<meta charset=\"utf-8\">"));
    assert!(doc.contains("<title>The Silent Bells of Harrowmere</title>"));
    assert!(doc.contains("@media print"));
    assert!(doc.contains("<h1>The Silent Bells of Harrowmere</h1>"));
    assert!(doc.trim_end().ends_with("</html>"));
}

#[test]
fn empty_markdown_still_produces_a_document() {
    let doc = export_document("Untitled", "");
    assert!(doc.contains("<article>\n</article>"));
}
