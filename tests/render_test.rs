//! Integration tests for the renderer's observable contract.
//!
//! These exercise single-pass behavior only: feeding rendered output back
//! into the renderer is undefined and deliberately untested.

use replymark::{Alignment, Block, JsonFormat, RenderOptions};

#[test]
fn markerless_text_becomes_one_paragraph() {
    assert_eq!(replymark::to_html("hello there"), "<p>hello there</p>");
}

#[test]
fn single_newlines_become_breaks() {
    assert_eq!(
        replymark::to_html("line one\nline two\nline three"),
        "<p>line one<br />line two<br />line three</p>"
    );
}

#[test]
fn blank_line_is_a_paragraph_boundary() {
    assert_eq!(
        replymark::to_html("first\n\nsecond"),
        "<p>first</p><p>second</p>"
    );
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(replymark::to_html(""), "");
    assert!(replymark::to_document("").is_empty());
}

#[test]
fn table_scenario_from_contract() {
    let doc = replymark::to_document("| A | B |\n|---|---|\n| 1 | 2 |");

    assert_eq!(doc.block_count(), 1);
    match &doc.blocks[0] {
        Block::Table(table) => {
            assert_eq!(table.headers, vec!["A", "B"]);
            assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Left]);
            assert_eq!(table.rows, vec![vec!["1", "2"]]);
        }
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn table_header_count_matches_fragments() {
    let doc = replymark::to_document("| one | two | three |\n|---|---|---|\n| a | b | c |");

    let table = doc.tables().next().unwrap();
    assert_eq!(table.column_count(), 3);
}

#[test]
fn table_alignment_follows_colon_placement() {
    let html = replymark::to_html("| L | C | R |\n|:--|:-:|--:|\n| a | b | c |");

    assert!(html.contains("<th style=\"text-align: left\">L</th>"));
    assert!(html.contains("<th style=\"text-align: center\">C</th>"));
    assert!(html.contains("<th style=\"text-align: right\">R</th>"));
    assert!(html.contains("<td style=\"text-align: center\">b</td>"));
}

#[test]
fn ragged_row_renders_with_left_fallback() {
    // Two alignments for three header cells: the third column and every
    // cell index past the separator resolve to left.
    let html = replymark::to_html("| A | B | C |\n|--:|:-:|\n| 1 | 2 | 3 | 4 |");

    assert!(html.contains("<th style=\"text-align: left\">C</th>"));
    assert!(html.contains("<td style=\"text-align: right\">1</td>"));
    assert!(html.contains("<td style=\"text-align: center\">2</td>"));
    assert!(html.contains("<td style=\"text-align: left\">3</td>"));
    assert!(html.contains("<td style=\"text-align: left\">4</td>"));
}

#[test]
fn short_row_renders_without_error() {
    let html = replymark::to_html("| A | B | C |\n|---|---|---|\n| only |");

    assert!(html.contains("<td style=\"text-align: left\">only</td>"));
}

#[test]
fn malformed_table_falls_through_as_text() {
    // No separator line: the region is not a table and renders as prose.
    let html = replymark::to_html("| A | B |\n| 1 | 2 |");

    assert_eq!(html, "<p>| A | B |<br />| 1 | 2 |</p>");
}

#[test]
fn bold_never_double_wraps() {
    let html = replymark::to_html("**bold**");

    assert_eq!(html, "<p><strong>bold</strong></p>");
    assert_eq!(html.matches("<strong>").count(), 1);
    assert!(!html.contains("<em>"));
}

#[test]
fn underscore_strong_and_emphasis() {
    assert_eq!(
        replymark::to_html("__loud__ and _soft_"),
        "<p><strong>loud</strong> and <em>soft</em></p>"
    );
}

#[test]
fn heading_then_paragraph_scenario() {
    let doc = replymark::to_document("# Title\n\nHello **world**");

    assert_eq!(
        doc.blocks,
        vec![
            Block::heading(1, "Title"),
            Block::paragraph("Hello <strong>world</strong>"),
        ]
    );
    assert_eq!(
        replymark::to_html("# Title\n\nHello **world**"),
        "<h1>Title</h1><p>Hello <strong>world</strong></p>"
    );
}

#[test]
fn heading_levels_and_longest_prefix() {
    assert_eq!(replymark::to_html("### Three"), "<h3>Three</h3>");
    assert_eq!(replymark::to_html("## Two"), "<h2>Two</h2>");
    // Four hashes match no heading stage and stay literal prose.
    assert_eq!(replymark::to_html("#### Four"), "<p>#### Four</p>");
}

#[test]
fn three_items_wrap_into_one_list() {
    let html = replymark::to_html("- one\n- two\n- three");

    assert_eq!(html, "<ul><li>one</li><li>two</li><li>three</li></ul>");
    assert_eq!(html.matches("<ul>").count(), 1);
}

#[test]
fn second_item_run_stays_unwrapped() {
    let html = replymark::to_html("- a\n- b\n\nbetween\n\n- c");

    assert_eq!(
        html,
        "<ul><li>a</li><li>b</li></ul><p>between</p><li>c</li>"
    );
}

#[test]
fn numbered_items_become_generic_items() {
    let html = replymark::to_html("1. first\n2. second");

    assert_eq!(html, "<ul><li>first</li><li>second</li></ul>");
}

#[test]
fn fenced_code_block_is_verbatim_and_atomic() {
    let doc = replymark::to_document("```\nfn main() {}\n\nprintln!();\n```");

    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            content: "\nfn main() {}\n\nprintln!();\n".to_string()
        }]
    );
}

#[test]
fn inline_code_span() {
    assert_eq!(
        replymark::to_html("run `cargo test` now"),
        "<p>run <code>cargo test</code> now</p>"
    );
}

#[test]
fn table_with_surrounding_prose() {
    let html = replymark::to_html(
        "## Scores\n\n| Name | Score |\n|---|--:|\n| Alice | 92 |\n\nShe leads.",
    );

    let heading_pos = html.find("<h2>Scores</h2>").unwrap();
    let table_pos = html.find("<table").unwrap();
    // The region match consumes the data row's newline, so the remaining
    // text keeps one leading newline that becomes an explicit break.
    let para_pos = html.find("<p><br />She leads.</p>").unwrap();
    assert!(heading_pos < table_pos);
    assert!(table_pos < para_pos);
}

#[test]
fn table_cells_are_not_rescanned_by_inline_stages() {
    let html = replymark::to_html("| **A** |\n|---|\n| `x` |");

    assert!(html.contains("<th style=\"text-align: left\">**A**</th>"));
    assert!(html.contains("<td style=\"text-align: left\">`x`</td>"));
}

#[test]
fn custom_table_class_option() {
    let options = RenderOptions::new().with_table_class("chat-table");
    let html = replymark::to_html_with_options("| A |\n|---|\n| 1 |", &options);

    assert!(html.starts_with("<table class=\"chat-table\">"));
}

#[test]
fn stats_count_blocks() {
    let text = "# T\n\npara one\n\n- a\n- b\n\n| X |\n|---|\n| 1 |";
    let result = replymark::to_html_with_stats(text, &RenderOptions::default());

    assert_eq!(result.stats.heading_count, 1);
    assert_eq!(result.stats.paragraph_count, 1);
    assert_eq!(result.stats.list_count, 1);
    assert_eq!(result.stats.list_item_count, 2);
    assert_eq!(result.stats.table_count, 1);
}

#[test]
fn json_output_round_trips_the_document() {
    let text = "# T\n\nbody with **bold**";
    let doc = replymark::to_document(text);

    let json = replymark::to_json(text, JsonFormat::Compact).unwrap();
    let back: replymark::Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn unmatched_markers_pass_through() {
    assert_eq!(replymark::to_html("a * b"), "<p>a * b</p>");
    assert_eq!(replymark::to_html("lone ` tick"), "<p>lone ` tick</p>");
}

#[test]
fn adjacent_asterisk_pair_matches_empty_emphasis() {
    // A lone `**` is two adjacent single markers to the emphasis stage,
    // which matches them as an empty span. Preserved pipeline behavior.
    assert_eq!(replymark::to_html("a ** b"), "<p>a <em></em> b</p>");
}

#[test]
fn angle_brackets_are_not_escaped() {
    // Documented risk: the renderer performs no sanitization.
    assert_eq!(
        replymark::to_html("<script>alert(1)</script>"),
        "<p><script>alert(1)</script></p>"
    );
}
