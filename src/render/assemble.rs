//! Paragraph assembly and wrapping stages over typed nodes.
//!
//! Stages 7-9 of the transform pipeline. They run after every substitution
//! stage so that block markers are already resolved: line-break conversion
//! must never split inside a tag, and a `<pre><code>` region stays atomic
//! no matter what it contains.

use crate::model::Block;

use super::tables::Segment;

const PRE_OPEN: &str = "<pre><code>";
const PRE_CLOSE: &str = "</code></pre>";

/// An intermediate node between assembly and the wrapping stages.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// A resolved block
    Block(Block),
    /// Loose prose with explicit `<br />` breaks, not yet a paragraph
    Text(String),
}

/// Stage 7: convert processed segments into an ordered node sequence.
///
/// A blank line is a paragraph boundary; a single newline within a
/// paragraph becomes an explicit `<br />`. Lines wholly tagged as headings
/// or list items by the earlier stages are promoted to their own nodes.
pub(crate) fn assemble_nodes(segments: Vec<Segment>) -> Vec<Node> {
    let mut nodes = Vec::new();
    for segment in segments {
        match segment {
            Segment::Table(table) => nodes.push(Node::Block(Block::Table(table))),
            Segment::Text(text) => assemble_text(&text, &mut nodes),
        }
    }
    nodes
}

/// Stage 8: wrap the FIRST maximal run of consecutive item nodes into a
/// single list. Only one run is wrapped; any later run of items stays as
/// bare [`Block::ListItem`] nodes.
pub(crate) fn wrap_first_list_run(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut iter = nodes.into_iter().peekable();
    let mut wrapped = false;

    while let Some(node) = iter.next() {
        match node {
            Node::Block(Block::ListItem { content }) if !wrapped => {
                let mut items = vec![content];
                while let Some(Node::Block(Block::ListItem { .. })) = iter.peek() {
                    if let Some(Node::Block(Block::ListItem { content })) = iter.next() {
                        items.push(content);
                    }
                }
                out.push(Node::Block(Block::List { items }));
                wrapped = true;
            }
            other => out.push(other),
        }
    }
    out
}

/// Stage 9: any loose text left over becomes a paragraph block, so output
/// not opening with a heading, list, code, or table block is
/// paragraph-wrapped.
pub(crate) fn wrap_loose_text(nodes: Vec<Node>) -> Vec<Block> {
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Block(block) => block,
            Node::Text(content) => Block::Paragraph { content },
        })
        .collect()
}

/// Split one processed text segment around its `<pre><code>` regions, then
/// assemble the prose in between.
fn assemble_text(text: &str, nodes: &mut Vec<Node>) {
    let mut rest = text;
    while let Some(start) = rest.find(PRE_OPEN) {
        let (before, tail) = rest.split_at(start);
        assemble_prose(before, nodes);

        match tail.find(PRE_CLOSE) {
            Some(end) => {
                let content = &tail[PRE_OPEN.len()..end];
                nodes.push(Node::Block(Block::CodeBlock {
                    content: content.to_string(),
                }));
                rest = &tail[end + PRE_CLOSE.len()..];
            }
            None => {
                // Unterminated markup cannot come from the fence stage;
                // degrade to prose rather than lose text.
                assemble_prose(tail, nodes);
                return;
            }
        }
    }
    assemble_prose(rest, nodes);
}

fn assemble_prose(text: &str, nodes: &mut Vec<Node>) {
    for chunk in text.split("\n\n") {
        if chunk.is_empty() {
            continue;
        }

        let mut para_lines: Vec<&str> = Vec::new();
        for line in chunk.split('\n') {
            if let Some(block) = promote_line(line) {
                flush_paragraph(&mut para_lines, nodes);
                nodes.push(Node::Block(block));
            } else {
                para_lines.push(line);
            }
        }
        flush_paragraph(&mut para_lines, nodes);
    }
}

/// Promote a line wholly tagged by the substitution stages to its block.
fn promote_line(line: &str) -> Option<Block> {
    for level in 1u8..=3 {
        let open = ["<h1>", "<h2>", "<h3>"][level as usize - 1];
        let close = ["</h1>", "</h2>", "</h3>"][level as usize - 1];
        if line.len() >= open.len() + close.len()
            && line.starts_with(open)
            && line.ends_with(close)
        {
            let content = &line[open.len()..line.len() - close.len()];
            return Some(Block::Heading {
                level,
                content: content.to_string(),
            });
        }
    }

    if line.len() >= "<li></li>".len() && line.starts_with("<li>") && line.ends_with("</li>") {
        let content = &line["<li>".len()..line.len() - "</li>".len()];
        return Some(Block::ListItem {
            content: content.to_string(),
        });
    }

    None
}

fn flush_paragraph<'a>(lines: &mut Vec<&'a str>, nodes: &mut Vec<Node>) {
    if lines.is_empty() {
        return;
    }
    let content = lines.join("<br />");
    lines.clear();
    if content.is_empty() {
        return;
    }
    nodes.push(Node::Text(content));
}
