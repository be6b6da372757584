//! Document-level types.

use super::{Block, Table};
use serde::{Deserialize, Serialize};

/// A structured document produced from one chat reply.
///
/// Blocks appear in source order. Every document is built fresh per render
/// call and carries no identity or shared state beyond that call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Block nodes in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Create a document from an ordered block sequence.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the tables in the document, in source order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Get plain text content of the entire document.
    ///
    /// Inline markup is stripped and explicit breaks become newlines; blocks
    /// are separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Heading { content, .. } => strip_tags(content),
                Block::Paragraph { content } => strip_tags(content),
                Block::List { items } => items
                    .iter()
                    .map(|item| strip_tags(item))
                    .collect::<Vec<_>>()
                    .join("\n"),
                Block::ListItem { content } => strip_tags(content),
                Block::CodeBlock { content } => content.trim_matches('\n').to_string(),
                Block::Table(table) => table.plain_text(),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Remove markup tags from inline content, turning `<br />` into newlines.
fn strip_tags(markup: &str) -> String {
    let text = markup.replace("<br />", "\n");
    let mut result = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}
