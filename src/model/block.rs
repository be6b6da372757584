//! Block-level nodes of a rendered document.

use super::Table;
use serde::{Deserialize, Serialize};

/// A top-level structural unit of a rendered reply.
///
/// Heading, paragraph, and list content carries the inline markup produced
/// by the substitution pipeline (`<strong>`, `<em>`, `<code>`, `<br />`);
/// code-block content is verbatim source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading, level 1-3
    Heading {
        /// Heading level (1 = `#`, 2 = `##`, 3 = `###`)
        level: u8,
        /// Heading text with inline markup
        content: String,
    },

    /// A paragraph of text
    Paragraph {
        /// Paragraph text with inline markup and explicit `<br />` breaks
        content: String,
    },

    /// The single wrapped run of list items
    List {
        /// Item contents with inline markup, in source order
        items: Vec<String>,
    },

    /// A list item outside the wrapped run
    ///
    /// Only the first maximal run of consecutive items is wrapped into a
    /// [`Block::List`]; any later run stays as bare items.
    ListItem {
        /// Item text with inline markup
        content: String,
    },

    /// A fenced code block, contents verbatim
    CodeBlock {
        /// Code text exactly as it appeared between the fences
        content: String,
    },

    /// A table
    Table(Table),
}

impl Block {
    /// Create a paragraph block.
    pub fn paragraph(content: impl Into<String>) -> Self {
        Block::Paragraph {
            content: content.into(),
        }
    }

    /// Create a heading block.
    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        Block::Heading {
            level,
            content: content.into(),
        }
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is an unwrapped list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self, Block::ListItem { .. })
    }
}
