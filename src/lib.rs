//! # replymark
//!
//! Chat-reply rendering library for Rust.
//!
//! Renders short-form assistant replies written in a constrained markdown
//! dialect (tables, headings, emphasis, code, list items) into a structured
//! document of typed blocks, and from there into HTML markup ready for a
//! chat panel.
//!
//! ## Quick Start
//!
//! ```
//! let html = replymark::to_html("# Title\n\nHello **world**");
//! assert_eq!(html, "<h1>Title</h1><p>Hello <strong>world</strong></p>");
//! ```
//!
//! ## Features
//!
//! - **Fixed-order transform pipeline**: tables are extracted first, then
//!   heading, emphasis, code, and list substitutions run in a strict
//!   precedence order that decides every overlap
//! - **Typed block model**: table, heading, paragraph, list, and code-block
//!   nodes in source order, serializable to JSON
//! - **Total over all input**: empty text, unmatched markers, and malformed
//!   tables degrade to plain text; rendering never fails
//! - **Transcript store**: explicit append / full-read persistence for chat
//!   history, kept fully outside the stateless renderer
//!
//! The renderer performs no HTML escaping of the input text; callers
//! injecting the output into a live surface must sandbox untrusted content.

pub mod error;
pub mod model;
pub mod render;
pub mod transcript;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Alignment, Block, Document, Table};
pub use render::{
    DocumentRenderer, DocumentVisitor, HtmlRenderer, InlinePipeline, JsonFormat, RenderOptions,
    RenderResult, RenderStats, TableExtractor, VisitorAction,
};
pub use transcript::{Message, Role, TranscriptStore};

/// Render a chat reply to HTML markup with default options.
///
/// Total over all input: empty text produces an empty string, and nothing
/// the renderer does can fail. Single-pass only; feeding a rendered result
/// back in is undefined.
///
/// # Example
///
/// ```
/// let html = replymark::to_html("- one\n- two");
/// assert_eq!(html, "<ul><li>one</li><li>two</li></ul>");
/// ```
pub fn to_html(text: &str) -> String {
    to_html_with_options(text, &RenderOptions::default())
}

/// Render a chat reply to HTML markup with custom options.
pub fn to_html_with_options(text: &str, options: &RenderOptions) -> String {
    let doc = DocumentRenderer::new().to_document(text);
    HtmlRenderer::new(options.clone()).render(&doc)
}

/// Render a chat reply to HTML markup with render statistics.
pub fn to_html_with_stats(text: &str, options: &RenderOptions) -> RenderResult {
    let doc = DocumentRenderer::new().to_document(text);
    HtmlRenderer::new(options.clone()).render_with_stats(&doc)
}

/// Render a chat reply into its typed block document.
///
/// # Example
///
/// ```
/// let doc = replymark::to_document("| A | B |\n|---|---|\n| 1 | 2 |");
/// assert_eq!(doc.tables().count(), 1);
/// ```
pub fn to_document(text: &str) -> Document {
    DocumentRenderer::new().to_document(text)
}

/// Render a chat reply to a JSON document.
pub fn to_json(text: &str, format: JsonFormat) -> Result<String> {
    let doc = DocumentRenderer::new().to_document(text);
    render::to_json(&doc, format)
}

/// Builder for rendering chat replies.
///
/// # Example
///
/// ```
/// use replymark::Replymark;
///
/// let rendered = Replymark::new()
///     .with_table_class("chat-table")
///     .render("**ready**");
/// assert_eq!(rendered.to_html(), "<p><strong>ready</strong></p>");
/// ```
pub struct Replymark {
    options: RenderOptions,
}

impl Replymark {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Set the CSS class for generated tables.
    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.options = self.options.with_table_class(class);
        self
    }

    /// Collect statistics during rendering.
    pub fn with_stats(mut self) -> Self {
        self.options = self.options.with_stats(true);
        self
    }

    /// Render a reply and return a result wrapper.
    pub fn render(&self, text: &str) -> RenderedReply {
        RenderedReply {
            document: DocumentRenderer::new().to_document(text),
            options: self.options.clone(),
        }
    }
}

impl Default for Replymark {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of rendering a reply: the typed document plus the options to use
/// for output.
pub struct RenderedReply {
    /// The structured document
    pub document: Document,
    options: RenderOptions,
}

impl RenderedReply {
    /// Convert to HTML markup.
    pub fn to_html(&self) -> String {
        HtmlRenderer::new(self.options.clone()).render(&self.document)
    }

    /// Convert to HTML markup with statistics.
    pub fn to_html_with_stats(&self) -> RenderResult {
        HtmlRenderer::new(self.options.clone()).render_with_stats(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text with markup stripped.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the typed document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
