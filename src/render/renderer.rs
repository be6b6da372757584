//! The document renderer: raw reply text to a typed block document.

use crate::model::Document;

use super::assemble;
use super::pipeline::InlinePipeline;
use super::tables::{Segment, TableExtractor};

/// Renders raw chat-reply text into a structured [`Document`].
///
/// The transform is total: any input, including empty text, unmatched
/// markers, and malformed table regions, produces a document without error.
/// Whatever fails to match a construct degrades to plain text. It is also
/// strictly single-pass; re-rendering a document's own markup is undefined.
pub struct DocumentRenderer {
    extractor: TableExtractor,
    pipeline: InlinePipeline,
}

impl DocumentRenderer {
    /// Create a renderer with all patterns compiled.
    pub fn new() -> Self {
        Self {
            extractor: TableExtractor::new(),
            pipeline: InlinePipeline::new(),
        }
    }

    /// Transform one complete reply into a block document.
    pub fn to_document(&self, text: &str) -> Document {
        if text.is_empty() {
            return Document::new();
        }

        // Tables first; an extracted region is never re-scanned by the
        // substitution stages, which only run over the text in between.
        let segments: Vec<Segment> = self
            .extractor
            .extract(text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(text) => Segment::Text(self.pipeline.apply(&text)),
                table => table,
            })
            .collect();

        let nodes = assemble::assemble_nodes(segments);
        let nodes = assemble::wrap_first_list_run(nodes);
        let blocks = assemble::wrap_loose_text(nodes);

        log::debug!("rendered {} blocks from {} bytes", blocks.len(), text.len());
        Document::from_blocks(blocks)
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}
