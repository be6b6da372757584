//! HTML rendering of block documents.

use crate::model::{Block, Document, Table};

use super::options::RenderOptions;
use super::result::{RenderResult, RenderStats};
use super::visitor::{DocumentVisitor, VisitorAction};

/// HTML renderer for rendered-reply documents.
///
/// Text inside blocks is emitted verbatim; nothing is escaped. Callers
/// injecting the result into a live display surface are responsible for
/// sandboxing untrusted content first.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a document to HTML markup.
    pub fn render(mut self, doc: &Document) -> String {
        self.render_internal(doc, None)
    }

    /// Render a document to HTML markup with render statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        self.options.collect_stats = true;
        let content = self.render_internal(doc, None);
        self.stats.count_text(&doc.plain_text());
        RenderResult::new(content, self.stats)
    }

    /// Render a document, letting a visitor replace or skip blocks.
    pub fn render_with_visitor(
        mut self,
        doc: &Document,
        visitor: &mut dyn DocumentVisitor,
    ) -> String {
        self.render_internal(doc, Some(visitor))
    }

    fn render_internal(
        &mut self,
        doc: &Document,
        mut visitor: Option<&mut dyn DocumentVisitor>,
    ) -> String {
        let mut output = String::new();
        for block in &doc.blocks {
            if let Some(v) = visitor.as_deref_mut() {
                match visit_block(v, block) {
                    VisitorAction::Skip => continue,
                    VisitorAction::Replace(markup) => {
                        output.push_str(&markup);
                        continue;
                    }
                    VisitorAction::Continue => {}
                }
            }
            self.render_block(&mut output, block);
        }
        output
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        match block {
            Block::Heading { level, content } => {
                if self.options.collect_stats {
                    self.stats.add_heading();
                }
                output.push_str(&format!("<h{}>{}</h{}>", level, content, level));
            }
            Block::Paragraph { content } => {
                if self.options.collect_stats {
                    self.stats.add_paragraph();
                }
                output.push_str(&format!("<p>{}</p>", content));
            }
            Block::List { items } => {
                if self.options.collect_stats {
                    self.stats.add_list(items.len());
                }
                output.push_str("<ul>");
                for item in items {
                    output.push_str(&format!("<li>{}</li>", item));
                }
                output.push_str("</ul>");
            }
            Block::ListItem { content } => {
                if self.options.collect_stats {
                    self.stats.add_list_item();
                }
                output.push_str(&format!("<li>{}</li>", content));
            }
            Block::CodeBlock { content } => {
                if self.options.collect_stats {
                    self.stats.add_code_block();
                }
                output.push_str(&format!("<pre><code>{}</code></pre>", content));
            }
            Block::Table(table) => {
                if self.options.collect_stats {
                    self.stats.add_table();
                }
                self.render_table(output, table);
            }
        }
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        output.push_str(&format!("<table class=\"{}\">", self.options.table_class));

        output.push_str("<thead><tr>");
        for (i, header) in table.headers.iter().enumerate() {
            output.push_str(&format!(
                "<th style=\"text-align: {}\">{}</th>",
                table.alignment_for(i).css_value(),
                header
            ));
        }
        output.push_str("</tr></thead><tbody>");

        for row in &table.rows {
            output.push_str("<tr>");
            for (i, cell) in row.iter().enumerate() {
                output.push_str(&format!(
                    "<td style=\"text-align: {}\">{}</td>",
                    table.alignment_for(i).css_value(),
                    cell
                ));
            }
            output.push_str("</tr>");
        }

        output.push_str("</tbody></table>");
    }
}

fn visit_block(visitor: &mut dyn DocumentVisitor, block: &Block) -> VisitorAction {
    match block {
        Block::Heading { level, content } => visitor.visit_heading(*level, content),
        Block::Paragraph { content } => visitor.visit_paragraph(content),
        Block::List { items } => visitor.visit_list(items),
        Block::ListItem { content } => visitor.visit_list_item(content),
        Block::CodeBlock { content } => visitor.visit_code_block(content),
        Block::Table(table) => visitor.visit_table(table),
    }
}
