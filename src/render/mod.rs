//! Rendering module: table extraction, the substitution pipeline, block
//! assembly, and the HTML/JSON output surfaces.

mod assemble;
mod html;
mod json;
mod options;
mod pipeline;
mod renderer;
mod result;
mod tables;
pub mod visitor;

pub use html::HtmlRenderer;
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use pipeline::InlinePipeline;
pub use renderer::DocumentRenderer;
pub use result::{RenderResult, RenderStats};
pub use tables::{Segment, TableExtractor};
pub use visitor::{DocumentVisitor, VisitorAction};
