//! Ordered substitution stages for inline and line-level markup.
//!
//! Each stage is a whole-text substitution; the result of one stage is the
//! input of the next, and the order is the contract. Strong emphasis runs
//! before plain emphasis so a consumed `**` pair is never re-matched as
//! italics, and fenced code runs before inline code so a fence's backticks
//! are gone before single-backtick spans are considered.

use regex::Regex;

/// Stages 1-6 of the transform pipeline, patterns compiled once.
pub struct InlinePipeline {
    h3: Regex,
    h2: Regex,
    h1: Regex,
    strong_asterisk: Regex,
    strong_underscore: Regex,
    em_asterisk: Regex,
    em_underscore: Regex,
    code_fence: Regex,
    code_inline: Regex,
    item_star: Regex,
    item_dash: Regex,
    item_numbered: Regex,
}

impl InlinePipeline {
    /// Create a new pipeline with all stage patterns compiled.
    pub fn new() -> Self {
        Self {
            h3: Regex::new(r"(?m)^### (.*)$").unwrap(),
            h2: Regex::new(r"(?m)^## (.*)$").unwrap(),
            h1: Regex::new(r"(?m)^# (.*)$").unwrap(),
            strong_asterisk: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
            strong_underscore: Regex::new(r"__(.*?)__").unwrap(),
            em_asterisk: Regex::new(r"\*(.*?)\*").unwrap(),
            em_underscore: Regex::new(r"_(.*?)_").unwrap(),
            code_fence: Regex::new(r"(?s)```(.*?)```").unwrap(),
            code_inline: Regex::new(r"`(.*?)`").unwrap(),
            item_star: Regex::new(r"(?m)^\* (.*)$").unwrap(),
            item_dash: Regex::new(r"(?m)^- (.*)$").unwrap(),
            item_numbered: Regex::new(r"(?m)^\d+\. (.*)$").unwrap(),
        }
    }

    /// Run stages 1-6 over one text segment, in contract order.
    pub fn apply(&self, text: &str) -> String {
        let text = self.replace_headings(text);
        let text = self.replace_strong(&text);
        let text = self.replace_emphasis(&text);
        let text = self.replace_code_blocks(&text);
        let text = self.replace_inline_code(&text);
        self.replace_list_items(&text)
    }

    /// Stage 1: heading lines.
    ///
    /// Longest prefix first, so a `###` line is never mis-tagged as a
    /// level-1 heading. Runs of four or more hashes match no stage and stay
    /// literal.
    pub fn replace_headings(&self, text: &str) -> String {
        let text = self.h3.replace_all(text, "<h3>$1</h3>");
        let text = self.h2.replace_all(&text, "<h2>$1</h2>");
        self.h1.replace_all(&text, "<h1>$1</h1>").into_owned()
    }

    /// Stage 2: strong emphasis, non-greedy, same-line pairs only.
    pub fn replace_strong(&self, text: &str) -> String {
        let text = self
            .strong_asterisk
            .replace_all(text, "<strong>$1</strong>");
        self.strong_underscore
            .replace_all(&text, "<strong>$1</strong>")
            .into_owned()
    }

    /// Stage 3: plain emphasis. Must run after [`Self::replace_strong`];
    /// sequential substitution keeps already-consumed markers from being
    /// re-matched.
    pub fn replace_emphasis(&self, text: &str) -> String {
        let text = self.em_asterisk.replace_all(text, "<em>$1</em>");
        self.em_underscore
            .replace_all(&text, "<em>$1</em>")
            .into_owned()
    }

    /// Stage 4: fenced code blocks, multi-line. The fence stage does no
    /// processing of the captured contents.
    pub fn replace_code_blocks(&self, text: &str) -> String {
        self.code_fence
            .replace_all(text, "<pre><code>$1</code></pre>")
            .into_owned()
    }

    /// Stage 5: inline code spans.
    pub fn replace_inline_code(&self, text: &str) -> String {
        self.code_inline
            .replace_all(text, "<code>$1</code>")
            .into_owned()
    }

    /// Stage 6: list-item lines. Numbered and unordered markers both become
    /// generic items; numbering is not preserved.
    pub fn replace_list_items(&self, text: &str) -> String {
        let text = self.item_star.replace_all(text, "<li>$1</li>");
        let text = self.item_dash.replace_all(&text, "<li>$1</li>");
        self.item_numbered
            .replace_all(&text, "<li>$1</li>")
            .into_owned()
    }
}

impl Default for InlinePipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let pipeline = InlinePipeline::new();
        assert_eq!(pipeline.replace_headings("# One"), "<h1>One</h1>");
        assert_eq!(pipeline.replace_headings("## Two"), "<h2>Two</h2>");
        assert_eq!(pipeline.replace_headings("### Three"), "<h3>Three</h3>");
    }

    #[test]
    fn test_heading_longest_prefix_first() {
        let pipeline = InlinePipeline::new();
        // A three-hash line must not be consumed by the one-hash pattern.
        assert_eq!(pipeline.replace_headings("### Deep"), "<h3>Deep</h3>");
        // Four hashes match nothing.
        assert_eq!(pipeline.replace_headings("#### Deeper"), "#### Deeper");
    }

    #[test]
    fn test_heading_requires_space() {
        let pipeline = InlinePipeline::new();
        assert_eq!(pipeline.replace_headings("#NoSpace"), "#NoSpace");
    }

    #[test]
    fn test_strong_then_emphasis_no_double_wrap() {
        let pipeline = InlinePipeline::new();
        let text = pipeline.replace_strong("**bold**");
        let text = pipeline.replace_emphasis(&text);

        assert_eq!(text, "<strong>bold</strong>");
        assert!(!text.contains("<em>"));
    }

    #[test]
    fn test_strong_non_greedy() {
        let pipeline = InlinePipeline::new();
        assert_eq!(
            pipeline.replace_strong("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_underscore_variants() {
        let pipeline = InlinePipeline::new();
        let text = pipeline.replace_strong("__bold__ and _em_");
        let text = pipeline.replace_emphasis(&text);

        assert_eq!(text, "<strong>bold</strong> and <em>em</em>");
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        let pipeline = InlinePipeline::new();
        assert_eq!(pipeline.replace_emphasis("*a\nb*"), "*a\nb*");
    }

    #[test]
    fn test_code_fence_spans_lines() {
        let pipeline = InlinePipeline::new();
        assert_eq!(
            pipeline.replace_code_blocks("```\nlet x = 1;\n```"),
            "<pre><code>\nlet x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn test_fence_before_inline_code() {
        let pipeline = InlinePipeline::new();
        let text = pipeline.replace_code_blocks("```a``` and `b`");
        let text = pipeline.replace_inline_code(&text);

        assert_eq!(text, "<pre><code>a</code></pre> and <code>b</code>");
    }

    #[test]
    fn test_list_item_markers() {
        let pipeline = InlinePipeline::new();
        assert_eq!(pipeline.replace_list_items("* star"), "<li>star</li>");
        assert_eq!(pipeline.replace_list_items("- dash"), "<li>dash</li>");
        assert_eq!(pipeline.replace_list_items("12. num"), "<li>num</li>");
    }

    #[test]
    fn test_list_marker_mid_line_ignored() {
        let pipeline = InlinePipeline::new();
        assert_eq!(pipeline.replace_list_items("a - b"), "a - b");
    }

    #[test]
    fn test_apply_stage_order() {
        let pipeline = InlinePipeline::new();
        let result = pipeline.apply("# Title **loud**");
        assert_eq!(result, "<h1>Title <strong>loud</strong></h1>");
    }
}
