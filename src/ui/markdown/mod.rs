//! Response formatting pipeline.
//!
//! Assistant replies arrive as freeform text. [`parse_blocks`] converts that
//! text into an ordered sequence of typed [`Block`]s in a single forward
//! pass; [`format_inline`] splits paragraph and list item content into typed
//! [`InlineSpan`]s; [`language::detect`] assigns a language tag to each code
//! block. Blocks are derived fresh on every render pass and carry no
//! identity of their own.

mod inline;
pub mod language;
mod parser;
mod render;

#[cfg(test)]
mod tests;

pub use inline::{format_inline, InlineSpan};
pub use language::Language;
pub use parser::{parse_blocks, strip_list_marker};
pub use render::render_message;

/// One formatted unit derived from raw response text. Ordering within the
/// parsed sequence matches the order the constructs appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: String },
    /// Content keeps the original bullet or number marker; it is stripped by
    /// [`strip_list_marker`] when the item is rendered.
    ListItem { content: String },
    Code { content: String, language: Language },
    Paragraph { content: String },
}

/// The raw content of the last code block in `text`, if any.
pub fn latest_code_block(text: &str) -> Option<String> {
    parse_blocks(text)
        .into_iter()
        .rev()
        .find_map(|block| match block {
            Block::Code { content, .. } => Some(content),
            _ => None,
        })
}
