//! Line Classification and Block Splitting
//!
//! The quiz format is line oriented. This module turns source text into question blocks and
//! classifies individual lines. Classification is stateless: whether a classified line is
//! meaningful in its position (a choice line after the feedback, say) is decided by the
//! consumer.

use crate::quiz::patterns::{
    is_question_boundary, match_choice_line, match_metadata_tag, ChoiceLine, MetadataTag,
    QUESTION_HEADER_REGEX,
};

const FEEDBACK_PREFIX: &str = "feedback:";

/// The kind of a single line inside a question block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace only
    Blank,
    /// `[Key: value]`
    Metadata(MetadataTag<'a>),
    /// `a) text` / `*a) text`
    Choice(ChoiceLine<'a>),
    /// `Feedback: rest`, case-insensitive. Holds the trimmed remainder.
    Feedback(&'a str),
    /// Anything else
    Text(&'a str),
}

/// Determine the kind of a line as written.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(tag) = match_metadata_tag(line) {
        return LineKind::Metadata(tag);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(choice) = match_choice_line(line) {
        return LineKind::Choice(choice);
    }
    if let Some(rest) = feedback_remainder(trimmed) {
        return LineKind::Feedback(rest);
    }
    LineKind::Text(line)
}

/// If the trimmed line starts with `feedback:` (any case), return what follows it.
fn feedback_remainder(trimmed: &str) -> Option<&str> {
    let prefix = trimmed.get(..FEEDBACK_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(FEEDBACK_PREFIX) {
        Some(trimmed[FEEDBACK_PREFIX.len()..].trim())
    } else {
        None
    }
}

/// The lines between one question header and the next boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock<'a> {
    /// 1-based position among the blocks of the document
    pub index: usize,
    /// The number written in the header (`## Question 7` gives `"7"`)
    pub number: &'a str,
    /// 1-based line of the header within the scanned text
    pub header_line: usize,
    pub lines: Vec<&'a str>,
}

/// Split text into question blocks in document order.
///
/// A block starts at a `## Question <N>` header and runs up to the next line that begins with
/// `## Question` or the end of the text. A boundary line that is not a valid header closes the
/// current block without opening a new one; lines after it belong to no block.
pub fn split_question_blocks(text: &str) -> Vec<QuestionBlock<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<QuestionBlock<'_>> = None;

    for (line_idx, line) in text.lines().enumerate() {
        if is_question_boundary(line) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            if let Some(caps) = QUESTION_HEADER_REGEX.captures(line) {
                let number = caps.get(1).map_or("", |m| m.as_str());
                current = Some(QuestionBlock {
                    index: blocks.len() + 1,
                    number,
                    header_line: line_idx + 1,
                    lines: Vec::new(),
                });
            }
            continue;
        }
        if let Some(block) = current.as_mut() {
            block.lines.push(line);
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}
