//! Lexical Patterns
//!
//! Precompiled recognizers for the quiz format. Every pattern is compiled once, on first use,
//! into process-wide read-only state. The `regex` crate guarantees linear-time matching, so
//! none of the recognizers can be driven into catastrophic backtracking by adversarial input.
//!
//! # Recognizers
//!
//! 1. front matter - a leading `---` fenced block at the very start of the text
//! 2. question header - `## Question <N>`, delimits question blocks
//! 3. question boundary - any line beginning with `## Question`, ends the current block
//! 4. metadata tag - `[Key: value]` on a line of its own
//! 5. answer choice - `a) text`, with an optional leading `*` marking the correct answer
//! 6. comment - `<!-- ... -->` spans, possibly multi-line (validator only)

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::num::IntErrorKind;

/// Leading front matter block. Group 1 is the YAML body, absent when the block is empty.
pub(crate) static FRONT_MATTER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)").unwrap()
});

/// A complete question header line. Group 1 is the number as written.
pub(crate) static QUESTION_HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##[ \t]+Question[ \t]+(\d+)[ \t]*$").unwrap());

/// Anything that looks like the start of a question header terminates the current block.
pub(crate) static QUESTION_BOUNDARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##\s+Question").unwrap());

pub(crate) static METADATA_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(\w+):\s*([^\]]+)\]\s*$").unwrap());

pub(crate) static ANSWER_CHOICE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\*)?([a-z])\)\s+(.+)$").unwrap());

pub(crate) static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// A `[Key: value]` line. The value is trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataTag<'a> {
    pub key: &'a str,
    pub value: &'a str,
    /// The value exactly as captured, before trimming
    pub raw_value: &'a str,
}

/// An answer choice line such as `*b) Paris`. The text is trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceLine<'a> {
    pub letter: char,
    pub text: &'a str,
    pub is_correct: bool,
}

/// The span of a leading front matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// The YAML between the fences (empty when the block is empty)
    pub body: &'a str,
    /// Everything after the closing fence
    pub rest: &'a str,
}

/// Locate a leading front matter block.
pub fn match_front_matter(text: &str) -> Option<FrontMatter<'_>> {
    let caps = FRONT_MATTER_REGEX.captures(text)?;
    let whole = caps.get(0)?;
    let body = caps.get(1).map_or("", |m| m.as_str());
    Some(FrontMatter {
        body,
        rest: &text[whole.end()..],
    })
}

pub fn is_question_header(line: &str) -> bool {
    QUESTION_HEADER_REGEX.is_match(line)
}

pub fn is_question_boundary(line: &str) -> bool {
    QUESTION_BOUNDARY_REGEX.is_match(line)
}

/// Does the text contain at least one question header line?
pub fn has_question_header(text: &str) -> bool {
    text.lines().any(is_question_header)
}

pub fn match_metadata_tag(line: &str) -> Option<MetadataTag<'_>> {
    let caps = METADATA_TAG_REGEX.captures(line)?;
    let raw_value = caps.get(2)?.as_str();
    Some(MetadataTag {
        key: caps.get(1)?.as_str(),
        value: raw_value.trim(),
        raw_value,
    })
}

pub fn match_choice_line(line: &str) -> Option<ChoiceLine<'_>> {
    let caps = ANSWER_CHOICE_REGEX.captures(line)?;
    let letter = caps.get(2)?.as_str().chars().next()?;
    Some(ChoiceLine {
        letter,
        text: caps.get(3)?.as_str().trim(),
        is_correct: caps.get(1).is_some(),
    })
}

/// Why a `[Points: ...]` value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsValueError {
    NotInteger,
    /// An integer, but outside `i64`
    OutOfRange,
}

/// Read a `[Points: ...]` value as a signed integer. Sign checks belong to the model.
pub fn parse_points(value: &str) -> Result<i64, PointsValueError> {
    value.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => PointsValueError::OutOfRange,
        _ => PointsValueError::NotInteger,
    })
}

/// Remove every `<!-- ... -->` span. Unterminated comments are left alone.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT_REGEX.replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        assert_eq!(parse_points("3"), Ok(3));
        assert_eq!(parse_points("-2"), Ok(-2));
        assert_eq!(parse_points("1.5"), Err(PointsValueError::NotInteger));
        assert_eq!(parse_points("two"), Err(PointsValueError::NotInteger));
        assert_eq!(
            parse_points("99999999999999999999"),
            Err(PointsValueError::OutOfRange)
        );
        assert_eq!(
            parse_points("-99999999999999999999"),
            Err(PointsValueError::OutOfRange)
        );
    }

    #[test]
    fn test_front_matter_with_body() {
        let fm = match_front_matter("---\ntitle: Quiz\n---\n## Question 1\n").unwrap();
        assert_eq!(fm.body, "title: Quiz");
        assert_eq!(fm.rest, "## Question 1\n");
    }

    #[test]
    fn test_front_matter_empty_body() {
        let fm = match_front_matter("---\n---\nrest").unwrap();
        assert_eq!(fm.body, "");
        assert_eq!(fm.rest, "rest");
    }

    #[test]
    fn test_front_matter_must_lead() {
        assert!(match_front_matter("\n---\ntitle: x\n---\n").is_none());
        assert!(match_front_matter("## Question 1\n---\ntitle: x\n---\n").is_none());
    }

    #[test]
    fn test_front_matter_trailing_whitespace_on_fences() {
        let fm = match_front_matter("---  \ntitle: x\n--- \t\nbody").unwrap();
        assert_eq!(fm.body, "title: x");
        assert_eq!(fm.rest, "body");
    }

    #[test]
    fn test_front_matter_stops_at_first_closing_fence() {
        let fm = match_front_matter("---\na: 1\n---\nb\n---\n").unwrap();
        assert_eq!(fm.body, "a: 1");
        assert_eq!(fm.rest, "b\n---\n");
    }

    #[test]
    fn test_question_header() {
        assert!(is_question_header("## Question 1"));
        assert!(is_question_header("##  Question   12   "));
        assert!(!is_question_header("## Question"));
        assert!(!is_question_header("## Question one"));
        assert!(!is_question_header("# Question 1"));
        assert!(!is_question_header(" ## Question 1"));
    }

    #[test]
    fn test_question_boundary_is_looser_than_header() {
        assert!(is_question_boundary("## Questionnaire"));
        assert!(!is_question_header("## Questionnaire"));
    }

    #[test]
    fn test_metadata_tag() {
        let tag = match_metadata_tag("[Type: multiple_choice]").unwrap();
        assert_eq!(tag.key, "Type");
        assert_eq!(tag.value, "multiple_choice");

        let tag = match_metadata_tag("[Points:  3 ]  ").unwrap();
        assert_eq!(tag.key, "Points");
        assert_eq!(tag.value, "3");
        assert_eq!(tag.raw_value, "3 ");
    }

    #[test]
    fn test_metadata_tag_rejects_malformed() {
        assert!(match_metadata_tag("[Type:]").is_none());
        assert!(match_metadata_tag("[Type multiple_choice]").is_none());
        assert!(match_metadata_tag("text [Type: x]").is_none());
        assert!(match_metadata_tag("[Two words: x]").is_none());
    }

    #[test]
    fn test_choice_line() {
        let choice = match_choice_line("*b) Paris").unwrap();
        assert_eq!(choice.letter, 'b');
        assert_eq!(choice.text, "Paris");
        assert!(choice.is_correct);

        let choice = match_choice_line("a)   London  ").unwrap();
        assert_eq!(choice.letter, 'a');
        assert_eq!(choice.text, "London");
        assert!(!choice.is_correct);
    }

    #[test]
    fn test_choice_line_rejects_malformed() {
        assert!(match_choice_line("A) Upper").is_none());
        assert!(match_choice_line("a)Missing space").is_none());
        assert!(match_choice_line("a)").is_none());
        assert!(match_choice_line("  a) Indented").is_none());
        assert!(match_choice_line("**a) Double").is_none());
    }

    #[test]
    fn test_choice_line_whitespace_only_text() {
        let choice = match_choice_line("a) \t").unwrap();
        assert_eq!(choice.text, "");
    }

    #[test]
    fn test_strip_comments() {
        assert_eq!(strip_comments("a<!-- x -->b"), "ab");
        assert_eq!(strip_comments("a<!--\nmulti\nline\n-->b<!--c-->d"), "abd");
        assert_eq!(strip_comments("a<!-- open"), "a<!-- open");
    }
}
