//! Error types
//!
//! Three families, one per stage:
//!
//! - [`ValidationError`]: the structural pre-check rejected the text
//! - [`ParseError`]: the text could not be turned into a document model
//! - [`ModelError`]: a model constructor rejected its inputs
//!
//! The parser never lets a [`ModelError`] escape: it is converted into a [`ParseError`] that
//! carries the invariant message unchanged, prefixed with the question position when the
//! failure happened inside a question block.

use std::path::PathBuf;
use thiserror::Error;

/// Invariant violations raised by the document model constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Letter must be a single lowercase letter, got: {0}")]
    InvalidLetter(String),
    #[error("Answer choice text cannot be empty")]
    EmptyChoiceText,
    #[error("Question text cannot be empty")]
    EmptyQuestionText,
    #[error("Question must have at least one answer choice")]
    NoChoices,
    #[error("Answer letters must be sequential (a, b, c, ...), got: {}", .0.join(", "))]
    NonSequentialLetters(Vec<String>),
    #[error("Question must have at least one correct answer")]
    NoCorrectAnswer,
    #[error("True/False questions must have exactly 2 choices")]
    TrueFalseChoiceCount(usize),
    #[error("Multiple choice questions must have at least 2 choices")]
    TooFewChoices(usize),
    #[error("Multiple choice questions must have exactly 1 correct answer, got: {0}")]
    CorrectAnswerCount(usize),
    #[error("Points must be at least 1, got: {0}")]
    InvalidPoints(i64),
    #[error("Points per question must be at least 1, got: {0}")]
    InvalidPointsPerQuestion(i64),
    #[error("Quiz title cannot be empty")]
    EmptyTitle,
    #[error("Quiz must have at least one question")]
    NoQuestions,
    #[error("Duplicate question IDs found: {0}")]
    DuplicateQuestionId(String),
    #[error("Total points exceed the maximum of {}", u64::MAX)]
    TotalPointsOverflow,
}

/// An unrecognized question type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid question type: {0}. Must be 'multiple_choice' or 'true_false'")]
pub struct UnknownQuestionType(pub String);

/// The structural validator rejected the text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
        }
    }

    /// A defect inside the `number`-th question block (1-based).
    pub fn in_question(number: usize, defect: impl std::fmt::Display) -> Self {
        ValidationError::new(format!("Question {}: {}", number, defect))
    }
}

/// The text could not be converted into a document model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", locate(.message, .line, .column))]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

fn locate(message: &str, line: &Option<usize>, column: &Option<usize>) -> String {
    match (line, column) {
        (Some(line), Some(column)) => format!("Line {}, Column {}: {}", line, column, message),
        (Some(line), None) => format!("Line {}: {}", line, message),
        _ => message.to_string(),
    }
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn at(mut self, line: usize, column: Option<usize>) -> Self {
        self.line = Some(line);
        self.column = column;
        self
    }

    /// Re-wrap an error raised while processing the `number`-th question block (1-based).
    ///
    /// The inner message is kept verbatim; any location it carried is dropped since the
    /// question position replaces it.
    pub fn in_question(number: usize, inner: ParseError) -> Self {
        ParseError::new(format!(
            "Error parsing Question {}: {}",
            number, inner.message
        ))
    }
}

impl From<ModelError> for ParseError {
    fn from(err: ModelError) -> Self {
        ParseError::new(err.to_string())
    }
}

impl From<UnknownQuestionType> for ParseError {
    fn from(err: UnknownQuestionType) -> Self {
        ParseError::new(err.to_string())
    }
}

/// Errors raised when loading a quiz from a file or string.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("File must be UTF-8 encoded: {}", .0.display())]
    NotUtf8(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
