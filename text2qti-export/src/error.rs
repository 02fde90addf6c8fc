use text2qti_parser::QuestionType;
use thiserror::Error;

/// Errors raised while rendering or packaging a quiz.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Question {id} has no correct answer")]
    MissingCorrectAnswer { id: String },
    #[error("Question {id} is {found}, but was given to the {expected} renderer")]
    WrongRenderer {
        id: String,
        expected: QuestionType,
        found: QuestionType,
    },
    #[error("Failed to create ZIP package: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to create ZIP package: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Failed to generate QTI package: {0}")]
    Package(String),
}

/// An unrecognized QTI version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported QTI version: {0}. Must be '1.2' or '2.1'")]
pub struct UnknownQtiVersion(pub String);
