//! Document Model
//!
//!     The validated in-memory representation of a quiz. Every entity is a value object with a
//!     single validated construction path, so an instance that exists always satisfies its
//!     invariants:
//!
//!         - [`AnswerChoice`]: single lowercase letter, non-empty text
//!         - [`Question`]: built through [`QuestionBuilder`]; contiguous letters, at least one
//!           correct answer, and the per-type choice rules
//!         - [`QuizMetadata`]: built through [`QuizMetadataBuilder`]; non-empty title
//!         - [`Quiz`]: at least one question, pairwise distinct question ids
//!
//!     Nothing hands out mutable access after construction. The parser is the only production
//!     code that builds these; tests build them directly.

mod choice;
mod document;
mod metadata;
mod question;

pub use choice::AnswerChoice;
pub use document::Quiz;
pub use metadata::{QuizMetadata, QuizMetadataBuilder};
pub use question::{Question, QuestionBuilder, QuestionType};
