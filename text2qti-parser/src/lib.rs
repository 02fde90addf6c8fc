//! # text2qti-parser
//!
//! Parser and structural validator for the text2qti quiz format.
//!
//! File Layout
//!
//!     The crate turns quiz source text into a validated document model. The two entry points
//!     share the same lexical layer but are otherwise independent: the validator only scans
//!     text and never builds a model, while the parser builds the model and relies on the
//!     model constructors to enforce every invariant.
//!
//! src/quiz
//!   ├── patterns.rs    Precompiled line recognizers
//!   ├── lexing.rs      Line classification and question block splitting
//!   ├── frontmatter.rs Front matter extraction and metadata defaults
//!   ├── model/         AnswerChoice, Question, QuizMetadata, Quiz
//!   ├── validator.rs   Structural pre-check over raw text
//!   ├── parsing.rs     Text to document model
//!   ├── loader.rs      File / string loading and entry points
//!   └── testing/       Curated samples and fluent assertions
//!
//! For testing guidelines, see the [testing module](quiz::testing).

pub mod quiz;

pub use quiz::error::{LoaderError, ModelError, ParseError, ValidationError};
pub use quiz::loader::{parse_content, parse_file, validate_content, validate_file, QuizLoader};
pub use quiz::model::{AnswerChoice, Question, QuestionType, Quiz, QuizMetadata};
