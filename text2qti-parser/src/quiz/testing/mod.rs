//! Testing utilities for quiz documents
//!
//!     Quiz text is easy to get subtly wrong when written inline in a test: a missing blank line
//!     turns feedback into a stray line, an indented choice becomes question text, and so on. A
//!     test written against slightly-off input tunes the parser to the wrong thing.
//!
//!     Tests should therefore follow two rules:
//!
//!         1. Use the curated sample documents (via [Samples](samples::Samples)) for anything
//!            beyond a few lines.
//!         2. Check parsed quizzes with the fluent assertions (via [assert_quiz]) so failures
//!            name the question and choice that differ.
//!
//! Samples
//!
//!     Sample documents live under `samples/valid/` and `samples/invalid/` in the parser crate,
//!     each file prefixed with its number (`03-mixed-questions.md`).
//!
//!     ```rust,ignore
//!     use text2qti_parser::quiz::testing::{assert_quiz, Samples};
//!
//!     let quiz = Samples::valid(3).parse();
//!     assert_quiz(&quiz)
//!         .title("Science Basics")
//!         .question_count(3)
//!         .question(0, |q| {
//!             q.id("chem-water").points(2).correct_letters(&['b']);
//!         });
//!
//!     let err = Samples::invalid(1).validate_err();
//!     ```

mod assertions;
pub mod samples;

pub use assertions::{ChoiceAssertion, QuestionAssertion, QuizAssertion, TextMatch};
pub use samples::{SampleKind, SampleLoader, Samples};

use crate::quiz::model::Quiz;

/// Create an assertion builder for a quiz
pub fn assert_quiz(quiz: &Quiz) -> QuizAssertion<'_> {
    QuizAssertion { quiz }
}
