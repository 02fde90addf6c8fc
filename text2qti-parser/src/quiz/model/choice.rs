use crate::quiz::error::ModelError;
use serde::Serialize;

/// A single answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerChoice {
    letter: char,
    text: String,
    is_correct: bool,
}

impl AnswerChoice {
    /// Build a choice. The text is trimmed and must not end up empty.
    ///
    /// Whether the letter fits in its question's sequence is checked by the question.
    pub fn new(letter: char, text: impl AsRef<str>, is_correct: bool) -> Result<Self, ModelError> {
        if !letter.is_ascii_lowercase() {
            return Err(ModelError::InvalidLetter(letter.to_string()));
        }
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(ModelError::EmptyChoiceText);
        }
        Ok(AnswerChoice {
            letter,
            text: text.to_string(),
            is_correct,
        })
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}
