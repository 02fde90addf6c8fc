use crate::quiz::error::{ModelError, UnknownQuestionType};
use crate::quiz::model::AnswerChoice;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The supported question types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::MultipleChoice, QuestionType::TrueFalse];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::TrueFalse => "true_false",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        QuestionType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == folded)
            .ok_or_else(|| UnknownQuestionType(s.to_string()))
    }
}

/// A validated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: String,
    #[serde(rename = "type")]
    question_type: QuestionType,
    text: String,
    choices: Vec<AnswerChoice>,
    points: u64,
    feedback: Option<String>,
}

impl Question {
    pub fn builder(question_type: QuestionType, text: impl Into<String>) -> QuestionBuilder {
        QuestionBuilder::new(question_type, text)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn choices(&self) -> &[AnswerChoice] {
        &self.choices
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Choices marked as correct, in order.
    pub fn correct_choices(&self) -> impl Iterator<Item = &AnswerChoice> {
        self.choices.iter().filter(|c| c.is_correct())
    }
}

/// Collects the fields of a [`Question`]; nothing is checked until [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct QuestionBuilder {
    id: Option<String>,
    question_type: QuestionType,
    text: String,
    choices: Vec<AnswerChoice>,
    points: i64,
    feedback: Option<String>,
}

impl QuestionBuilder {
    pub fn new(question_type: QuestionType, text: impl Into<String>) -> Self {
        QuestionBuilder {
            id: None,
            question_type,
            text: text.into(),
            choices: Vec::new(),
            points: 1,
            feedback: None,
        }
    }

    /// An explicit id. Blank ids are treated as absent.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn choice(mut self, choice: AnswerChoice) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn choices(mut self, choices: impl IntoIterator<Item = AnswerChoice>) -> Self {
        self.choices.extend(choices);
        self
    }

    pub fn points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    pub fn feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    /// Check every invariant, first violation wins, and produce the question.
    ///
    /// A fresh random id is generated here, once, when no usable explicit id was given.
    pub fn build(self) -> Result<Question, ModelError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ModelError::EmptyQuestionText);
        }
        check_choices(self.question_type, &self.choices)?;
        if self.points < 1 {
            return Err(ModelError::InvalidPoints(self.points));
        }

        let id = match self.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };
        let feedback = self
            .feedback
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());

        Ok(Question {
            id,
            question_type: self.question_type,
            text: text.to_string(),
            choices: self.choices,
            points: self.points as u64,
            feedback,
        })
    }
}

fn check_choices(question_type: QuestionType, choices: &[AnswerChoice]) -> Result<(), ModelError> {
    if choices.is_empty() {
        return Err(ModelError::NoChoices);
    }

    let sequential = choices
        .iter()
        .zip('a'..='z')
        .all(|(choice, expected)| choice.letter() == expected)
        && choices.len() <= 26;
    if !sequential {
        return Err(ModelError::NonSequentialLetters(
            choices.iter().map(|c| c.letter().to_string()).collect(),
        ));
    }

    let correct = choices.iter().filter(|c| c.is_correct()).count();
    if correct == 0 {
        return Err(ModelError::NoCorrectAnswer);
    }

    match question_type {
        QuestionType::TrueFalse => {
            if choices.len() != 2 {
                return Err(ModelError::TrueFalseChoiceCount(choices.len()));
            }
        }
        QuestionType::MultipleChoice => {
            if choices.len() < 2 {
                return Err(ModelError::TooFewChoices(choices.len()));
            }
            if correct != 1 {
                return Err(ModelError::CorrectAnswerCount(correct));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(letter: char, text: &str, correct: bool) -> AnswerChoice {
        AnswerChoice::new(letter, text, correct).unwrap()
    }

    fn two_choices() -> Vec<AnswerChoice> {
        vec![choice('a', "Wrong", false), choice('b', "Right", true)]
    }

    #[test]
    fn test_question_type_from_str() {
        assert_eq!(
            "multiple_choice".parse::<QuestionType>(),
            Ok(QuestionType::MultipleChoice)
        );
        assert_eq!(
            " TRUE_FALSE ".parse::<QuestionType>(),
            Ok(QuestionType::TrueFalse)
        );
        assert_eq!(
            "essay".parse::<QuestionType>(),
            Err(UnknownQuestionType("essay".into()))
        );
    }

    #[test]
    fn test_build_defaults() {
        let q = Question::builder(QuestionType::MultipleChoice, "  Q?\n ")
            .choices(two_choices())
            .build()
            .unwrap();
        assert_eq!(q.text(), "Q?");
        assert_eq!(q.points(), 1);
        assert_eq!(q.feedback(), None);
        assert!(!q.id().is_empty());
        assert_eq!(q.correct_choices().count(), 1);
    }

    #[test]
    fn test_blank_id_generates_fresh_ids() {
        let a = Question::builder(QuestionType::MultipleChoice, "Q?")
            .id("  ")
            .choices(two_choices())
            .build()
            .unwrap();
        let b = Question::builder(QuestionType::MultipleChoice, "Q?")
            .choices(two_choices())
            .build()
            .unwrap();
        assert_ne!(a.id(), b.id());
        assert!(Uuid::parse_str(a.id()).is_ok());
    }

    #[test]
    fn test_explicit_id_kept_verbatim() {
        let q = Question::builder(QuestionType::MultipleChoice, "Q?")
            .id("geo-1")
            .choices(two_choices())
            .build()
            .unwrap();
        assert_eq!(q.id(), "geo-1");
    }

    #[test]
    fn test_empty_text_fails_first() {
        let err = Question::builder(QuestionType::MultipleChoice, "   ")
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::EmptyQuestionText);
    }

    #[test]
    fn test_no_choices() {
        let err = Question::builder(QuestionType::TrueFalse, "Q?")
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::NoChoices);
    }

    #[test]
    fn test_letters_must_be_contiguous() {
        let err = Question::builder(QuestionType::MultipleChoice, "Q?")
            .choice(choice('a', "x", true))
            .choice(choice('c', "y", false))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::NonSequentialLetters(vec!["a".into(), "c".into()])
        );
    }

    #[test]
    fn test_letters_must_start_at_a() {
        let err = Question::builder(QuestionType::MultipleChoice, "Q?")
            .choice(choice('b', "x", true))
            .choice(choice('c', "y", false))
            .build()
            .unwrap_err();
        assert!(matches!(err, ModelError::NonSequentialLetters(_)));
    }

    #[test]
    fn test_duplicate_letters_rejected() {
        let err = Question::builder(QuestionType::MultipleChoice, "Q?")
            .choice(choice('a', "x", true))
            .choice(choice('a', "y", false))
            .build()
            .unwrap_err();
        assert!(matches!(err, ModelError::NonSequentialLetters(_)));
    }

    #[test]
    fn test_needs_a_correct_answer() {
        let err = Question::builder(QuestionType::TrueFalse, "Q?")
            .choice(choice('a', "True", false))
            .choice(choice('b', "False", false))
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::NoCorrectAnswer);
    }

    #[test]
    fn test_true_false_exactly_two() {
        let err = Question::builder(QuestionType::TrueFalse, "Q?")
            .choice(choice('a', "True", true))
            .choice(choice('b', "False", false))
            .choice(choice('c', "Maybe", false))
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::TrueFalseChoiceCount(3));
        assert!(err.to_string().contains("exactly 2 choices"));
    }

    #[test]
    fn test_true_false_allows_two_correct() {
        let q = Question::builder(QuestionType::TrueFalse, "Q?")
            .choice(choice('a', "True", true))
            .choice(choice('b', "Also true", true))
            .build();
        assert!(q.is_ok());
    }

    #[test]
    fn test_multiple_choice_needs_two_choices() {
        let err = Question::builder(QuestionType::MultipleChoice, "Q?")
            .choice(choice('a', "Only", true))
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::TooFewChoices(1));
    }

    #[test]
    fn test_multiple_choice_exactly_one_correct() {
        let err = Question::builder(QuestionType::MultipleChoice, "Q?")
            .choice(choice('a', "X", true))
            .choice(choice('b', "Y", true))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("exactly 1 correct answer"));
    }

    #[test]
    fn test_points_must_be_positive() {
        let err = Question::builder(QuestionType::MultipleChoice, "Q?")
            .choices(two_choices())
            .points(0)
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::InvalidPoints(0));
    }

    #[test]
    fn test_feedback_normalized() {
        let q = Question::builder(QuestionType::MultipleChoice, "Q?")
            .choices(two_choices())
            .feedback("  ")
            .build()
            .unwrap();
        assert_eq!(q.feedback(), None);

        let q = Question::builder(QuestionType::MultipleChoice, "Q?")
            .choices(two_choices())
            .feedback(" Nice ")
            .build()
            .unwrap();
        assert_eq!(q.feedback(), Some("Nice"));
    }
}
