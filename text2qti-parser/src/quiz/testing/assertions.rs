//! Fluent assertions for parsed quizzes

use crate::quiz::model::{AnswerChoice, Question, QuestionType, Quiz};

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Assert that the actual text matches this pattern
    pub fn assert(&self, actual: &str, context: &str) {
        let (relation, expected) = match self {
            TextMatch::Exact(expected) => ("be", expected),
            TextMatch::StartsWith(prefix) => ("start with", prefix),
            TextMatch::Contains(substring) => ("contain", substring),
        };
        assert!(
            self.matches(actual),
            "{}: Expected text to {} '{}', but got '{}'",
            context,
            relation,
            expected,
            actual
        );
    }
}

pub struct QuizAssertion<'a> {
    pub(crate) quiz: &'a Quiz,
}

impl<'a> QuizAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.quiz.metadata().title(), "title");
        self
    }

    pub fn description(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.quiz.metadata().description(),
            expected,
            "description: Expected {:?}",
            expected
        );
        self
    }

    pub fn shuffle_answers(self, expected: bool) -> Self {
        assert_eq!(
            self.quiz.metadata().shuffle_answers(),
            expected,
            "shuffle_answers: Expected {}",
            expected
        );
        self
    }

    pub fn points_per_question(self, expected: u64) -> Self {
        assert_eq!(
            self.quiz.metadata().points_per_question(),
            expected,
            "points_per_question: Expected {}",
            expected
        );
        self
    }

    /// Assert the number of questions
    pub fn question_count(self, expected: usize) -> Self {
        let actual = self.quiz.questions().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} questions, found {}: [{}]",
            expected,
            actual,
            summarize_questions(self.quiz.questions())
        );
        self
    }

    pub fn total_points(self, expected: u64) -> Self {
        assert_eq!(
            self.quiz.total_points(),
            expected,
            "Expected {} total points",
            expected
        );
        self
    }

    /// Assert on a specific question by index
    pub fn question<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(QuestionAssertion<'a>),
    {
        let questions = self.quiz.questions();
        assert!(
            index < questions.len(),
            "Question index {} out of bounds (quiz has {} questions)",
            index,
            questions.len()
        );
        assertion(QuestionAssertion {
            question: &questions[index],
            context: format!("questions[{}]", index),
        });
        self
    }
}

pub struct QuestionAssertion<'a> {
    pub(crate) question: &'a Question,
    pub(crate) context: String,
}

impl<'a> QuestionAssertion<'a> {
    pub fn question_type(self, expected: QuestionType) -> Self {
        assert_eq!(
            self.question.question_type(),
            expected,
            "{}: Expected type {}",
            self.context,
            expected
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.question.text(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(self.question.text(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(self.question.text(), &self.context);
        self
    }

    pub fn id(self, expected: &str) -> Self {
        assert_eq!(
            self.question.id(),
            expected,
            "{}: Expected id '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn points(self, expected: u64) -> Self {
        assert_eq!(
            self.question.points(),
            expected,
            "{}: Expected {} points",
            self.context,
            expected
        );
        self
    }

    pub fn feedback(self, expected: &str) -> Self {
        match self.question.feedback() {
            Some(actual) => TextMatch::Exact(expected.to_string()).assert(actual, &self.context),
            None => panic!(
                "{}: Expected feedback '{}', found none",
                self.context, expected
            ),
        }
        self
    }

    pub fn no_feedback(self) -> Self {
        assert_eq!(
            self.question.feedback(),
            None,
            "{}: Expected no feedback",
            self.context
        );
        self
    }

    pub fn choice_count(self, expected: usize) -> Self {
        let actual = self.question.choices().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} choices, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert exactly which letters are marked correct, in order
    pub fn correct_letters(self, expected: &[char]) -> Self {
        let actual: Vec<char> = self
            .question
            .correct_choices()
            .map(AnswerChoice::letter)
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Expected correct letters {:?}",
            self.context, expected
        );
        self
    }

    /// Assert on a specific choice by index
    pub fn choice<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ChoiceAssertion<'a>),
    {
        let choices = self.question.choices();
        assert!(
            index < choices.len(),
            "{}: Choice index {} out of bounds ({} choices)",
            self.context,
            index,
            choices.len()
        );
        assertion(ChoiceAssertion {
            choice: &choices[index],
            context: format!("{}.choices[{}]", self.context, index),
        });
        self
    }
}

pub struct ChoiceAssertion<'a> {
    pub(crate) choice: &'a AnswerChoice,
    pub(crate) context: String,
}

impl<'a> ChoiceAssertion<'a> {
    pub fn letter(self, expected: char) -> Self {
        assert_eq!(
            self.choice.letter(),
            expected,
            "{}: Expected letter '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.choice.text(), &self.context);
        self
    }

    pub fn correct(self) -> Self {
        assert!(
            self.choice.is_correct(),
            "{}: Expected choice to be correct",
            self.context
        );
        self
    }

    pub fn incorrect(self) -> Self {
        assert!(
            !self.choice.is_correct(),
            "{}: Expected choice to be incorrect",
            self.context
        );
        self
    }
}

fn summarize_questions(questions: &[Question]) -> String {
    questions
        .iter()
        .map(|q| format!("{}:{}", q.question_type(), q.id()))
        .collect::<Vec<_>>()
        .join(", ")
}
