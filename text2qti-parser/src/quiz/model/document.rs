use crate::quiz::error::ModelError;
use crate::quiz::model::{Question, QuizMetadata};
use serde::Serialize;
use std::collections::HashSet;

/// A complete quiz: metadata plus an ordered, non-empty list of questions with distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    metadata: QuizMetadata,
    questions: Vec<Question>,
    #[serde(skip)]
    total_points: u64,
}

impl Quiz {
    pub fn new(metadata: QuizMetadata, questions: Vec<Question>) -> Result<Self, ModelError> {
        if questions.is_empty() {
            return Err(ModelError::NoQuestions);
        }
        if let Some(id) = first_duplicate_id(&questions) {
            return Err(ModelError::DuplicateQuestionId(id.to_string()));
        }
        let total_points = questions
            .iter()
            .try_fold(0u64, |total, q| total.checked_add(q.points()))
            .ok_or(ModelError::TotalPointsOverflow)?;
        Ok(Quiz {
            metadata,
            questions,
            total_points,
        })
    }

    pub fn metadata(&self) -> &QuizMetadata {
        &self.metadata
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Sum of every question's own points. `points_per_question` plays no part.
    pub fn total_points(&self) -> u64 {
        self.total_points
    }
}

fn first_duplicate_id(questions: &[Question]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(questions.len());
    questions
        .iter()
        .map(Question::id)
        .find(|id| !seen.insert(*id))
}
