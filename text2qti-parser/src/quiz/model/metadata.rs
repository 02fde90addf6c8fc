use crate::quiz::error::ModelError;
use serde::Serialize;

/// Quiz-level settings carried in the front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizMetadata {
    title: String,
    description: Option<String>,
    points_per_question: u64,
    shuffle_answers: bool,
}

impl QuizMetadata {
    pub fn builder(title: impl Into<String>) -> QuizMetadataBuilder {
        QuizMetadataBuilder::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Default points for a question. Not applied by the model: questions without explicit
    /// points are worth 1 regardless of this value.
    pub fn points_per_question(&self) -> u64 {
        self.points_per_question
    }

    /// Pass-through flag for consumers; the model never reorders choices.
    pub fn shuffle_answers(&self) -> bool {
        self.shuffle_answers
    }
}

#[derive(Debug, Clone)]
pub struct QuizMetadataBuilder {
    title: String,
    description: Option<String>,
    points_per_question: i64,
    shuffle_answers: bool,
}

impl QuizMetadataBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        QuizMetadataBuilder {
            title: title.into(),
            description: None,
            points_per_question: 1,
            shuffle_answers: false,
        }
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn points_per_question(mut self, points: i64) -> Self {
        self.points_per_question = points;
        self
    }

    pub fn shuffle_answers(mut self, shuffle: bool) -> Self {
        self.shuffle_answers = shuffle;
        self
    }

    pub fn build(self) -> Result<QuizMetadata, ModelError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ModelError::EmptyTitle);
        }
        if self.points_per_question < 1 {
            return Err(ModelError::InvalidPointsPerQuestion(
                self.points_per_question,
            ));
        }
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(QuizMetadata {
            title: title.to_string(),
            description,
            points_per_question: self.points_per_question as u64,
            shuffle_answers: self.shuffle_answers,
        })
    }
}
