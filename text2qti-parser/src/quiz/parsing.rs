//! Content Parser
//!
//!     Converts quiz text into a fully validated [`Quiz`], or fails with a [`ParseError`].
//!
//! Pipeline
//!
//!     1. Front matter is split off and turned into [`QuizMetadata`](crate::quiz::model::QuizMetadata),
//!        defaults applied. Malformed front matter fails before any question is looked at.
//!     2. The remaining text is split into question blocks. No blocks is a failure.
//!     3. Each block goes through a single pass [`QuestionScanner`].
//!     4. The gathered fields are handed to the model builders, which enforce every invariant.
//!     5. The questions and metadata are assembled into a [`Quiz`] (at least one question,
//!        distinct ids).
//!
//!     Failures inside a block are re-wrapped exactly once, at the block boundary, as
//!     `Error parsing Question N: <message>` where N is the 1-based block position.
//!
//! Comments
//!
//!     The parser does not strip `<!-- ... -->` comments. Comment lines are seen as prose, or as
//!     choices and tags if they look like them.

use crate::quiz::error::ParseError;
use crate::quiz::frontmatter::{parse_metadata, split_front_matter};
use crate::quiz::lexing::{classify_line, split_question_blocks, LineKind, QuestionBlock};
use crate::quiz::model::{AnswerChoice, Question, QuestionType, Quiz};
use crate::quiz::patterns::{parse_points, ChoiceLine, MetadataTag, PointsValueError};

/// Parse quiz text into a validated quiz.
pub fn parse(text: &str) -> Result<Quiz, ParseError> {
    let source = split_front_matter(text);
    let metadata = parse_metadata(source.front_matter)?;

    let blocks = split_question_blocks(source.body);
    if blocks.is_empty() {
        return Err(ParseError::new(
            "No questions found in quiz. Questions must start with '## Question N'",
        ));
    }

    let mut questions = Vec::with_capacity(blocks.len());
    for block in &blocks {
        tracing::debug!(
            question = block.index,
            header = block.number,
            line = block.header_line,
            lines = block.lines.len(),
            "parsing question block"
        );
        let question =
            parse_question_block(block).map_err(|e| ParseError::in_question(block.index, e))?;
        questions.push(question);
    }

    Ok(Quiz::new(metadata, questions)?)
}

/// Parse one question block into a question. Errors are not position-prefixed.
pub fn parse_question_block(block: &QuestionBlock<'_>) -> Result<Question, ParseError> {
    let mut scanner = QuestionScanner::new(block.index);
    for line in block.lines.iter().copied() {
        scanner.feed(line)?;
    }
    scanner.finish()
}

/// Where the scanner is inside a question block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Before the first choice: prose lines are question text
    Prompt,
    /// After the first choice: prose lines are dropped
    Choices,
    /// Inside a feedback paragraph: every non-blank line is feedback
    Feedback,
    /// The feedback paragraph ended: only metadata tags still count
    Done,
}

/// Single pass, line-by-line scanner for one question block.
///
/// Metadata tags are honored anywhere outside the feedback paragraph; when a key repeats, the
/// last value wins.
#[derive(Debug)]
pub struct QuestionScanner<'a> {
    index: usize,
    state: ScanState,
    question_type: Option<QuestionType>,
    points: Option<i64>,
    id: Option<String>,
    text_lines: Vec<&'a str>,
    choices: Vec<AnswerChoice>,
    feedback_lines: Option<Vec<&'a str>>,
}

impl<'a> QuestionScanner<'a> {
    pub fn new(index: usize) -> Self {
        QuestionScanner {
            index,
            state: ScanState::Prompt,
            question_type: None,
            points: None,
            id: None,
            text_lines: Vec::new(),
            choices: Vec::new(),
            feedback_lines: None,
        }
    }

    /// Consume the next line of the block.
    pub fn feed(&mut self, line: &'a str) -> Result<(), ParseError> {
        if self.state == ScanState::Feedback {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                self.state = ScanState::Done;
            } else if let Some(lines) = self.feedback_lines.as_mut() {
                lines.push(trimmed);
            }
            return Ok(());
        }

        let kind = classify_line(line);
        tracing::trace!(question = self.index, ?kind, "classified line");
        match (self.state, kind) {
            (_, LineKind::Metadata(tag)) => self.apply_tag(tag)?,
            (ScanState::Prompt | ScanState::Choices, LineKind::Choice(choice)) => {
                self.push_choice(choice)?
            }
            (ScanState::Choices, LineKind::Feedback(rest)) => {
                let mut lines = Vec::new();
                if !rest.is_empty() {
                    lines.push(rest);
                }
                self.feedback_lines = Some(lines);
                self.state = ScanState::Feedback;
            }
            // A feedback introducer before any choice is ordinary prose.
            (ScanState::Prompt, LineKind::Text(_) | LineKind::Feedback(_)) => {
                self.text_lines.push(line)
            }
            _ => {}
        }
        Ok(())
    }

    fn apply_tag(&mut self, tag: MetadataTag<'_>) -> Result<(), ParseError> {
        match tag.key {
            "Type" => {
                let question_type = tag.value.parse::<QuestionType>()?;
                if self.question_type.replace(question_type).is_some() {
                    self.warn_repeated("Type");
                }
            }
            "Points" => {
                let points = parse_points(tag.value).map_err(|err| {
                    ParseError::new(match err {
                        PointsValueError::NotInteger => format!(
                            "Invalid points value: {}. Must be an integer",
                            tag.raw_value
                        ),
                        PointsValueError::OutOfRange => format!(
                            "Invalid points value: {}. Must be at most {}",
                            tag.raw_value,
                            i64::MAX
                        ),
                    })
                })?;
                if self.points.replace(points).is_some() {
                    self.warn_repeated("Points");
                }
            }
            "ID" => {
                if self.id.replace(tag.value.to_string()).is_some() {
                    self.warn_repeated("ID");
                }
            }
            other => {
                tracing::trace!(question = self.index, key = other, "ignoring metadata tag");
            }
        }
        Ok(())
    }

    fn warn_repeated(&self, key: &str) {
        tracing::warn!(
            question = self.index,
            key,
            "metadata tag repeated in question block, last value wins"
        );
    }

    fn push_choice(&mut self, choice: ChoiceLine<'_>) -> Result<(), ParseError> {
        self.choices.push(AnswerChoice::new(
            choice.letter,
            choice.text,
            choice.is_correct,
        )?);
        self.state = ScanState::Choices;
        Ok(())
    }

    /// Check that the required parts were seen and build the question.
    pub fn finish(self) -> Result<Question, ParseError> {
        let question_type = self.question_type.ok_or_else(|| {
            ParseError::new(
                "Question type not specified. Use [Type: multiple_choice] or [Type: true_false]",
            )
        })?;

        let text = self.text_lines.join("\n");
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::new("Question text is empty"));
        }
        if self.choices.is_empty() {
            return Err(ParseError::new("No answer choices found"));
        }

        let mut builder = Question::builder(question_type, text).choices(self.choices);
        if let Some(points) = self.points {
            builder = builder.points(points);
        }
        if let Some(id) = self.id {
            builder = builder.id(id);
        }
        if let Some(lines) = self.feedback_lines {
            builder = builder.feedback(lines.join(" "));
        }
        Ok(builder.build()?)
    }
}
