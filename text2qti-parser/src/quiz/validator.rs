//! Structural Validator
//!
//!     A pre-flight syntax check over raw quiz text. It scans lines and never builds a document
//!     model, so passing it does not guarantee that parsing succeeds (question text emptiness,
//!     for one, is not checked here). It is advisory: the parser re-derives and re-enforces the
//!     same rules on its own.
//!
//!     The validator strips `<!-- ... -->` comments before looking at anything. The stripped
//!     text is only used for checking and is never handed on; callers always parse the original
//!     text.
//!
//! Check order
//!
//!     Each check short-circuits on the first failure:
//!
//!         1. front matter, when present, is well-formed YAML
//!         2. at least one `## Question N` header exists
//!         3. per question block, in document order:
//!             a. exactly one `[Type: ...]` tag, naming a known type
//!             b. every `[Points: ...]` value is an integer
//!             c. at least one answer choice line
//!             d. choice letters run a, b, c, ... without gaps
//!             e. at least one choice carries the `*` marker
//!             f. no choice has blank text
//!             g. true/false: exactly 2 choices
//!             h. multiple choice: at least 2 choices, exactly 1 marked correct
//!
//!     Question numbers in messages are 1-based positions in the document, not the number
//!     written in the header.

use crate::quiz::error::ValidationError;
use crate::quiz::frontmatter::{check_syntax, split_front_matter};
use crate::quiz::lexing::{split_question_blocks, QuestionBlock};
use crate::quiz::model::QuestionType;
use crate::quiz::patterns::{
    has_question_header, match_choice_line, match_metadata_tag, parse_points, strip_comments,
    PointsValueError,
};

/// Validate quiz text. Returns normally when the text is structurally acceptable.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let stripped = strip_comments(text);
    let source = split_front_matter(&stripped);

    if let Some(yaml) = source.front_matter {
        check_syntax(yaml).map_err(|e| {
            ValidationError::new(format!("Invalid YAML syntax in front matter: {}", e))
        })?;
    }

    if !has_question_header(&stripped) {
        return Err(ValidationError::new(
            "No questions found. Questions must start with '## Question N' where N is a number.",
        ));
    }

    let blocks = split_question_blocks(source.body);
    if blocks.is_empty() {
        return Err(ValidationError::new("No questions found in content"));
    }

    tracing::debug!(blocks = blocks.len(), "validating question blocks");
    for block in &blocks {
        validate_block(block)?;
    }
    Ok(())
}

/// What a scan of one block found.
#[derive(Debug, Default)]
struct BlockScan<'a> {
    types: Vec<&'a str>,
    points: Vec<&'a str>,
    /// (letter, text, is_correct) in order of appearance
    choices: Vec<(char, &'a str, bool)>,
}

impl<'a> BlockScan<'a> {
    fn scan(block: &QuestionBlock<'a>) -> Self {
        let mut scan = BlockScan::default();
        for line in block.lines.iter().copied() {
            if let Some(tag) = match_metadata_tag(line) {
                match tag.key {
                    "Type" => scan.types.push(tag.value),
                    "Points" => scan.points.push(tag.value),
                    _ => {}
                }
                continue;
            }
            if let Some(choice) = match_choice_line(line.trim()) {
                scan.choices
                    .push((choice.letter, choice.text, choice.is_correct));
            }
        }
        scan
    }

    fn correct_count(&self) -> usize {
        self.choices.iter().filter(|(_, _, correct)| *correct).count()
    }
}

fn validate_block(block: &QuestionBlock<'_>) -> Result<(), ValidationError> {
    let n = block.index;
    let scan = BlockScan::scan(block);
    tracing::trace!(
        question = n,
        choices = scan.choices.len(),
        "scanned question block"
    );

    let question_type = check_type(n, &scan.types)?;

    for value in &scan.points {
        let problem = match parse_points(value) {
            Ok(_) => continue,
            Err(PointsValueError::NotInteger) => "is not an integer".to_string(),
            Err(PointsValueError::OutOfRange) => format!("is out of range (maximum {})", i64::MAX),
        };
        return Err(ValidationError::in_question(
            n,
            format!("Points value '{}' {}", value, problem),
        ));
    }

    if scan.choices.is_empty() {
        return Err(ValidationError::in_question(
            n,
            "No answer choices found. Answer choices must be in format: a) Text or *a) Correct answer",
        ));
    }

    let letters: Vec<char> = scan.choices.iter().map(|(letter, _, _)| *letter).collect();
    if !letters.iter().copied().eq(('a'..='z').take(letters.len())) {
        let found: Vec<String> = letters.iter().map(char::to_string).collect();
        return Err(ValidationError::in_question(
            n,
            format!(
                "Answer letters must be sequential (a, b, c, ...). Found: {}",
                found.join(", ")
            ),
        ));
    }

    let correct = scan.correct_count();
    if correct == 0 {
        return Err(ValidationError::in_question(
            n,
            "No correct answer specified. Mark correct answer with * (e.g., *c) Correct answer)",
        ));
    }

    if let Some((letter, _, _)) = scan.choices.iter().find(|(_, text, _)| text.is_empty()) {
        return Err(ValidationError::in_question(
            n,
            format!("Empty answer choice text for '{})'", letter),
        ));
    }

    let count = scan.choices.len();
    match question_type {
        QuestionType::TrueFalse if count != 2 => Err(ValidationError::in_question(
            n,
            format!(
                "True/False questions must have exactly 2 choices, found {}",
                count
            ),
        )),
        QuestionType::MultipleChoice if count < 2 => Err(ValidationError::in_question(
            n,
            format!(
                "Multiple choice must have at least 2 choices, found {}",
                count
            ),
        )),
        QuestionType::MultipleChoice if correct != 1 => Err(ValidationError::in_question(
            n,
            format!(
                "Multiple choice must have exactly 1 correct answer, found {}",
                correct
            ),
        )),
        _ => Ok(()),
    }
}

fn check_type(n: usize, types: &[&str]) -> Result<QuestionType, ValidationError> {
    let mut parsed = Vec::with_capacity(types.len());
    for value in types {
        let ty = value.parse::<QuestionType>().map_err(|_| {
            ValidationError::in_question(
                n,
                format!(
                    "Invalid question type '{}'. Must be 'multiple_choice' or 'true_false'",
                    value.to_lowercase()
                ),
            )
        })?;
        parsed.push(ty);
    }

    match parsed.as_slice() {
        [] => Err(ValidationError::in_question(
            n,
            "No question type specified. Use [Type: multiple_choice] or [Type: true_false]",
        )),
        [ty] => Ok(*ty),
        _ => Err(ValidationError::in_question(
            n,
            format!(
                "Multiple question types specified ({}). Use exactly one [Type: multiple_choice] or [Type: true_false]",
                parsed.len()
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "## Question 1\n[Type: multiple_choice]\nQ?\na) Wrong\n*b) Right\n";

    #[test]
    fn test_valid_document() {
        assert!(validate(VALID).is_ok());
    }

    #[test]
    fn test_no_questions() {
        let err = validate("---\ntitle: Quiz\n---\nJust prose\n").unwrap_err();
        assert!(err.message.starts_with("No questions found"));
    }

    #[test]
    fn test_header_only_inside_comment() {
        let err = validate("<!-- ## Question 1 -->\n").unwrap_err();
        assert!(err.message.starts_with("No questions found"));
    }

    #[test]
    fn test_comments_are_ignored() {
        let text = "## Question 1\n[Type: multiple_choice]\nQ?\n<!--\nc) hidden\n-->\na) Wrong\n*b) Right\n";
        assert!(validate(text).is_ok());
    }

    #[test]
    fn test_bad_yaml() {
        let err = validate(&format!("---\ntitle: [oops\n---\n{}", VALID)).unwrap_err();
        assert!(err
            .message
            .starts_with("Invalid YAML syntax in front matter:"));
    }

    #[test]
    fn test_type_is_case_folded() {
        let text = "## Question 1\n[Type: TRUE_FALSE]\nQ?\n*a) True\nb) False\n";
        assert!(validate(text).is_ok());
    }

    #[test]
    fn test_duplicate_type_tags_flagged() {
        let text = "## Question 1\n[Type: true_false]\n[Type: true_false]\nQ?\n*a) True\nb) False\n";
        let err = validate(text).unwrap_err();
        assert!(err.message.contains("Multiple question types"));
    }

    #[test]
    fn test_unknown_tags_pass() {
        let text = "## Question 1\n[Type: true_false]\n[Topic: physics]\nQ?\n*a) True\nb) False\n";
        assert!(validate(text).is_ok());
    }

    #[test]
    fn test_indented_choices_count() {
        let text = "## Question 1\n[Type: true_false]\nQ?\n  *a) True\n  b) False\n";
        assert!(validate(text).is_ok());
    }

    #[test]
    fn test_question_number_is_position() {
        let text = format!("{}## Question 7\n[Type: essay]\nQ?\n*a) x\nb) y\n", VALID);
        let err = validate(&text).unwrap_err();
        assert!(err.message.starts_with("Question 2: Invalid question type 'essay'"));
    }
}
