//! Front matter
//!
//! Quiz-level metadata lives in an optional YAML block at the very start of the document:
//!
//! ```text
//! ---
//! title: Capitals of Europe
//! description: A short geography warm-up
//! points_per_question: 2
//! shuffle_answers: true
//! ---
//! ```
//!
//! Every key is optional. Missing keys take their defaults (title `Untitled Quiz`, no
//! description, 1 point per question, no shuffling) and unknown keys are ignored.

use crate::quiz::error::ParseError;
use crate::quiz::model::QuizMetadata;
use crate::quiz::patterns::match_front_matter;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

pub const DEFAULT_TITLE: &str = "Untitled Quiz";

/// The recognized front matter keys, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrontMatterFields {
    title: Option<String>,
    description: Option<String>,
    #[serde(deserialize_with = "lenient_integer")]
    points_per_question: Option<i64>,
    #[serde(deserialize_with = "lenient_bool")]
    shuffle_answers: Option<bool>,
}

/// Integers, or strings holding one (`"2"`).
fn lenient_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected an integer, got {}", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected an integer, got '{}'", s))),
        _ => Err(D::Error::custom("expected an integer")),
    }
}

/// Booleans, including the YAML 1.1 spellings (`yes`, `off`, ...) as strings.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            _ => Err(D::Error::custom(format!("expected a boolean, got {}", n))),
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "on" | "t" | "1" => Ok(Some(true)),
            "false" | "no" | "n" | "off" | "f" | "0" => Ok(Some(false)),
            _ => Err(D::Error::custom(format!("expected a boolean, got '{}'", s))),
        },
        _ => Err(D::Error::custom("expected a boolean")),
    }
}

/// Source text split around its leading front matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSource<'a> {
    /// YAML body, `None` when the text has no front matter
    pub front_matter: Option<&'a str>,
    /// The text following the front matter (the whole text when there is none)
    pub body: &'a str,
}

pub fn split_front_matter(text: &str) -> SplitSource<'_> {
    match match_front_matter(text) {
        Some(fm) => SplitSource {
            front_matter: Some(fm.body),
            body: fm.rest,
        },
        None => SplitSource {
            front_matter: None,
            body: text,
        },
    }
}

/// Check that a front matter body is well-formed YAML, without interpreting it.
pub fn check_syntax(yaml: &str) -> Result<(), serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(());
    }
    serde_yaml::from_str::<Value>(yaml).map(|_| ())
}

/// Build the quiz metadata from an optional front matter body, applying defaults.
pub fn parse_metadata(yaml: Option<&str>) -> Result<QuizMetadata, ParseError> {
    let fields = match yaml {
        Some(yaml) => read_fields(yaml)?,
        None => {
            tracing::debug!("no front matter, using default quiz metadata");
            FrontMatterFields::default()
        }
    };

    let title = fields.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
    QuizMetadata::builder(title)
        .description(fields.description)
        .points_per_question(fields.points_per_question.unwrap_or(1))
        .shuffle_answers(fields.shuffle_answers.unwrap_or(false))
        .build()
        .map_err(ParseError::from)
}

fn read_fields(yaml: &str) -> Result<FrontMatterFields, ParseError> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatterFields::default());
    }
    let value: Value = serde_yaml::from_str(yaml)
        .map_err(|e| ParseError::new(format!("Invalid YAML front matter: {}", e)))?;
    match value {
        Value::Null => Ok(FrontMatterFields::default()),
        Value::Mapping(_) => serde_yaml::from_value(value)
            .map_err(|e| ParseError::new(format!("Invalid front matter: {}", e))),
        _ => Err(ParseError::new(
            "Invalid front matter: expected a mapping of keys to values",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_front_matter() {
        let split = split_front_matter("---\ntitle: Quiz\n---\n## Question 1\n");
        assert_eq!(split.front_matter, Some("title: Quiz"));
        assert_eq!(split.body, "## Question 1\n");
    }

    #[test]
    fn test_split_without_front_matter() {
        let split = split_front_matter("## Question 1\n");
        assert_eq!(split.front_matter, None);
        assert_eq!(split.body, "## Question 1\n");
    }

    #[test]
    fn test_defaults_without_front_matter() {
        let meta = parse_metadata(None).unwrap();
        assert_eq!(meta.title(), DEFAULT_TITLE);
        assert_eq!(meta.description(), None);
        assert_eq!(meta.points_per_question(), 1);
        assert!(!meta.shuffle_answers());
    }

    #[test]
    fn test_empty_front_matter_uses_defaults() {
        let meta = parse_metadata(Some("")).unwrap();
        assert_eq!(meta.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_all_fields() {
        let yaml = "title: Capitals\ndescription: Warm-up\npoints_per_question: 2\nshuffle_answers: true";
        let meta = parse_metadata(Some(yaml)).unwrap();
        assert_eq!(meta.title(), "Capitals");
        assert_eq!(meta.description(), Some("Warm-up"));
        assert_eq!(meta.points_per_question(), 2);
        assert!(meta.shuffle_answers());
    }

    #[test]
    fn test_yaml_1_1_forms_accepted() {
        let meta = parse_metadata(Some("shuffle_answers: yes\npoints_per_question: \"2\"")).unwrap();
        assert!(meta.shuffle_answers());
        assert_eq!(meta.points_per_question(), 2);

        let meta = parse_metadata(Some("shuffle_answers: Off")).unwrap();
        assert!(!meta.shuffle_answers());
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let meta = parse_metadata(Some("shuffle_answers:\npoints_per_question: ~")).unwrap();
        assert!(!meta.shuffle_answers());
        assert_eq!(meta.points_per_question(), 1);
    }

    #[test]
    fn test_unrecognized_bool_rejected() {
        let err = parse_metadata(Some("shuffle_answers: maybe")).unwrap_err();
        assert!(err.message.starts_with("Invalid front matter:"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let meta = parse_metadata(Some("title: Quiz\nauthor: Someone")).unwrap();
        assert_eq!(meta.title(), "Quiz");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = parse_metadata(Some("title: [unclosed")).unwrap_err();
        assert!(err.message.starts_with("Invalid YAML front matter:"));
    }

    #[test]
    fn test_non_mapping_front_matter() {
        let err = parse_metadata(Some("- a\n- b")).unwrap_err();
        assert!(err.message.contains("expected a mapping"));
    }

    #[test]
    fn test_wrong_field_type() {
        let err = parse_metadata(Some("points_per_question: many")).unwrap_err();
        assert!(err.message.starts_with("Invalid front matter:"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = parse_metadata(Some("title: \"  \"")).unwrap_err();
        assert_eq!(err.message, "Quiz title cannot be empty");
    }

    #[test]
    fn test_check_syntax() {
        assert!(check_syntax("title: ok").is_ok());
        assert!(check_syntax("title: [unclosed").is_err());
    }
}
