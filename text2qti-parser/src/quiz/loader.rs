//! Quiz loading utilities
//!
//! This module provides `QuizLoader` - a utility for loading quiz text from files or strings
//! and running the validator and parser on it. It is used by the CLI, the exporter tests and
//! the sample loader alike.
//!
//! # Example
//!
//! ```rust,ignore
//! use text2qti_parser::QuizLoader;
//!
//! // From file, validate then parse
//! let quiz = QuizLoader::from_path("quiz.md")?.load()?;
//!
//! // From string
//! let quiz = QuizLoader::from_string("## Question 1\n...").parse()?;
//! ```

use crate::quiz::error::{LoaderError, ParseError, ValidationError};
use crate::quiz::model::Quiz;
use crate::quiz::{parsing, validator};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Quiz loader with validate/parse shortcuts.
#[derive(Debug, Clone)]
pub struct QuizLoader {
    source: String,
}

impl QuizLoader {
    /// Load from a file path. The whole file is read and must be UTF-8.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoaderError::NotFound(path.to_path_buf()),
            _ => LoaderError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let source =
            String::from_utf8(bytes).map_err(|_| LoaderError::NotUtf8(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded quiz source");
        Ok(QuizLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        QuizLoader {
            source: source.into(),
        }
    }

    /// Run the structural validator only.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validator::validate(&self.source)
    }

    /// Run the content parser only.
    pub fn parse(&self) -> Result<Quiz, ParseError> {
        parsing::parse(&self.source)
    }

    /// Validate, then parse. A validation failure stops before parsing.
    pub fn load(&self) -> Result<Quiz, LoaderError> {
        self.validate()?;
        Ok(self.parse()?)
    }

    /// Get the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Check quiz text for structural problems.
pub fn validate_content(text: &str) -> Result<(), ValidationError> {
    validator::validate(text)
}

/// Parse quiz text into a validated document model.
pub fn parse_content(text: &str) -> Result<Quiz, ParseError> {
    parsing::parse(text)
}

/// Read a file and check it for structural problems.
pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<(), LoaderError> {
    QuizLoader::from_path(path)?.validate()?;
    Ok(())
}

/// Read a file and parse it.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Quiz, LoaderError> {
    Ok(QuizLoader::from_path(path)?.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const QUIZ: &str = "---\ntitle: Loader\n---\n## Question 1\n[Type: true_false]\nQ?\n*a) True\nb) False\n";

    #[test]
    fn test_from_string() {
        let loader = QuizLoader::from_string(QUIZ);
        assert_eq!(loader.source(), QUIZ);
        assert!(loader.validate().is_ok());
        assert_eq!(loader.load().unwrap().metadata().title(), "Loader");
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(QUIZ.as_bytes()).unwrap();
        let quiz = parse_file(file.path()).unwrap();
        assert_eq!(quiz.questions().len(), 1);
        assert!(validate_file(file.path()).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = QuizLoader::from_path("does/not/exist.md").unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
        assert!(err.to_string().starts_with("File not found:"));
    }

    #[test]
    fn test_not_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, b'#']).unwrap();
        let err = QuizLoader::from_path(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::NotUtf8(_)));
    }

    #[test]
    fn test_load_stops_at_validation() {
        let err = QuizLoader::from_string("no questions").load().unwrap_err();
        assert!(matches!(err, LoaderError::Validation(_)));
    }

    #[test]
    fn test_content_entry_points() {
        assert!(validate_content(QUIZ).is_ok());
        assert_eq!(parse_content(QUIZ).unwrap().total_points(), 1);
    }
}
