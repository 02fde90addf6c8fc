//! Subcommand handlers
//!
//! Each handler prints its own success output to stdout and returns a [`CliError`] naming the
//! stage that failed; `main` turns that into a `✗ ...` line on stderr.

use crate::inspect::{quiz_to_json, summarize};
use std::path::{Path, PathBuf};
use text2qti_config::{ConfigError, Text2QtiConfig};
use text2qti_export::{ExportError, QtiGenerator, UnknownQtiVersion};
use text2qti_parser::{LoaderError, QuizLoader};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),
    #[error("Configuration Error: {0}")]
    Version(#[from] UnknownQtiVersion),
    #[error("Validation Error: {0}")]
    Validation(String),
    #[error("Parse Error: {0}")]
    Parse(String),
    #[error("Generation Error: {0}")]
    Generation(#[from] ExportError),
    #[error("Error: {0}")]
    Usage(String),
}

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub validate_only: bool,
}

/// A file that cannot be read is reported as a validation failure.
fn read_source(path: &Path) -> Result<QuizLoader, CliError> {
    QuizLoader::from_path(path).map_err(|err| CliError::Validation(err.to_string()))
}

pub fn validate(input: &Path) -> Result<(), CliError> {
    read_source(input)?
        .validate()
        .map_err(|err| CliError::Validation(err.to_string()))?;
    println!("✓ Validation successful!");
    Ok(())
}

pub fn convert(options: &ConvertOptions, config: &Text2QtiConfig) -> Result<(), CliError> {
    let version = config.qti_version()?;
    let loader = read_source(&options.input)?;

    if config.convert.validate_first || options.validate_only {
        loader
            .validate()
            .map_err(|err| CliError::Validation(err.to_string()))?;
    }
    if options.validate_only {
        println!("✓ Validation successful!");
        return Ok(());
    }

    let quiz = loader
        .parse()
        .map_err(|err| CliError::Parse(err.to_string()))?;
    tracing::debug!(questions = quiz.questions().len(), "parsed quiz");

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| config.convert.output.clone());
    let generator = QtiGenerator::new(&quiz, version, config.export_settings());
    let written = generator.write_package(&output)?;

    println!("✓ QTI package created: {}", written.display());
    println!("Total questions: {}", quiz.questions().len());
    println!("Total points: {}", quiz.total_points());
    Ok(())
}

pub fn inspect(input: &Path, format: &str) -> Result<(), CliError> {
    let quiz = read_source(input)?.load().map_err(|err| match err {
        LoaderError::Validation(err) => CliError::Validation(err.to_string()),
        other => CliError::Parse(other.to_string()),
    })?;

    let output = match format {
        "json" => quiz_to_json(&quiz).map_err(|err| CliError::Parse(err.to_string()))?,
        _ => summarize(&quiz),
    };
    println!("{}", output);
    Ok(())
}
