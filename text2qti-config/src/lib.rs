//! Configuration for the text2qti tools.
//!
//! Every key has a value in `defaults/text2qti.default.toml`, which is compiled in. A
//! [`Loader`] stacks project and user TOML files and command-line overrides above it, and the
//! merged result deserializes into [`Text2QtiConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use text2qti_export::{ExportSettings, QtiVersion, UnknownQtiVersion};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/text2qti.default.toml");

/// Name of the project-local configuration file picked up from the working directory.
pub const PROJECT_CONFIG_FILE: &str = "text2qti.toml";

/// Top-level configuration consumed by text2qti applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Text2QtiConfig {
    pub convert: ConvertConfig,
    pub assessment: AssessmentConfig,
    pub feedback: FeedbackConfig,
}

/// Defaults for the `convert` command.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub qti_version: String,
    pub output: PathBuf,
    pub validate_first: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    pub identifier: String,
    pub max_attempts: u32,
}

/// Item feedback used when a question carries none.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    pub correct: String,
    pub incorrect: String,
}

impl Text2QtiConfig {
    pub fn qti_version(&self) -> Result<QtiVersion, UnknownQtiVersion> {
        self.convert.qti_version.parse()
    }

    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            assessment_id: self.assessment.identifier.clone(),
            max_attempts: self.assessment.max_attempts,
            correct_feedback: self.feedback.correct.clone(),
            incorrect_feedback: self.feedback.incorrect.clone(),
        }
    }
}

/// Builds a [`Text2QtiConfig`] from the embedded defaults plus whatever the caller stacks on
/// top. Later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Stack a TOML file that must exist; a missing file fails at [`Loader::build`].
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Stack a TOML file when it exists, such as the project-local `text2qti.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    /// Set one dotted key (`convert.qti_version`) above every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Text2QtiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<Text2QtiConfig, ConfigError> {
    Loader::new().build()
}
