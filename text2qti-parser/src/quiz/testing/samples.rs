//! Sample document finder and loader.
//!
//! Samples are resolved by kind and number: `Samples::valid(3)` finds the file in
//! `samples/valid/` whose name starts with `3-`, `03-` or `003-`. Two files resolving to the same
//! number is an error. Every loader method panics on failure, since they only run inside tests.

use crate::quiz::error::{ParseError, ValidationError};
use crate::quiz::loader::QuizLoader;
use crate::quiz::model::Quiz;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLES_ROOT: &str = "samples";

/// The sample collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Documents that validate and parse
    Valid,
    /// Documents that fail validation or parsing
    Invalid,
}

impl SampleKind {
    pub fn dir_name(&self) -> &'static str {
        match self {
            SampleKind::Valid => "valid",
            SampleKind::Invalid => "invalid",
        }
    }
}

/// Interface for loading sample documents
pub struct Samples;

impl Samples {
    /// Directory holding the samples of one kind
    pub fn root(kind: SampleKind) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(SAMPLES_ROOT)
            .join(kind.dir_name())
    }

    /// Start a fluent chain for a numbered sample
    pub fn load(kind: SampleKind, number: usize) -> SampleLoader {
        let path = find_sample(kind, number)
            .unwrap_or_else(|e| panic!("Failed to find {:?} sample #{}: {}", kind, number, e));
        SampleLoader { path }
    }

    pub fn valid(number: usize) -> SampleLoader {
        Self::load(SampleKind::Valid, number)
    }

    pub fn invalid(number: usize) -> SampleLoader {
        Self::load(SampleKind::Invalid, number)
    }

    /// Start a fluent chain for an arbitrary file
    pub fn from_path<P: Into<PathBuf>>(path: P) -> SampleLoader {
        SampleLoader { path: path.into() }
    }

    /// Every sample of a kind, ordered by number
    pub fn all(kind: SampleKind) -> Vec<SampleLoader> {
        let mut numbered: Vec<(usize, PathBuf)> = list_by_number(&Self::root(kind))
            .unwrap_or_else(|e| panic!("Failed to list {:?} samples: {}", kind, e))
            .into_iter()
            .collect();
        numbered.sort();
        numbered
            .into_iter()
            .map(|(_, path)| SampleLoader { path })
            .collect()
    }
}

/// Fluent loader for one sample document
#[derive(Debug, Clone)]
pub struct SampleLoader {
    path: PathBuf,
}

impl SampleLoader {
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn loader(&self) -> QuizLoader {
        QuizLoader::from_path(&self.path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", self.path.display(), e))
    }

    /// Get the raw source string
    pub fn source(&self) -> String {
        self.loader().source().to_string()
    }

    /// Parse, panicking on failure
    pub fn parse(&self) -> Quiz {
        self.loader()
            .parse()
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", self.path.display(), e))
    }

    /// Validate, panicking on failure
    pub fn validate(&self) {
        self.loader()
            .validate()
            .unwrap_or_else(|e| panic!("Failed to validate {}: {}", self.path.display(), e))
    }

    /// Parse, expecting a failure
    pub fn parse_err(&self) -> ParseError {
        match self.loader().parse() {
            Ok(_) => panic!("Expected {} to fail parsing", self.path.display()),
            Err(err) => err,
        }
    }

    /// Validate, expecting a failure
    pub fn validate_err(&self) -> ValidationError {
        match self.loader().validate() {
            Ok(()) => panic!("Expected {} to fail validation", self.path.display()),
            Err(err) => err,
        }
    }
}

fn find_sample(kind: SampleKind, number: usize) -> Result<PathBuf, String> {
    let root = Samples::root(kind);
    list_by_number(&root)?
        .remove(&number)
        .ok_or_else(|| format!("no sample numbered {} in {}", number, root.display()))
}

/// Map the number prefix of every file in `dir` to its path.
fn list_by_number(dir: &Path) -> Result<HashMap<usize, PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("cannot read {}: {}", dir.display(), e))?;
    let mut by_number = HashMap::new();
    for entry in entries {
        let path = entry.map_err(|e| e.to_string())?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(number) = name
            .split_once('-')
            .and_then(|(prefix, _)| prefix.parse::<usize>().ok())
        else {
            continue;
        };
        if let Some(previous) = by_number.insert(number, path.clone()) {
            return Err(format!(
                "duplicate sample number {}: {} and {}",
                number,
                previous.display(),
                path.display()
            ));
        }
    }
    Ok(by_number)
}
