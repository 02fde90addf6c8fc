//! Package generation
//!
//! [`QtiGenerator`] renders the three package documents and writes them into a deflated zip.
//! Rendering is pure; only [`QtiGenerator::write_package`] touches the filesystem.

use crate::assessment::render_assessment;
use crate::canvas_meta::render_canvas_meta;
use crate::error::ExportError;
use crate::manifest::{render_manifest, MANIFEST_FILE};
use crate::settings::ExportSettings;
use crate::version::QtiVersion;
use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use text2qti_parser::Quiz;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// The rendered package documents, each a complete XML file with declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QtiDocuments {
    pub manifest: String,
    pub assessment: String,
    pub assessment_meta: String,
}

pub struct QtiGenerator<'a> {
    quiz: &'a Quiz,
    version: QtiVersion,
    settings: ExportSettings,
}

impl<'a> QtiGenerator<'a> {
    pub fn new(quiz: &'a Quiz, version: QtiVersion, settings: ExportSettings) -> Self {
        QtiGenerator {
            quiz,
            version,
            settings,
        }
    }

    /// Render the manifest, assessment and Canvas metadata documents.
    pub fn documents(&self) -> Result<QtiDocuments, ExportError> {
        check_identifier(&self.settings.assessment_id)?;
        if self.version != self.version.rendered() {
            tracing::debug!(
                requested = %self.version,
                rendered = %self.version.rendered(),
                "requested QTI version is rendered as QTI 1.2"
            );
        }

        Ok(QtiDocuments {
            assessment: render_assessment(self.quiz, &self.settings)?,
            assessment_meta: render_canvas_meta(self.quiz, &self.settings)?,
            manifest: render_manifest(self.quiz, &self.settings)?,
        })
    }

    /// Package entries in write order: `(path inside the zip, contents)`.
    pub fn entries(&self) -> Result<Vec<(String, String)>, ExportError> {
        let documents = self.documents()?;
        Ok(vec![
            (MANIFEST_FILE.to_string(), documents.manifest),
            (self.settings.assessment_path(), documents.assessment),
            (self.settings.meta_path(), documents.assessment_meta),
        ])
    }

    /// Write the zip package into `writer` and hand it back.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W, ExportError> {
        let entries = self.entries()?;
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut zip = ZipWriter::new(writer);
        for (name, contents) in &entries {
            tracing::debug!(entry = %name, bytes = contents.len(), "writing package entry");
            zip.start_file(name.as_str(), options)?;
            zip.write_all(contents.as_bytes())?;
        }
        Ok(zip.finish()?)
    }

    /// Write the zip package to `path`, creating parent directories as needed.
    pub fn write_package<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, ExportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = BufWriter::new(File::create(path)?);
        let mut file = self.write_to(file)?;
        file.flush()?;
        tracing::debug!(path = %path.display(), "wrote QTI package");
        Ok(path.to_path_buf())
    }
}

/// The assessment identifier names a directory inside the package.
fn check_identifier(id: &str) -> Result<(), ExportError> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ExportError::Package(format!(
            "Invalid assessment identifier '{}': use letters, digits, '_' or '-'",
            id
        )))
    }
}
