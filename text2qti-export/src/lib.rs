//! QTI packaging for text2qti quizzes
//!
//!     This crate turns a validated [`Quiz`](text2qti_parser::Quiz) into a QTI 1.2 content
//!     package in the flavour Canvas imports: one assessment document with every item embedded,
//!     a Canvas `assessment_meta.xml` and an IMS `imsmanifest.xml`, zipped together.
//!
//!     This is a pure lib: it never prints, reads the environment or assumes a shell. The CLI
//!     decides where settings come from and where packages go.
//!
//!     The file structure:
//!     .
//!     ├── error.rs          # ExportError
//!     ├── version.rs        # QtiVersion
//!     ├── settings.rs       # ExportSettings (identifiers, attempts, default feedback)
//!     ├── xml.rs            # Indenting XML writer with escaping
//!     ├── items             # One ItemRenderer per question type
//!     │   ├── multiple_choice.rs
//!     │   ├── true_false.rs
//!     │   └── mod.rs        # ItemRenderer trait, renderer_for, shared item layout
//!     ├── assessment.rs     # <questestinterop> assessment document
//!     ├── manifest.rs       # imsmanifest.xml
//!     ├── canvas_meta.rs    # assessment_meta.xml
//!     ├── generator.rs      # QtiGenerator: documents and zip package
//!     └── lib.rs
//!
//! Package layout
//!
//!     imsmanifest.xml
//!     <ASSESSMENT_ID>/<ASSESSMENT_ID>.xml
//!     <ASSESSMENT_ID>/assessment_meta.xml

pub mod assessment;
pub mod canvas_meta;
pub mod error;
pub mod generator;
pub mod items;
pub mod manifest;
pub mod settings;
pub mod version;
pub mod xml;

pub use error::{ExportError, UnknownQtiVersion};
pub use generator::{QtiDocuments, QtiGenerator};
pub use items::{renderer_for, ItemRenderer, MultipleChoiceRenderer, TrueFalseRenderer};
pub use settings::ExportSettings;
pub use version::QtiVersion;
pub use xml::XmlWriter;
