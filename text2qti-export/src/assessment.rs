//! The assessment document: `<questestinterop>` holding one `<assessment>` whose single
//! `root_section` embeds every item in quiz order.

use crate::error::ExportError;
use crate::items::{renderer_for, write_metadata_field};
use crate::settings::ExportSettings;
use crate::xml::XmlWriter;
use text2qti_parser::Quiz;

pub const QTI_NAMESPACE: &str = "http://www.imsglobal.org/xsd/ims_qtiasiv1p2";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const QTI_SCHEMA_LOCATION: &str =
    "http://www.imsglobal.org/xsd/ims_qtiasiv1p2 http://www.imsglobal.org/xsd/ims_qtiasiv1p2p1.xsd";

pub fn render_assessment(quiz: &Quiz, settings: &ExportSettings) -> Result<String, ExportError> {
    let mut xml = XmlWriter::with_declaration();
    xml.open(
        "questestinterop",
        &[
            ("xmlns", QTI_NAMESPACE),
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xsi:schemaLocation", QTI_SCHEMA_LOCATION),
        ],
    )
    .open(
        "assessment",
        &[
            ("ident", settings.assessment_id.as_str()),
            ("title", quiz.metadata().title()),
        ],
    );

    xml.open("qtimetadata", &[]);
    write_metadata_field(&mut xml, "cc_maxattempts", &settings.max_attempts.to_string());
    if quiz.metadata().shuffle_answers() {
        write_metadata_field(&mut xml, "shuffle_answers", "true");
    }
    xml.close();

    xml.open("section", &[("ident", "root_section")]);
    for question in quiz.questions() {
        renderer_for(question.question_type()).render(question, settings, &mut xml)?;
    }
    xml.close();

    xml.close().close();
    xml.finish()
}
