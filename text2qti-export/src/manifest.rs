//! `imsmanifest.xml`: the IMS content package manifest.
//!
//! Declares two resources: the QTI assessment document, and the Canvas metadata document it
//! depends on.

use crate::assessment::XSI_NAMESPACE;
use crate::error::ExportError;
use crate::settings::ExportSettings;
use crate::xml::XmlWriter;
use text2qti_parser::Quiz;

const CP_NAMESPACE: &str = "http://www.imsglobal.org/xsd/imsccv1p1/imscp_v1p1";
const LOM_NAMESPACE: &str = "http://ltsc.ieee.org/xsd/imsccv1p1/LOM/resource";
const IMSMD_NAMESPACE: &str = "http://www.imsglobal.org/xsd/imsmd_v1p2";
const SCHEMA_LOCATION: &str = concat!(
    "http://www.imsglobal.org/xsd/imsccv1p1/imscp_v1p1 http://www.imsglobal.org/xsd/imscp_v1p1.xsd ",
    "http://ltsc.ieee.org/xsd/imsccv1p1/LOM/resource http://www.imsglobal.org/profile/cc/ccv1p1/LOM/ccv1p1_lomresource_v1p0.xsd ",
    "http://www.imsglobal.org/xsd/imsmd_v1p2 http://www.imsglobal.org/xsd/imsmd_v1p2p2.xsd",
);

pub const MANIFEST_FILE: &str = "imsmanifest.xml";
const MANIFEST_ID: &str = "MANIFEST_001";
const META_RESOURCE_ID: &str = "ASSESSMENT_META_001";
const QTI_RESOURCE_TYPE: &str = "imsqti_xmlv1p2";
const META_RESOURCE_TYPE: &str = "associatedcontent/imscc_xmlv1p1/learning-application-resource";

pub fn render_manifest(quiz: &Quiz, settings: &ExportSettings) -> Result<String, ExportError> {
    let assessment_path = settings.assessment_path();
    let meta_path = settings.meta_path();

    let mut xml = XmlWriter::with_declaration();
    xml.open(
        "manifest",
        &[
            ("xmlns", CP_NAMESPACE),
            ("xmlns:lom", LOM_NAMESPACE),
            ("xmlns:imsmd", IMSMD_NAMESPACE),
            ("xmlns:xsi", XSI_NAMESPACE),
            ("identifier", MANIFEST_ID),
            ("xsi:schemaLocation", SCHEMA_LOCATION),
        ],
    );

    xml.open("metadata", &[])
        .element("schema", &[], "IMS Content")
        .element("schemaversion", &[], "1.1.3")
        .open("imsmd:lom", &[])
        .open("imsmd:general", &[])
        .open("imsmd:title", &[])
        .element(
            "imsmd:langstring",
            &[("xml:lang", "en")],
            quiz.metadata().title(),
        )
        .close()
        .close()
        .close()
        .close();

    xml.empty("organizations", &[]);

    xml.open("resources", &[])
        .open(
            "resource",
            &[
                ("identifier", settings.assessment_id.as_str()),
                ("type", QTI_RESOURCE_TYPE),
                ("href", assessment_path.as_str()),
            ],
        )
        .empty("file", &[("href", assessment_path.as_str())])
        .empty("dependency", &[("identifierref", META_RESOURCE_ID)])
        .close()
        .open(
            "resource",
            &[
                ("identifier", META_RESOURCE_ID),
                ("type", META_RESOURCE_TYPE),
                ("href", meta_path.as_str()),
            ],
        )
        .empty("file", &[("href", meta_path.as_str())])
        .close()
        .close();

    xml.close();
    xml.finish()
}
