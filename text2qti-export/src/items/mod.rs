//! Item renderers
//!
//!     Each question type has one renderer producing its `<item>` element. The set is closed:
//!     [`renderer_for`] matches exhaustively on [`QuestionType`], so adding a question type
//!     fails to compile until it has a renderer.
//!
//!     Both supported types are single-answer items and share [`write_item`]; they differ in the
//!     Canvas `question_type` entry.

mod multiple_choice;
mod true_false;

pub use multiple_choice::MultipleChoiceRenderer;
pub use true_false::TrueFalseRenderer;

use crate::error::ExportError;
use crate::settings::ExportSettings;
use crate::xml::XmlWriter;
use text2qti_parser::{AnswerChoice, Question, QuestionType};

const RESPONSE_IDENT: &str = "response1";
const CORRECT_FEEDBACK_IDENT: &str = "correct_fb";
const GENERAL_FEEDBACK_IDENT: &str = "general_fb";

/// Renders one question variant as a QTI 1.2 `<item>`.
pub trait ItemRenderer: Send + Sync {
    /// The question type this renderer accepts
    fn question_type(&self) -> QuestionType;

    /// The Canvas `question_type` metadata entry
    fn canvas_type(&self) -> &'static str;

    /// Write the `<item>` element for `question`.
    fn render(
        &self,
        question: &Question,
        settings: &ExportSettings,
        xml: &mut XmlWriter,
    ) -> Result<(), ExportError>;
}

/// The renderer for a question type.
pub fn renderer_for(question_type: QuestionType) -> &'static dyn ItemRenderer {
    match question_type {
        QuestionType::MultipleChoice => &MultipleChoiceRenderer,
        QuestionType::TrueFalse => &TrueFalseRenderer,
    }
}

/// Reject a question of the wrong type for `renderer`.
pub(crate) fn check_type(
    renderer: &dyn ItemRenderer,
    question: &Question,
) -> Result<(), ExportError> {
    if question.question_type() == renderer.question_type() {
        Ok(())
    } else {
        Err(ExportError::WrongRenderer {
            id: question.id().to_string(),
            expected: renderer.question_type(),
            found: question.question_type(),
        })
    }
}

/// Response label identifier of a choice: `CHOICE_A`, `CHOICE_B`, ...
pub fn choice_ident(choice: &AnswerChoice) -> String {
    format!("CHOICE_{}", choice.letter().to_ascii_uppercase())
}

/// Points in the float notation Canvas expects (`2.0`).
pub fn format_points(points: u64) -> String {
    format!("{:.1}", points as f64)
}

/// Write a single-answer item. The first correct choice is the scored one.
pub(crate) fn write_item(
    question: &Question,
    canvas_type: &str,
    settings: &ExportSettings,
    xml: &mut XmlWriter,
) -> Result<(), ExportError> {
    let correct = question
        .correct_choices()
        .next()
        .ok_or_else(|| ExportError::MissingCorrectAnswer {
            id: question.id().to_string(),
        })?;

    xml.open("item", &[("ident", question.id()), ("title", "Question")]);
    write_item_metadata(question, canvas_type, xml);
    write_presentation(question, xml);
    write_response_processing(&choice_ident(correct), xml);
    write_feedback(question, settings, xml);
    xml.close();
    Ok(())
}

/// `<qtimetadatafield>` with its label and entry.
pub(crate) fn write_metadata_field(xml: &mut XmlWriter, label: &str, entry: &str) {
    xml.open("qtimetadatafield", &[])
        .element("fieldlabel", &[], label)
        .element("fieldentry", &[], entry)
        .close();
}

fn write_item_metadata(question: &Question, canvas_type: &str, xml: &mut XmlWriter) {
    xml.open("itemmetadata", &[]).open("qtimetadata", &[]);
    write_metadata_field(xml, "question_type", canvas_type);
    write_metadata_field(xml, "points_possible", &format_points(question.points()));
    write_metadata_field(xml, "original_answer_ids", "");
    write_metadata_field(xml, "assessment_question_identifierref", question.id());
    xml.close().close();
}

fn write_presentation(question: &Question, xml: &mut XmlWriter) {
    xml.open("presentation", &[])
        .open("material", &[])
        .element("mattext", &[("texttype", "text/html")], question.text())
        .close()
        .open(
            "response_lid",
            &[("ident", RESPONSE_IDENT), ("rcardinality", "Single")],
        )
        .open("render_choice", &[]);
    for choice in question.choices() {
        let ident = choice_ident(choice);
        xml.open("response_label", &[("ident", ident.as_str())])
            .open("material", &[])
            .element("mattext", &[("texttype", "text/plain")], choice.text())
            .close()
            .close();
    }
    xml.close().close().close();
}

fn write_response_processing(correct_ident: &str, xml: &mut XmlWriter) {
    xml.open("resprocessing", &[])
        .open("outcomes", &[])
        .empty(
            "decvar",
            &[
                ("maxvalue", "100"),
                ("minvalue", "0"),
                ("varname", "SCORE"),
                ("vartype", "Decimal"),
            ],
        )
        .close();

    xml.open("respcondition", &[("continue", "No")])
        .open("conditionvar", &[])
        .element("varequal", &[("respident", RESPONSE_IDENT)], correct_ident)
        .close()
        .element("setvar", &[("action", "Set"), ("varname", "SCORE")], "100")
        .empty(
            "displayfeedback",
            &[
                ("feedbacktype", "Response"),
                ("linkrefid", CORRECT_FEEDBACK_IDENT),
            ],
        )
        .close();

    xml.open("respcondition", &[("continue", "Yes")])
        .open("conditionvar", &[])
        .empty("other", &[])
        .close()
        .empty(
            "displayfeedback",
            &[
                ("feedbacktype", "Response"),
                ("linkrefid", GENERAL_FEEDBACK_IDENT),
            ],
        )
        .close();

    xml.close();
}

fn write_feedback(question: &Question, settings: &ExportSettings, xml: &mut XmlWriter) {
    let correct = question.feedback().unwrap_or(&settings.correct_feedback);
    let general = question.feedback().unwrap_or(&settings.incorrect_feedback);
    for (ident, text) in [
        (CORRECT_FEEDBACK_IDENT, correct),
        (GENERAL_FEEDBACK_IDENT, general),
    ] {
        xml.open("itemfeedback", &[("ident", ident)])
            .open("flow_mat", &[])
            .open("material", &[])
            .element("mattext", &[("texttype", "text/html")], text)
            .close()
            .close()
            .close();
    }
}
