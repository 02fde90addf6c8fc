use super::{check_type, write_item, ItemRenderer};
use crate::error::ExportError;
use crate::settings::ExportSettings;
use crate::xml::XmlWriter;
use text2qti_parser::{Question, QuestionType};

/// True/false items. Canvas renders them like a two-choice multiple choice item, so only the
/// `question_type` entry differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueFalseRenderer;

impl ItemRenderer for TrueFalseRenderer {
    fn question_type(&self) -> QuestionType {
        QuestionType::TrueFalse
    }

    fn canvas_type(&self) -> &'static str {
        "true_false_question"
    }

    fn render(
        &self,
        question: &Question,
        settings: &ExportSettings,
        xml: &mut XmlWriter,
    ) -> Result<(), ExportError> {
        check_type(self, question)?;
        tracing::debug!(id = question.id(), "rendering true/false item");
        write_item(question, self.canvas_type(), settings, xml)
    }
}
