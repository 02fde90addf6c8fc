use super::{check_type, write_item, ItemRenderer};
use crate::error::ExportError;
use crate::settings::ExportSettings;
use crate::xml::XmlWriter;
use text2qti_parser::{Question, QuestionType};

/// Single-answer multiple choice items.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleChoiceRenderer;

impl ItemRenderer for MultipleChoiceRenderer {
    fn question_type(&self) -> QuestionType {
        QuestionType::MultipleChoice
    }

    fn canvas_type(&self) -> &'static str {
        "multiple_choice_question"
    }

    fn render(
        &self,
        question: &Question,
        settings: &ExportSettings,
        xml: &mut XmlWriter,
    ) -> Result<(), ExportError> {
        check_type(self, question)?;
        tracing::debug!(id = question.id(), "rendering multiple choice item");
        write_item(question, self.canvas_type(), settings, xml)
    }
}
