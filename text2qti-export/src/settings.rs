/// Knobs for the generated package that do not come from the quiz itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Identifier of the assessment, also its directory name inside the package
    pub assessment_id: String,
    pub max_attempts: u32,
    /// Shown on a correct answer when the question has no feedback of its own
    pub correct_feedback: String,
    /// Shown otherwise when the question has no feedback of its own
    pub incorrect_feedback: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            assessment_id: "ASSESSMENT_001".to_string(),
            max_attempts: 1,
            correct_feedback: "Correct!".to_string(),
            incorrect_feedback: "Incorrect. Please review the material.".to_string(),
        }
    }
}

impl ExportSettings {
    pub fn assessment_path(&self) -> String {
        format!("{0}/{0}.xml", self.assessment_id)
    }

    pub fn meta_path(&self) -> String {
        format!("{}/assessment_meta.xml", self.assessment_id)
    }
}
