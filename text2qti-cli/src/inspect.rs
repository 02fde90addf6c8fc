//! Renderings for `text2qti inspect`.

use std::fmt::Write;
use text2qti_parser::Quiz;

pub fn quiz_to_json(quiz: &Quiz) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(quiz)
}

/// Human-readable overview: quiz settings, then one block per question with the correct
/// choices marked `*`.
pub fn summarize(quiz: &Quiz) -> String {
    let metadata = quiz.metadata();
    let mut out = String::new();

    let _ = writeln!(out, "Title: {}", metadata.title());
    if let Some(description) = metadata.description() {
        let _ = writeln!(out, "Description: {}", description);
    }
    let _ = writeln!(out, "Shuffle answers: {}", metadata.shuffle_answers());
    let _ = writeln!(out, "Total questions: {}", quiz.questions().len());
    let _ = writeln!(out, "Total points: {}", quiz.total_points());

    for (index, question) in quiz.questions().iter().enumerate() {
        let _ = writeln!(
            out,
            "\nQuestion {} [{}, {} pt] {}",
            index + 1,
            question.question_type(),
            question.points(),
            question.id()
        );
        for line in question.text().lines() {
            let _ = writeln!(out, "  {}", line);
        }
        for choice in question.choices() {
            let marker = if choice.is_correct() { '*' } else { ' ' };
            let _ = writeln!(out, "  {}{}) {}", marker, choice.letter(), choice.text());
        }
        if let Some(feedback) = question.feedback() {
            let _ = writeln!(out, "  Feedback: {}", feedback);
        }
    }

    out.trim_end().to_string()
}
