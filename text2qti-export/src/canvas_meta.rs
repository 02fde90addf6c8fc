//! `assessment_meta.xml`: Canvas quiz settings and the assignment wrapping the quiz.
//!
//! Most settings are fixed; title, description, shuffling, points and attempts come from the
//! quiz and the export settings.

use crate::assessment::XSI_NAMESPACE;
use crate::error::ExportError;
use crate::items::format_points;
use crate::settings::ExportSettings;
use crate::xml::XmlWriter;
use text2qti_parser::Quiz;

const CANVAS_NAMESPACE: &str = "http://canvas.instructure.com/xsd/cccv1p0";
const CANVAS_SCHEMA_LOCATION: &str =
    "http://canvas.instructure.com/xsd/cccv1p0 https://canvas.instructure.com/xsd/cccv1p0.xsd";

const QUIZ_FLAGS: &[(&str, &str)] = &[
    ("require_lockdown_browser", "false"),
    ("require_lockdown_browser_for_results", "false"),
    ("require_lockdown_browser_monitor", "false"),
    ("lockdown_browser_monitor_data", ""),
    ("show_correct_answers", "true"),
    ("anonymous_submissions", "false"),
    ("could_be_locked", "true"),
    ("disable_timer_autosubmission", "false"),
];

const NAVIGATION_FLAGS: &[(&str, &str)] = &[
    ("one_question_at_a_time", "false"),
    ("cant_go_back", "false"),
    ("available", "true"),
    ("one_time_results", "false"),
    ("show_correct_answers_last_attempt", "false"),
    ("only_visible_to_overrides", "false"),
    ("module_locked", "false"),
];

const ASSIGNMENT_DATES: &[(&str, &str)] = &[
    ("due_at", ""),
    ("lock_at", ""),
    ("unlock_at", ""),
    ("module_locked", "false"),
    ("all_day_date", ""),
    ("workflow_state", "published"),
];

const ASSIGNMENT_GRADING: &[(&str, &str)] = &[
    ("grading_type", "points"),
    ("all_day", "true"),
    ("submission_types", "online_quiz"),
    ("position", "1"),
    ("turnitin_enabled", "false"),
    ("vericite_enabled", "false"),
    ("peer_review_count", "0"),
    ("peer_reviews", "false"),
    ("automatic_peer_reviews", "false"),
    ("anonymous_peer_reviews", "false"),
    ("grade_group_students_individually", "false"),
    ("freeze_on_copy", "false"),
    ("omit_from_final_grade", "false"),
    ("hide_in_gradebook", "false"),
    ("intra_group_peer_reviews", "false"),
    ("only_visible_to_overrides", "false"),
    ("post_to_sis", "false"),
    ("moderated_grading", "false"),
    ("grader_count", "0"),
    ("grader_comments_visible_to_graders", "true"),
    ("anonymous_grading", "false"),
    ("graders_anonymous_to_graders", "false"),
    ("grader_names_visible_to_final_grader", "true"),
    ("anonymous_instructor_annotations", "false"),
];

fn write_fields(xml: &mut XmlWriter, fields: &[(&str, &str)]) {
    for (name, value) in fields {
        xml.element(name, &[], value);
    }
}

pub fn render_canvas_meta(quiz: &Quiz, settings: &ExportSettings) -> Result<String, ExportError> {
    let metadata = quiz.metadata();
    let points = format_points(quiz.total_points());
    let attempts = settings.max_attempts.to_string();
    let assignment_id = format!("ASSIGNMENT_{}", settings.assessment_id);

    let mut xml = XmlWriter::with_declaration();
    xml.open(
        "quiz",
        &[
            ("identifier", settings.assessment_id.as_str()),
            ("xmlns", CANVAS_NAMESPACE),
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xsi:schemaLocation", CANVAS_SCHEMA_LOCATION),
        ],
    );

    xml.element("title", &[], metadata.title())
        .element("description", &[], metadata.description().unwrap_or(""))
        .element("due_at", &[], "")
        .element(
            "shuffle_answers",
            &[],
            if metadata.shuffle_answers() { "true" } else { "false" },
        )
        .element("scoring_policy", &[], "keep_highest")
        .element("hide_results", &[], "")
        .element("quiz_type", &[], "graded_survey")
        .element("points_possible", &[], &points);
    write_fields(&mut xml, QUIZ_FLAGS);
    xml.element("allowed_attempts", &[], &attempts);
    write_fields(&mut xml, NAVIGATION_FLAGS);

    xml.open("assignment", &[("identifier", assignment_id.as_str())])
        .element("title", &[], metadata.title());
    write_fields(&mut xml, ASSIGNMENT_DATES);
    xml.empty("assignment_overrides", &[])
        .element("quiz_identifierref", &[], &settings.assessment_id)
        .element("allowed_extensions", &[], "")
        .element("has_group_category", &[], "false")
        .element("points_possible", &[], &points);
    write_fields(&mut xml, ASSIGNMENT_GRADING);
    xml.open("post_policy", &[])
        .element("post_manually", &[], "false")
        .close();
    xml.close();

    xml.element("assignment_group_identifierref", &[], "DEFAULT_GROUP")
        .empty("assignment_overrides", &[]);

    xml.close();
    xml.finish()
}
