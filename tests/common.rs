//! Common test utilities for building conditions and flow documents.
use bunki::prelude::*;

/// `Selected` on one choice of a question.
#[allow(dead_code)]
pub fn selected_choice(question_id: &str, choice: u32) -> Condition {
    let locator = ChoiceLocator::new(question_id, choice).expect("valid locator");
    Condition::new(Subject::question_choice(locator), Operator::Selected, None)
        .expect("valid condition")
}

/// `GreaterThan` on a question's answer as a whole.
#[allow(dead_code)]
pub fn answer_greater_than(question_id: &str, value: f64) -> Condition {
    Condition::new(
        Subject::question(question_id),
        Operator::GreaterThan,
        Some(Operand::Number(value)),
    )
    .expect("valid condition")
}

/// `EqualTo` on an embedded-data field.
#[allow(dead_code)]
pub fn embedded_equals(field_name: &str, value: &str) -> Condition {
    Condition::new(
        Subject::embedded_field(field_name),
        Operator::EqualTo,
        Some(Operand::from(value)),
    )
    .expect("valid condition")
}

/// A document holding two questions, the first with choices and metadata
/// that patching must not disturb.
#[allow(dead_code)]
pub fn two_question_document() -> FlowDocument {
    serde_json::from_value(serde_json::json!({
        "QID1": {
            "Type": "Question",
            "DataExportTag": "Q1",
            "QuestionText": "Do you like surveys?",
            "Selector": "SAVR",
            "Choices": {
                "1": { "Display": "Yes" },
                "2": { "Display": "No" }
            },
            "ChoiceOrder": ["1", "2"]
        },
        "QID2": {
            "Type": "Question",
            "DataExportTag": "Q2",
            "QuestionText": "Why?"
        }
    }))
    .expect("valid document")
}

/// A document holding a question and a block.
#[allow(dead_code)]
pub fn question_and_block_document() -> FlowDocument {
    serde_json::from_value(serde_json::json!({
        "QID1": { "Type": "Question", "DataExportTag": "Q1" },
        "BL_1": { "Type": "Block", "Description": "Follow-up block" }
    }))
    .expect("valid document")
}
