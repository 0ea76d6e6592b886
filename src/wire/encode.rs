use super::*;
use crate::ast::{Condition, ExpressionNode, Subject};
use serde_json::{Map, Value};

/// Translates an expression tree into the host-document fragment shape.
///
/// Groups become `BooleanExpression` mappings holding their children under
/// positional keys (`"0"`, `"1"`, ...) in input order plus the conjunction
/// tag; leaves become `Expression` mappings carrying the subject's resolved
/// addressing strings and the operator name.
pub fn encode(node: &ExpressionNode) -> Value {
    match node {
        ExpressionNode::Leaf(condition) => encode_condition(condition),
        ExpressionNode::Group {
            conjunction,
            children,
        } => {
            let mut map = Map::new();
            insert_str(&mut map, TYPE, BOOLEAN_EXPRESSION);
            insert_str(&mut map, CONJUNCTION, conjunction.wire_tag());
            for (index, child) in children.iter().enumerate() {
                map.insert(index.to_string(), encode(child));
            }
            Value::Object(map)
        }
    }
}

fn encode_condition(condition: &Condition) -> Value {
    let mut map = Map::new();
    insert_str(&mut map, TYPE, EXPRESSION);
    match condition.subject() {
        Subject::QuestionAnswer {
            question_id,
            choice_locator,
        } => {
            insert_str(&mut map, LOGIC_TYPE, LOGIC_TYPE_QUESTION);
            insert_str(&mut map, QUESTION_ID, question_id.as_str());
            insert_str(&mut map, QUESTION_IN_LOOP, QUESTION_IN_LOOP_NO);
            if let Some(locator) = choice_locator {
                insert_str(&mut map, CHOICE_LOCATOR, locator.to_string());
                insert_str(&mut map, QUESTION_ID_FROM_LOCATOR, locator.question_id());
            }
        }
        Subject::EmbeddedDataField { .. } => {
            insert_str(&mut map, LOGIC_TYPE, LOGIC_TYPE_EMBEDDED);
        }
    }
    insert_str(&mut map, LEFT_OPERAND, condition.subject().left_operand());
    insert_str(&mut map, OPERATOR, condition.operator().name());
    if let Some(operand) = condition.operand() {
        insert_str(&mut map, RIGHT_OPERAND, operand.to_string());
    }
    Value::Object(map)
}

fn insert_str(map: &mut Map<String, Value>, key: &str, value: impl Into<String>) {
    map.insert(key.to_string(), Value::String(value.into()));
}
