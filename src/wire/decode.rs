use super::*;
use crate::ast::{ChoiceLocator, Condition, Conjunction, ExpressionNode, Operand, Operator, Subject};
use crate::error::DecodeError;
use serde_json::{Map, Value};

/// Reconstructs an expression tree from a host-document fragment.
///
/// Accepts everything `encode` emits; decoded trees re-encode to identical
/// fragments. A `RightOperand` that parses as a number comes back as
/// `Operand::Number`, since the wire stores all operands as strings and
/// does not distinguish the two.
pub fn decode(fragment: &Value) -> Result<ExpressionNode, DecodeError> {
    let map = fragment.as_object().ok_or(DecodeError::NotAnObject)?;
    match field_str(map, TYPE)? {
        BOOLEAN_EXPRESSION => decode_group(map),
        EXPRESSION => decode_condition(map).map(ExpressionNode::Leaf),
        other => Err(DecodeError::UnknownNodeType(other.to_string())),
    }
}

fn decode_group(map: &Map<String, Value>) -> Result<ExpressionNode, DecodeError> {
    let conjunction: Conjunction = field_str(map, CONJUNCTION)?.parse()?;

    // Children live under positional keys; walk them in index order until
    // the first gap.
    let mut children = Vec::new();
    for index in 0usize.. {
        match map.get(&index.to_string()) {
            Some(child) => children.push(decode(child)?),
            None => break,
        }
    }
    if children.is_empty() {
        return Err(DecodeError::EmptyGroup);
    }
    Ok(ExpressionNode::Group {
        conjunction,
        children,
    })
}

fn decode_condition(map: &Map<String, Value>) -> Result<Condition, DecodeError> {
    let operator: Operator = field_str(map, OPERATOR)?.parse()?;

    let subject = match field_str(map, LOGIC_TYPE)? {
        LOGIC_TYPE_QUESTION => match map.get(CHOICE_LOCATOR).and_then(Value::as_str) {
            Some(raw) => Subject::question_choice(raw.parse::<ChoiceLocator>()?),
            None => Subject::question(field_str(map, QUESTION_ID)?),
        },
        LOGIC_TYPE_EMBEDDED => {
            let left = field_str(map, LEFT_OPERAND)?;
            let field_name = left
                .strip_prefix(crate::ast::locator::EMBEDDED_SCHEME)
                .ok_or_else(|| DecodeError::InvalidFieldReference(left.to_string()))?;
            Subject::embedded_field(field_name)
        }
        other => return Err(DecodeError::UnknownLogicType(other.to_string())),
    };

    let operand = map
        .get(RIGHT_OPERAND)
        .and_then(Value::as_str)
        .map(|raw| match raw.parse::<f64>() {
            Ok(n) => Operand::Number(n),
            Err(_) => Operand::Text(raw.to_string()),
        });

    Condition::new(subject, operator, operand).map_err(DecodeError::from)
}

fn field_str<'a>(map: &'a Map<String, Value>, key: &'static str) -> Result<&'a str, DecodeError> {
    map.get(key)
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingField(key))
}
