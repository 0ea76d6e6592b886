//! Tests for expression tree composition and the wire codec.
mod common;
use bunki::prelude::*;
use common::*;

#[test]
fn test_leaf_encodes_operator_verbatim() {
    let node = ExpressionNode::leaf(answer_greater_than("QID2", 5.0));
    let fragment = encode(&node);

    assert_eq!(fragment["Type"], "Expression");
    assert_eq!(fragment["Operator"], "GreaterThan");
    assert_eq!(fragment["LeftOperand"], "q://QID2/SelectableChoice");
    assert_eq!(fragment["RightOperand"], "5");
    assert_eq!(fragment["QuestionID"], "QID2");
    assert_eq!(fragment["QuestionIsInLoop"], "no");
}

#[test]
fn test_choice_leaf_carries_locator_fields() {
    let node = ExpressionNode::leaf(selected_choice("QID1", 1));
    let fragment = encode(&node);

    assert_eq!(fragment["LogicType"], "Question");
    assert_eq!(fragment["ChoiceLocator"], "q://QID1/SelectableChoice/1");
    assert_eq!(fragment["QuestionIDFromLocator"], "QID1");
    assert_eq!(fragment["LeftOperand"], "q://QID1/SelectableChoice/1");
    assert_eq!(fragment["Operator"], "Selected");
    // Unary on the wire too: no right operand.
    assert!(fragment.get("RightOperand").is_none());
}

#[test]
fn test_embedded_leaf_uses_ed_scheme() {
    let node = ExpressionNode::leaf(embedded_equals("user_type", "premium"));
    let fragment = encode(&node);

    assert_eq!(fragment["LogicType"], "EmbeddedField");
    assert_eq!(fragment["LeftOperand"], "ed://user_type");
    assert_eq!(fragment["RightOperand"], "premium");
    assert!(fragment.get("QuestionID").is_none());
}

#[test]
fn test_group_preserves_child_order() {
    let node = ExpressionNode::group(
        Conjunction::And,
        vec![
            ExpressionNode::leaf(selected_choice("QID1", 1)),
            ExpressionNode::leaf(answer_greater_than("QID2", 5.0)),
        ],
    )
    .expect("non-empty group");
    let fragment = encode(&node);

    assert_eq!(fragment["Type"], "BooleanExpression");
    assert_eq!(fragment["Conjunction"], "And");
    assert_eq!(fragment["0"]["Operator"], "Selected");
    assert_eq!(fragment["1"]["Operator"], "GreaterThan");
    assert!(fragment.get("2").is_none());
}

#[test]
fn test_empty_group_rejected() {
    assert_eq!(
        ExpressionNode::group(Conjunction::And, vec![]),
        Err(BuildError::EmptyGroup)
    );
    assert_eq!(ExpressionNode::any(vec![]), Err(BuildError::EmptyGroup));
}

#[test]
fn test_nested_group_serializes_positionally() {
    // (QID1 choice 1 selected AND QID2 > 5) OR user_type == "premium"
    let inner = ExpressionNode::all(vec![
        ExpressionNode::leaf(selected_choice("QID1", 1)),
        ExpressionNode::leaf(answer_greater_than("QID2", 5.0)),
    ])
    .expect("inner group");
    let tree = ExpressionNode::any(vec![
        inner,
        ExpressionNode::leaf(embedded_equals("user_type", "premium")),
    ])
    .expect("outer group");

    assert_eq!(tree.depth(), 3);

    let fragment = encode(&tree);
    assert_eq!(fragment["Conjunction"], "Or");
    // The nested group occupies position 0, the trailing leaf position 1.
    assert_eq!(fragment["0"]["Type"], "BooleanExpression");
    assert_eq!(fragment["0"]["Conjunction"], "And");
    assert_eq!(fragment["0"]["0"]["Operator"], "Selected");
    assert_eq!(fragment["0"]["1"]["Operator"], "GreaterThan");
    assert_eq!(fragment["1"]["Type"], "Expression");
    assert_eq!(fragment["1"]["LeftOperand"], "ed://user_type");
}

#[test]
fn test_encode_is_deterministic() {
    let build = || {
        ExpressionNode::all(vec![
            ExpressionNode::leaf(selected_choice("QID1", 2)),
            ExpressionNode::leaf(embedded_equals("cohort", "b")),
        ])
        .expect("group")
    };
    let a = encode(&build());
    let b = encode(&build());
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_decode_inverts_encode() {
    let tree = ExpressionNode::any(vec![
        ExpressionNode::all(vec![
            ExpressionNode::leaf(selected_choice("QID1", 1)),
            ExpressionNode::leaf(answer_greater_than("QID3", 2.5)),
        ])
        .expect("inner"),
        ExpressionNode::leaf(embedded_equals("user_type", "premium")),
    ])
    .expect("outer");

    let fragment = encode(&tree);
    let decoded = decode(&fragment).expect("decodes");
    assert_eq!(encode(&decoded), fragment);
    assert_eq!(decoded, tree);
}

#[test]
fn test_decode_reads_numeric_operand_as_number() {
    let tree = ExpressionNode::leaf(answer_greater_than("QID2", 5.0));
    let decoded = decode(&encode(&tree)).expect("decodes");

    let conditions = decoded.conditions();
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].operand(), Some(&Operand::Number(5.0)));
}

#[test]
fn test_decode_rejects_malformed_fragments() {
    assert!(matches!(
        decode(&serde_json::json!("just a string")),
        Err(DecodeError::NotAnObject)
    ));
    assert!(matches!(
        decode(&serde_json::json!({ "Type": "If" })),
        Err(DecodeError::UnknownNodeType(_))
    ));
    assert!(matches!(
        decode(&serde_json::json!({ "Type": "BooleanExpression", "Conjunction": "And" })),
        Err(DecodeError::EmptyGroup)
    ));
    assert!(matches!(
        decode(&serde_json::json!({
            "Type": "Expression",
            "LogicType": "Question",
            "QuestionID": "QID1",
            "Operator": "SelectedTwice"
        })),
        Err(DecodeError::Condition(ConditionError::InvalidOperator(_)))
    ));
}

#[test]
fn test_display_tree_renders_nesting() {
    let tree = ExpressionNode::all(vec![
        ExpressionNode::leaf(selected_choice("QID1", 1)),
        ExpressionNode::leaf(embedded_equals("user_type", "premium")),
    ])
    .expect("group");

    let rendered = DisplayTree { node: &tree }.to_string();
    assert!(rendered.contains("AND"));
    assert!(rendered.contains("├── q://QID1/SelectableChoice/1 Selected"));
    assert!(rendered.contains("└── ed://user_type EqualTo premium"));
}
