//! The host-document fragment codec.
//!
//! `encode` translates an expression tree into the nested mapping shape the
//! flow document stores under an element's display-condition key; `decode`
//! reconstructs a tree from such a fragment. Encoding is deterministic:
//! equal trees produce identical values, so fragments can be compared and
//! diffed byte for byte.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

// Field names and tags of the fragment shape.
pub(crate) const TYPE: &str = "Type";
pub(crate) const BOOLEAN_EXPRESSION: &str = "BooleanExpression";
pub(crate) const EXPRESSION: &str = "Expression";
pub(crate) const CONJUNCTION: &str = "Conjunction";
pub(crate) const LOGIC_TYPE: &str = "LogicType";
pub(crate) const LOGIC_TYPE_QUESTION: &str = "Question";
pub(crate) const LOGIC_TYPE_EMBEDDED: &str = "EmbeddedField";
pub(crate) const QUESTION_ID: &str = "QuestionID";
pub(crate) const QUESTION_IN_LOOP: &str = "QuestionIsInLoop";
pub(crate) const QUESTION_IN_LOOP_NO: &str = "no";
pub(crate) const CHOICE_LOCATOR: &str = "ChoiceLocator";
pub(crate) const QUESTION_ID_FROM_LOCATOR: &str = "QuestionIDFromLocator";
pub(crate) const LEFT_OPERAND: &str = "LeftOperand";
pub(crate) const RIGHT_OPERAND: &str = "RightOperand";
pub(crate) const OPERATOR: &str = "Operator";
