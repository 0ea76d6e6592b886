use crate::ast::Operator;
use thiserror::Error;

/// Errors that can occur while validating a single condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionError {
    #[error("unknown operator '{0}'")]
    InvalidOperator(String),

    #[error("operator '{operator}' compares against a value, but no operand was supplied")]
    MissingOperand { operator: Operator },

    #[error(
        "operator '{operator}' tests a choice of question '{question_id}', but no choice locator was supplied"
    )]
    MissingChoiceLocator {
        operator: Operator,
        question_id: String,
    },

    #[error("invalid choice locator '{locator}': {message}")]
    InvalidChoiceLocator { locator: String, message: String },
}

/// Errors that can occur while composing an expression tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("a condition group must contain at least one node")]
    EmptyGroup,

    #[error("unknown conjunction '{0}', expected 'AND' or 'OR'")]
    InvalidConjunction(String),
}

/// Errors that can occur while reconstructing a tree from a document fragment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("condition fragment is not a JSON object")]
    NotAnObject,

    #[error("fragment node has unknown type '{0}'")]
    UnknownNodeType(String),

    #[error("fragment node is missing the '{0}' field")]
    MissingField(&'static str),

    #[error("fragment group contains no child expressions")]
    EmptyGroup,

    #[error("fragment carries unknown logic type '{0}'")]
    UnknownLogicType(String),

    #[error("fragment embedded-data reference '{0}' does not use the 'ed://' scheme")]
    InvalidFieldReference(String),

    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Errors that can occur while patching or reading a flow document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatchError {
    #[error("the host document is not a JSON object")]
    NotAnObject,

    #[error("element '{element_id}' not found in the flow document")]
    ElementNotFound { element_id: String },

    #[error("element '{element_id}' is not a JSON object")]
    MalformedElement { element_id: String },

    #[error("element '{element_id}' carries a display condition that does not decode")]
    MalformedCondition {
        element_id: String,
        #[source]
        source: DecodeError,
    },
}

/// Errors that can occur while saving or loading a logic snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("could not access snapshot file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot encoding failed: {0}")]
    Encode(String),

    #[error("snapshot decoding failed: {0}")]
    Decode(String),

    #[error(transparent)]
    Patch(#[from] PatchError),
}
