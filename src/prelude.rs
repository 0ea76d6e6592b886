//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the bunki crate so that
//! callers can bring the whole working set into scope with one `use`.
//!
//! # Example
//!
//! ```rust
//! use bunki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let locator = ChoiceLocator::new("QID1", 1)?;
//! let condition = Condition::new(Subject::question_choice(locator), Operator::Selected, None)?;
//! let node = ExpressionNode::leaf(condition);
//! let fragment = encode(&node);
//! assert_eq!(fragment["Operator"], "Selected");
//! # Ok(())
//! # }
//! ```

// Condition model and expression trees
pub use crate::ast::{
    Arity, ChoiceLocator, Condition, Conjunction, DisplayTree, ExpressionNode, Operand, Operator,
    Subject,
};

// Flow documents and their tooling
pub use crate::flow::{
    ElementKind, FlowDocument, LogicChange, LogicEntry, LogicSnapshot, compare_logic,
};

// Wire codec
pub use crate::wire::{decode, encode};

// Error types
pub use crate::error::{BuildError, ConditionError, DecodeError, PatchError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
