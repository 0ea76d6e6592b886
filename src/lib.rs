//! # Bunki - Survey Display-Logic Engine
//!
//! **Bunki** builds conditional display ("display logic") expression trees
//! for survey elements and patches them into survey-flow documents. A
//! condition compares a prior answer or an embedded-data field against a
//! value; conditions compose into AND/OR groups of arbitrary nesting; the
//! resulting tree is merged into the addressed element of a host document
//! as the nested fragment shape the document format expects.
//!
//! The crate is a pure transform. It performs no network calls and owns no
//! storage: documents come in as values, patched documents go out as values,
//! and persisting them is the caller's concern.
//!
//! ## Core Workflow
//!
//! 1.  **Model the comparison**: build a [`Condition`](ast::Condition) from a
//!     [`Subject`](ast::Subject) (a question answer, one of its choices, or
//!     an embedded-data field), an [`Operator`](ast::Operator), and an
//!     operand where the operator needs one. Validation happens here, before
//!     any document is touched.
//! 2.  **Compose the tree**: wrap conditions with
//!     [`ExpressionNode::leaf`](ast::ExpressionNode::leaf) and join them with
//!     [`ExpressionNode::group`](ast::ExpressionNode::group). Groups nest.
//! 3.  **Patch the document**: [`FlowDocument::attach`](flow::FlowDocument::attach)
//!     returns a new document in which the addressed element carries the
//!     encoded tree and every other field survives untouched.
//!     [`read`](flow::FlowDocument::read) and
//!     [`remove`](flow::FlowDocument::remove) round out the lifecycle.
//! 4.  **Hand the document back**: whatever owns the transport submits the
//!     patched document to the host system.
//!
//! ## Quick Start
//!
//! ```rust
//! use bunki::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Show QID2 only when choice 1 of QID1 is selected.
//!     let locator = ChoiceLocator::new("QID1", 1)?;
//!     let condition = Condition::new(
//!         Subject::question_choice(locator),
//!         Operator::Selected,
//!         None,
//!     )?;
//!     let node = ExpressionNode::leaf(condition);
//!
//!     let document: FlowDocument = serde_json::from_str(
//!         r#"{
//!             "QID1": { "Type": "Question", "DataExportTag": "Q1" },
//!             "QID2": { "Type": "Question", "DataExportTag": "Q2" }
//!         }"#,
//!     )?;
//!
//!     let patched = document.attach("QID2", ElementKind::Question, &node)?;
//!     assert!(patched.read("QID2")?.is_some());
//!
//!     // The original document is untouched; patching is a pure transform.
//!     assert!(document.read("QID2")?.is_none());
//!     Ok(())
//! }
//! ```

pub mod ast;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod wire;
