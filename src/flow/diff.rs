use super::document::{DISPLAY_LOGIC, FlowDocument};
use ahash::AHashSet;
use itertools::Itertools;
use serde_json::Value;

/// How one element's display logic differs between two documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicChange {
    /// The element carries logic in `after` but not in `before`.
    Added { element_id: String },
    /// The element carried logic in `before` but not in `after`.
    Removed { element_id: String },
    /// The element carries logic on both sides, but the fragments differ.
    Altered { element_id: String },
}

impl LogicChange {
    pub fn element_id(&self) -> &str {
        match self {
            LogicChange::Added { element_id }
            | LogicChange::Removed { element_id }
            | LogicChange::Altered { element_id } => element_id,
        }
    }
}

/// Reports, per element, how display logic changed between two documents.
///
/// Elements with no logic on either side and elements whose fragments are
/// identical are omitted. The report is ordered by element id, so comparing
/// the same pair of documents twice yields the same report.
pub fn compare_logic(before: &FlowDocument, after: &FlowDocument) -> Vec<LogicChange> {
    let ids: AHashSet<&str> = before.element_ids().chain(after.element_ids()).collect();
    ids.into_iter()
        .sorted_unstable()
        .filter_map(|id| {
            let old = condition_fragment(before, id);
            let new = condition_fragment(after, id);
            let element_id = id.to_string();
            match (old, new) {
                (None, Some(_)) => Some(LogicChange::Added { element_id }),
                (Some(_), None) => Some(LogicChange::Removed { element_id }),
                (Some(a), Some(b)) if a != b => Some(LogicChange::Altered { element_id }),
                _ => None,
            }
        })
        .collect()
}

fn condition_fragment<'a>(document: &'a FlowDocument, element_id: &str) -> Option<&'a Value> {
    document
        .element(element_id)
        .and_then(Value::as_object)
        .and_then(|element| element.get(DISPLAY_LOGIC))
        .filter(|fragment| !fragment.is_null())
}
