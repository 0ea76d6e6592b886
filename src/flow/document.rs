use crate::ast::ExpressionNode;
use crate::error::PatchError;
use crate::wire;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The element key holding an attached display condition.
pub(crate) const DISPLAY_LOGIC: &str = "DisplayLogic";

/// The kind of flow element a condition can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Question,
    Block,
}

impl ElementKind {
    /// The `"Type"` value carried by elements of this kind.
    pub fn wire_name(self) -> &'static str {
        match self {
            ElementKind::Question => "Question",
            ElementKind::Block => "Block",
        }
    }

    /// Maps a `"Type"` value back to a kind; `None` for anything else.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "Question" => Some(ElementKind::Question),
            "Block" => Some(ElementKind::Block),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// A survey-flow host document: a JSON mapping keyed by element id.
///
/// The document is opaque beyond the addressed element. Patch operations
/// return a new document and never touch the input; they merge rather than
/// replace, so every field that is not the element's display condition
/// passes through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowDocument {
    elements: Map<String, Value>,
}

impl FlowDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-parsed JSON object.
    pub fn from_object(elements: Map<String, Value>) -> Self {
        Self { elements }
    }

    /// Wraps a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, PatchError> {
        match value {
            Value::Object(elements) => Ok(Self { elements }),
            _ => Err(PatchError::NotAnObject),
        }
    }

    pub fn into_object(self) -> Map<String, Value> {
        self.elements
    }

    /// The raw entry for an element, if present.
    pub fn element(&self, element_id: &str) -> Option<&Value> {
        self.elements.get(element_id)
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a new document in which the addressed element carries the
    /// given condition tree. Every other field of the element and the
    /// document is preserved.
    ///
    /// Fails with `ElementNotFound` when no element has the given id with a
    /// matching `"Type"`.
    pub fn attach(
        &self,
        element_id: &str,
        kind: ElementKind,
        node: &ExpressionNode,
    ) -> Result<FlowDocument, PatchError> {
        let element = self.element_object(element_id)?;
        let element_kind = element.get(wire::TYPE).and_then(Value::as_str);
        if element_kind != Some(kind.wire_name()) {
            return Err(PatchError::ElementNotFound {
                element_id: element_id.to_string(),
            });
        }

        let mut patched = element.clone();
        patched.insert(DISPLAY_LOGIC.to_string(), wire::encode(node));
        debug!("attached display logic to element '{}'", element_id);
        Ok(self.with_element(element_id, patched))
    }

    /// The condition currently attached to an element, or `None` if the
    /// element carries none. The element itself must exist.
    pub fn read(&self, element_id: &str) -> Result<Option<ExpressionNode>, PatchError> {
        let element = self.element_object(element_id)?;
        match element.get(DISPLAY_LOGIC) {
            None | Some(Value::Null) => Ok(None),
            Some(fragment) => wire::decode(fragment).map(Some).map_err(|source| {
                PatchError::MalformedCondition {
                    element_id: element_id.to_string(),
                    source,
                }
            }),
        }
    }

    /// Returns a new document with the element's condition cleared.
    /// Clearing an element that has no condition is a no-op, not an error;
    /// the element itself must exist.
    pub fn remove(&self, element_id: &str) -> Result<FlowDocument, PatchError> {
        let element = self.element_object(element_id)?;
        if !element.contains_key(DISPLAY_LOGIC) {
            return Ok(self.clone());
        }

        let mut patched = element.clone();
        patched.remove(DISPLAY_LOGIC);
        debug!("removed display logic from element '{}'", element_id);
        Ok(self.with_element(element_id, patched))
    }

    fn element_object(&self, element_id: &str) -> Result<&Map<String, Value>, PatchError> {
        let value = self
            .elements
            .get(element_id)
            .ok_or_else(|| PatchError::ElementNotFound {
                element_id: element_id.to_string(),
            })?;
        value.as_object().ok_or_else(|| PatchError::MalformedElement {
            element_id: element_id.to_string(),
        })
    }

    fn with_element(&self, element_id: &str, element: Map<String, Value>) -> FlowDocument {
        let mut elements = self.elements.clone();
        elements.insert(element_id.to_string(), Value::Object(element));
        FlowDocument { elements }
    }
}

impl From<Map<String, Value>> for FlowDocument {
    fn from(elements: Map<String, Value>) -> Self {
        Self { elements }
    }
}
