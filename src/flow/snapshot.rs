use super::document::{ElementKind, FlowDocument};
use crate::ast::ExpressionNode;
use crate::error::{PatchError, SnapshotError};
use crate::wire;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};

/// One captured condition: where it was attached and the tree itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LogicEntry {
    pub element_id: String,
    pub kind: ElementKind,
    pub node: ExpressionNode,
}

/// Every attached display condition of a document, in a form that can be
/// persisted and replayed onto another document.
///
/// Useful for carrying logic across otherwise-equivalent documents, and for
/// recording the logic state between mutation steps when debugging.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LogicSnapshot {
    pub entries: Vec<LogicEntry>,
}

impl LogicSnapshot {
    /// Collects the condition of every element whose `"Type"` is a known
    /// [`ElementKind`]. Elements of other kinds are skipped; a condition
    /// that does not decode is an error.
    pub fn capture(document: &FlowDocument) -> Result<Self, PatchError> {
        let mut entries = Vec::new();
        for element_id in document.element_ids().sorted_unstable() {
            let Some(kind) = document
                .element(element_id)
                .and_then(Value::as_object)
                .and_then(|element| element.get(wire::TYPE))
                .and_then(Value::as_str)
                .and_then(ElementKind::from_wire)
            else {
                continue;
            };
            if let Some(node) = document.read(element_id)? {
                entries.push(LogicEntry {
                    element_id: element_id.to_string(),
                    kind,
                    node,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Re-attaches every captured condition to the given document.
    pub fn apply(&self, document: &FlowDocument) -> Result<FlowDocument, PatchError> {
        let mut patched = document.clone();
        for entry in &self.entries {
            patched = patched.attach(&entry.element_id, entry.kind, &entry.node)?;
        }
        Ok(patched)
    }

    /// The captured condition for an element, if any.
    pub fn entry(&self, element_id: &str) -> Option<&LogicEntry> {
        self.entries
            .iter()
            .find(|entry| entry.element_id == element_id)
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            source: e,
        })?;
        file.write_all(&bytes).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            source: e,
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let mut file = fs::File::open(path).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            source: e,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            source: e,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Serializes the snapshot to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard()).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // decode returns the value plus the bytes read
            .map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}
