use super::Condition;
use crate::error::BuildError;
use itertools::{Itertools, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// AND/OR combinator joining sibling nodes in a group.
///
/// The canonical textual form is `AND`/`OR`, accepted case-insensitively.
/// The wire carries the capitalized tags `And`/`Or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    pub fn name(self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }

    /// The tag the wire format carries.
    pub fn wire_tag(self) -> &'static str {
        match self {
            Conjunction::And => "And",
            Conjunction::Or => "Or",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Conjunction {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(Conjunction::And),
            "OR" => Ok(Conjunction::Or),
            _ => Err(BuildError::InvalidConjunction(s.to_string())),
        }
    }
}

/// A node of a display-logic expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionNode {
    /// A terminal comparison.
    Leaf(Condition),
    /// One or more nodes joined by a conjunction. Child order is significant
    /// and preserved through serialization.
    Group {
        conjunction: Conjunction,
        children: Vec<ExpressionNode>,
    },
}

impl ExpressionNode {
    /// Wraps a single condition as a terminal node.
    pub fn leaf(condition: Condition) -> Self {
        ExpressionNode::Leaf(condition)
    }

    /// Joins one or more nodes under a conjunction.
    ///
    /// An empty node list is a construction error; there is no implicit
    /// "always true" or "always false" group.
    pub fn group(
        conjunction: Conjunction,
        children: Vec<ExpressionNode>,
    ) -> Result<Self, BuildError> {
        if children.is_empty() {
            return Err(BuildError::EmptyGroup);
        }
        Ok(ExpressionNode::Group {
            conjunction,
            children,
        })
    }

    /// All of the given nodes must hold.
    pub fn all(children: Vec<ExpressionNode>) -> Result<Self, BuildError> {
        Self::group(Conjunction::And, children)
    }

    /// Any one of the given nodes suffices.
    pub fn any(children: Vec<ExpressionNode>) -> Result<Self, BuildError> {
        Self::group(Conjunction::Or, children)
    }

    /// Nesting depth; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ExpressionNode::Leaf(_) => 1,
            ExpressionNode::Group { children, .. } => {
                1 + children
                    .iter()
                    .map(ExpressionNode::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Every condition in the tree, left to right.
    pub fn conditions(&self) -> Vec<&Condition> {
        match self {
            ExpressionNode::Leaf(condition) => vec![condition],
            ExpressionNode::Group { children, .. } => {
                children.iter().flat_map(|child| child.conditions()).collect()
            }
        }
    }
}

/// A wrapper to render an expression tree with box-drawing characters,
/// one condition per line.
pub struct DisplayTree<'a> {
    pub node: &'a ExpressionNode,
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_as_tree(self.node, f, "", true)
    }
}

impl DisplayTree<'_> {
    fn fmt_as_tree(
        &self,
        node: &ExpressionNode,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let node_marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}", prefix, node_marker)?;

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });

        match node {
            ExpressionNode::Leaf(condition) => writeln!(f, "{}", condition)?,
            ExpressionNode::Group {
                conjunction,
                children,
            } => {
                writeln!(f, "{}", conjunction)?;
                for (position, child) in children.iter().with_position() {
                    let last = matches!(position, Position::Last | Position::Only);
                    self.fmt_as_tree(child, f, &child_prefix, last)?;
                }
            }
        }
        Ok(())
    }
}
