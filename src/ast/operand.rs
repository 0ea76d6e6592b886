use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A right-hand comparison value.
///
/// The wire format carries operands as strings; `Display` produces that
/// string form, rendering integral numbers without a fractional part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Number(f64),
    Text(String),
}

// Manual implementation to handle f64
impl Eq for Operand {}

// Manual implementation to handle f64 by hashing its bits
impl Hash for Operand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Operand::Number(n) => n.to_bits().hash(state),
            Operand::Text(t) => t.hash(state),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Operand::Text(t) => write!(f, "{}", t),
        }
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<&str> for Operand {
    fn from(t: &str) -> Self {
        Operand::Text(t.to_string())
    }
}

impl From<String> for Operand {
    fn from(t: String) -> Self {
        Operand::Text(t)
    }
}
