use crate::error::ConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many inputs an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Tests one selectable choice of a question; requires a choice locator.
    Choice,
    /// Compares the subject against a supplied right-hand operand.
    Binary,
    /// Tests a state of the subject on its own.
    Unary,
}

/// The fixed set of comparison operators understood by the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Selected,
    NotSelected,
    Displayed,
    NotDisplayed,
    EqualTo,
    NotEqualTo,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    Contains,
    DoesNotContain,
    MatchesRegex,
    Empty,
    NotEmpty,
}

impl Operator {
    /// The name this operator carries on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Selected => "Selected",
            Operator::NotSelected => "NotSelected",
            Operator::Displayed => "Displayed",
            Operator::NotDisplayed => "NotDisplayed",
            Operator::EqualTo => "EqualTo",
            Operator::NotEqualTo => "NotEqualTo",
            Operator::GreaterThan => "GreaterThan",
            Operator::LessThan => "LessThan",
            Operator::GreaterOrEqual => "GreaterOrEqual",
            Operator::LessOrEqual => "LessOrEqual",
            Operator::Contains => "Contains",
            Operator::DoesNotContain => "DoesNotContain",
            Operator::MatchesRegex => "MatchesRegex",
            Operator::Empty => "Empty",
            Operator::NotEmpty => "NotEmpty",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operator::Selected | Operator::NotSelected => Arity::Choice,
            Operator::Displayed
            | Operator::NotDisplayed
            | Operator::Empty
            | Operator::NotEmpty => Arity::Unary,
            Operator::EqualTo
            | Operator::NotEqualTo
            | Operator::GreaterThan
            | Operator::LessThan
            | Operator::GreaterOrEqual
            | Operator::LessOrEqual
            | Operator::Contains
            | Operator::DoesNotContain
            | Operator::MatchesRegex => Arity::Binary,
        }
    }

    /// True when the operator compares against a right-hand operand.
    pub fn requires_operand(self) -> bool {
        self.arity() == Arity::Binary
    }

    /// True when the operator addresses one selectable choice.
    pub fn requires_choice_locator(self) -> bool {
        self.arity() == Arity::Choice
    }

    /// The operator testing the opposite outcome, used to turn "show when"
    /// logic into "skip when" logic. `MatchesRegex` inverts to itself.
    pub fn inverse(self) -> Operator {
        match self {
            Operator::Selected => Operator::NotSelected,
            Operator::NotSelected => Operator::Selected,
            Operator::Displayed => Operator::NotDisplayed,
            Operator::NotDisplayed => Operator::Displayed,
            Operator::EqualTo => Operator::NotEqualTo,
            Operator::NotEqualTo => Operator::EqualTo,
            Operator::GreaterThan => Operator::LessOrEqual,
            Operator::LessThan => Operator::GreaterOrEqual,
            Operator::GreaterOrEqual => Operator::LessThan,
            Operator::LessOrEqual => Operator::GreaterThan,
            Operator::Contains => Operator::DoesNotContain,
            Operator::DoesNotContain => Operator::Contains,
            Operator::MatchesRegex => Operator::MatchesRegex,
            Operator::Empty => Operator::NotEmpty,
            Operator::NotEmpty => Operator::Empty,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Selected" => Ok(Operator::Selected),
            "NotSelected" => Ok(Operator::NotSelected),
            "Displayed" => Ok(Operator::Displayed),
            "NotDisplayed" => Ok(Operator::NotDisplayed),
            "EqualTo" => Ok(Operator::EqualTo),
            "NotEqualTo" => Ok(Operator::NotEqualTo),
            "GreaterThan" => Ok(Operator::GreaterThan),
            "LessThan" => Ok(Operator::LessThan),
            "GreaterOrEqual" => Ok(Operator::GreaterOrEqual),
            "LessOrEqual" => Ok(Operator::LessOrEqual),
            "Contains" => Ok(Operator::Contains),
            "DoesNotContain" => Ok(Operator::DoesNotContain),
            "MatchesRegex" => Ok(Operator::MatchesRegex),
            "Empty" => Ok(Operator::Empty),
            "NotEmpty" => Ok(Operator::NotEmpty),
            other => Err(ConditionError::InvalidOperator(other.to_string())),
        }
    }
}
