use super::locator::{EMBEDDED_SCHEME, QUESTION_SCHEME, SELECTABLE_CHOICE};
use super::{Arity, ChoiceLocator, Operand, Operator};
use crate::error::ConditionError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a condition tests: a question's answer or an embedded-data field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    QuestionAnswer {
        question_id: String,
        choice_locator: Option<ChoiceLocator>,
    },
    EmbeddedDataField {
        field_name: String,
    },
}

impl Subject {
    /// A question's answer as a whole.
    pub fn question(question_id: impl Into<String>) -> Self {
        Subject::QuestionAnswer {
            question_id: question_id.into(),
            choice_locator: None,
        }
    }

    /// One selectable choice of a question. The question id is taken from the
    /// locator, so the two can never disagree.
    pub fn question_choice(locator: ChoiceLocator) -> Self {
        Subject::QuestionAnswer {
            question_id: locator.question_id().to_string(),
            choice_locator: Some(locator),
        }
    }

    /// An embedded-data field carried alongside the survey session. The field
    /// is not checked for existence here; the host validates at submission.
    pub fn embedded_field(field_name: impl Into<String>) -> Self {
        Subject::EmbeddedDataField {
            field_name: field_name.into(),
        }
    }

    /// The resolved left-operand address this subject occupies on the wire.
    pub fn left_operand(&self) -> String {
        match self {
            Subject::QuestionAnswer {
                choice_locator: Some(locator),
                ..
            } => locator.to_string(),
            Subject::QuestionAnswer {
                question_id,
                choice_locator: None,
            } => format!("{}{}/{}", QUESTION_SCHEME, question_id, SELECTABLE_CHOICE),
            Subject::EmbeddedDataField { field_name } => {
                format!("{}{}", EMBEDDED_SCHEME, field_name)
            }
        }
    }
}

/// A single validated comparison: subject, operator, optional operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    subject: Subject,
    operator: Operator,
    operand: Option<Operand>,
}

impl Condition {
    /// Validates and normalizes one comparison.
    ///
    /// Binary operators require an operand. `Selected`/`NotSelected` on a
    /// question subject require a choice locator. An operand handed to a
    /// unary operator is dropped with a warning.
    pub fn new(
        subject: Subject,
        operator: Operator,
        operand: Option<Operand>,
    ) -> Result<Self, ConditionError> {
        if operator.requires_operand() && operand.is_none() {
            return Err(ConditionError::MissingOperand { operator });
        }
        if operator.requires_choice_locator() {
            if let Subject::QuestionAnswer {
                question_id,
                choice_locator: None,
            } = &subject
            {
                return Err(ConditionError::MissingChoiceLocator {
                    operator,
                    question_id: question_id.clone(),
                });
            }
        }
        let operand = match operator.arity() {
            Arity::Binary => operand,
            _ => {
                if operand.is_some() {
                    warn!(
                        "operator '{}' takes no operand; the supplied value is ignored",
                        operator
                    );
                }
                None
            }
        };
        Ok(Self {
            subject,
            operator,
            operand,
        })
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> Option<&Operand> {
        self.operand.as_ref()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subject.left_operand(), self.operator)?;
        if let Some(operand) = &self.operand {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}
