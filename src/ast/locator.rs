use crate::error::ConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheme prefix addressing a question's answer.
pub(crate) const QUESTION_SCHEME: &str = "q://";
/// Scheme prefix addressing an embedded-data field.
pub(crate) const EMBEDDED_SCHEME: &str = "ed://";
/// Path segment selecting the choice namespace of a question.
pub(crate) const SELECTABLE_CHOICE: &str = "SelectableChoice";

/// The address of one selectable choice of a question, 1-indexed.
///
/// Renders as `q://<question-id>/SelectableChoice/<n>`, the form the host
/// document expects in condition fragments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceLocator {
    question_id: String,
    choice: u32,
}

impl ChoiceLocator {
    pub fn new(question_id: impl Into<String>, choice: u32) -> Result<Self, ConditionError> {
        let question_id = question_id.into();
        if question_id.is_empty() {
            return Err(ConditionError::InvalidChoiceLocator {
                locator: format!("{}/{}/{}", QUESTION_SCHEME, SELECTABLE_CHOICE, choice),
                message: "question id must not be empty".to_string(),
            });
        }
        if choice == 0 {
            return Err(ConditionError::InvalidChoiceLocator {
                locator: format!(
                    "{}{}/{}/0",
                    QUESTION_SCHEME, question_id, SELECTABLE_CHOICE
                ),
                message: "choice numbers are 1-indexed".to_string(),
            });
        }
        Ok(Self {
            question_id,
            choice,
        })
    }

    pub fn question_id(&self) -> &str {
        &self.question_id
    }

    pub fn choice(&self) -> u32 {
        self.choice
    }
}

impl fmt::Display for ChoiceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}/{}/{}",
            QUESTION_SCHEME, self.question_id, SELECTABLE_CHOICE, self.choice
        )
    }
}

impl FromStr for ChoiceLocator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |message: &str| ConditionError::InvalidChoiceLocator {
            locator: s.to_string(),
            message: message.to_string(),
        };

        let rest = s
            .strip_prefix(QUESTION_SCHEME)
            .ok_or_else(|| fail("expected the 'q://' scheme"))?;
        let mut parts = rest.split('/');
        let question_id = parts
            .next()
            .filter(|part| !part.is_empty())
            .ok_or_else(|| fail("missing question id"))?;
        if parts.next() != Some(SELECTABLE_CHOICE) {
            return Err(fail("expected a 'SelectableChoice' segment"));
        }
        let choice = parts
            .next()
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or_else(|| fail("missing or non-numeric choice number"))?;
        if parts.next().is_some() {
            return Err(fail("trailing segments after the choice number"));
        }

        ChoiceLocator::new(question_id, choice)
    }
}
