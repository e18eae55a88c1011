//! Action classification and registry.
//!
//! The engine is invoked through exactly four named operations, selected
//! by an `action` string. The string is validated at the boundary and
//! carried as a closed enum from there on, so nothing deeper in the stack
//! dispatches on raw strings.

use crate::domain::error::ApiError;

/// A validated request action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Apply the forward letter mapping
    Encrypt,
    /// Apply the inverse letter mapping, then the forward name pass
    FullDecrypt,
    /// Apply the inverse letter mapping only
    SimpleDecrypt,
    /// Reverse name substitution only (no letter mapping)
    ReverseSub,
}

/// Action metadata
#[derive(Debug, Clone, Copy)]
pub struct ActionInfo {
    /// Wire name of the action
    pub name: &'static str,
    /// Brief description
    pub description: &'static str,
    /// Whether the operation reads the letter key
    pub uses_letter_key: bool,
    /// Whether the operation reads the name dictionary
    pub uses_name_dictionary: bool,
}

/// Registry of all supported actions with metadata.
pub const ACTION_REGISTRY: [ActionInfo; 4] = [
    ActionInfo {
        name: "encrypt",
        description: "Substitute each letter through the forward key",
        uses_letter_key: true,
        uses_name_dictionary: false,
    },
    ActionInfo {
        name: "full_decrypt",
        description: "Invert the letter key, then restore recognized names",
        uses_letter_key: true,
        uses_name_dictionary: true,
    },
    ActionInfo {
        name: "simple_decrypt",
        description: "Invert the letter key only",
        uses_letter_key: true,
        uses_name_dictionary: false,
    },
    ActionInfo {
        name: "reverse_sub",
        description: "Replace canonical names with their aliases",
        uses_letter_key: false,
        uses_name_dictionary: true,
    },
];

impl Action {
    /// Parse an action string. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidAction` naming the rejected value.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        match raw.trim().to_lowercase().as_str() {
            "encrypt" => Ok(Action::Encrypt),
            "full_decrypt" => Ok(Action::FullDecrypt),
            "simple_decrypt" => Ok(Action::SimpleDecrypt),
            "reverse_sub" => Ok(Action::ReverseSub),
            other => Err(ApiError::InvalidAction(other.to_string())),
        }
    }

    /// Wire name of this action.
    pub fn as_str(&self) -> &'static str {
        self.info().name
    }

    /// Metadata for this action.
    pub fn info(&self) -> &'static ActionInfo {
        match self {
            Action::Encrypt => &ACTION_REGISTRY[0],
            Action::FullDecrypt => &ACTION_REGISTRY[1],
            Action::SimpleDecrypt => &ACTION_REGISTRY[2],
            Action::ReverseSub => &ACTION_REGISTRY[3],
        }
    }
}

/// Names of all supported actions, for service info and error context.
pub fn supported_actions() -> Vec<&'static str> {
    ACTION_REGISTRY.iter().map(|info| info.name).collect()
}

/// Check whether an action string is supported.
pub fn is_action_supported(raw: &str) -> bool {
    Action::parse(raw).is_ok()
}
