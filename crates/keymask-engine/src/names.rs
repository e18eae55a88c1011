//! # Name Dictionary
//!
//! Whole-token replacement of recognized names, independent of the letter
//! cipher. The dictionary is a token-level bijection: each alias maps to
//! exactly one canonical name and back. Lookups are case-insensitive and
//! replacements re-apply the original token's case pattern.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::EngineError;

/// Built-in alias table. Aliases on the left, canonical names on the right.
const DEFAULT_NAME_PAIRS: &[(&str, &str)] = &[
    ("aurora", "alice"),
    ("borealis", "bob"),
    ("cascade", "carol"),
    ("dorian", "dave"),
    ("ember", "eve"),
    ("mistral", "mallory"),
    ("peregrine", "peggy"),
    ("tempest", "trent"),
    ("vesper", "victor"),
];

/// Direction of a name-substitution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameDirection {
    /// Alias to canonical name (used after decryption).
    Forward,
    /// Canonical name to alias (the `reverse_sub` action).
    Reverse,
}

/// Bidirectional token mapping for name substitution.
///
/// Keys are stored lowercase in both directions. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct NameDictionary {
    alias_to_name: HashMap<String, String>,
    name_to_alias: HashMap<String, String>,
}

impl NameDictionary {
    /// Build a dictionary from `(alias, canonical)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Dictionary` if a token is empty or contains a
    /// non-alphanumeric character (it could never match a token in text),
    /// or if an alias or canonical name appears twice (the mapping must
    /// stay invertible).
    pub fn new<I>(pairs: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut alias_to_name = HashMap::new();
        let mut name_to_alias = HashMap::new();

        for (alias, name) in pairs {
            let alias = normalize_token(&alias)?;
            let name = normalize_token(&name)?;

            if alias_to_name.contains_key(&alias) {
                return Err(EngineError::Dictionary(format!(
                    "duplicate alias '{}'",
                    alias
                )));
            }
            if name_to_alias.contains_key(&name) {
                return Err(EngineError::Dictionary(format!(
                    "duplicate name '{}'",
                    name
                )));
            }

            alias_to_name.insert(alias.clone(), name.clone());
            name_to_alias.insert(name, alias);
        }

        Ok(Self {
            alias_to_name,
            name_to_alias,
        })
    }

    /// An empty dictionary. Substitution passes become the identity.
    pub fn empty() -> Self {
        Self {
            alias_to_name: HashMap::new(),
            name_to_alias: HashMap::new(),
        }
    }

    /// The built-in alias table.
    pub fn with_default_names() -> Self {
        let mut alias_to_name = HashMap::new();
        let mut name_to_alias = HashMap::new();
        for &(alias, name) in DEFAULT_NAME_PAIRS {
            alias_to_name.insert(alias.to_string(), name.to_string());
            name_to_alias.insert(name.to_string(), alias.to_string());
        }
        Self {
            alias_to_name,
            name_to_alias,
        }
    }

    /// Load a dictionary from a JSON file of the form
    /// `{"alias": "canonical", ...}`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DictionaryUnreadable` if the file cannot be
    /// read or parsed, and `EngineError::Dictionary` if the parsed entries
    /// fail validation.
    pub fn from_json_file(path: &Path) -> Result<Self, EngineError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| EngineError::DictionaryUnreadable(format!("{}: {}", path.display(), e)))?;
        let pairs: HashMap<String, String> = serde_json::from_str(&raw)
            .map_err(|e| EngineError::DictionaryUnreadable(format!("{}: {}", path.display(), e)))?;
        Self::new(pairs)
    }

    /// Number of alias/name pairs.
    pub fn len(&self) -> usize {
        self.alias_to_name.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.alias_to_name.is_empty()
    }

    /// Look up a token (case-insensitively) in the given direction.
    pub fn resolve(&self, token: &str, direction: NameDirection) -> Option<&str> {
        let key = token.to_lowercase();
        let table = match direction {
            NameDirection::Forward => &self.alias_to_name,
            NameDirection::Reverse => &self.name_to_alias,
        };
        table.get(&key).map(String::as_str)
    }

    /// Replace every recognized token in `text`, leaving everything else
    /// untouched.
    ///
    /// Tokens are maximal runs of alphanumeric characters; separators are
    /// copied through verbatim, so text with no dictionary hits comes back
    /// unchanged.
    pub fn substitute(&self, text: &str, direction: NameDirection) -> String {
        let mut out = String::with_capacity(text.len());
        let mut token = String::new();

        for ch in text.chars() {
            if ch.is_alphanumeric() {
                token.push(ch);
            } else {
                self.flush_token(&mut out, &mut token, direction);
                out.push(ch);
            }
        }
        self.flush_token(&mut out, &mut token, direction);

        out
    }

    fn flush_token(&self, out: &mut String, token: &mut String, direction: NameDirection) {
        if token.is_empty() {
            return;
        }
        match self.resolve(token, direction) {
            Some(replacement) => out.push_str(&apply_case_pattern(token, replacement)),
            None => out.push_str(token),
        }
        token.clear();
    }
}

/// Validate and lowercase a dictionary token.
fn normalize_token(token: &str) -> Result<String, EngineError> {
    if token.is_empty() {
        return Err(EngineError::Dictionary("empty token".to_string()));
    }
    if !token.chars().all(char::is_alphanumeric) {
        return Err(EngineError::Dictionary(format!(
            "token '{}' contains a non-alphanumeric character",
            token
        )));
    }
    Ok(token.to_lowercase())
}

/// Re-shape `replacement` to match the case pattern of `original`:
/// ALL-CAPS stays all-caps, Capitalized stays capitalized, anything else
/// uses the stored lowercase form.
fn apply_case_pattern(original: &str, replacement: &str) -> String {
    let has_upper = original.chars().any(char::is_uppercase);
    let has_lower = original.chars().any(char::is_lowercase);

    if has_upper && !has_lower && original.chars().count() > 1 {
        replacement.to_uppercase()
    } else if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    }
}
