//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
#[derive(Error, Debug)]
pub enum BinderyError {
    #[error("BIND-010: cannot find binding for '{token}'")]
    DirectiveNotFound { token: String },

    #[error("BIND-020: registry value must be a JSON object, got {got}")]
    RegistryNotObject { got: String },

    #[error("BIND-021: binding '{key}' must be a JSON object, got {got}")]
    EntryNotObject { key: String, got: String },
}

impl FixSuggestion for BinderyError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            BinderyError::DirectiveNotFound { .. } => {
                Some("Check the directive path against registered binding names and any inherited prefix")
            }
            BinderyError::RegistryNotObject { .. } => {
                Some("Pass a JSON object mapping directive names to binding objects")
            }
            BinderyError::EntryNotObject { .. } => {
                Some("Each registered value must be an object of binding-name/value pairs")
            }
        }
    }
}
