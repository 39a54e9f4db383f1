//! Data context handed to callable definitions

use serde_json::Value;

/// Opaque host data context.
///
/// The engine reads nothing from it; callable definitions receive it by
/// reference and typically read the current data object off it. Passed
/// through unmodified on every resolution call.
#[derive(Debug, Clone, Default)]
pub struct BindingContext {
    data: Value,
}

impl BindingContext {
    /// Context wrapping the current data object
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// The current data object
    pub fn data(&self) -> &Value {
        &self.data
    }
}
