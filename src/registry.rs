//! Binding registry and definition invocation
//!
//! The registry maps directive names to binding definitions. A definition is
//! an explicit tagged union: a static key→value map used verbatim, a callable
//! invoked against the data context, or a group — a nested namespace reached
//! through dotted tokens. Registration merges shallowly and right-biased:
//! incoming keys overwrite, untouched keys survive.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::context::BindingContext;
use crate::directive::DirectiveToken;
use crate::error::BinderyError;

/// Key→value output of one binding definition, and of a whole resolution
pub type BindingMap = Map<String, Value>;

/// Callable binding definition
pub type BindingFn = Arc<dyn Fn(&BindingContext, &Invocation<'_>) -> BindingMap + Send + Sync>;

/// Arguments handed to a callable definition
#[derive(Debug)]
pub struct Invocation<'a> {
    /// Every token of the directive string being resolved, in order
    pub tokens: &'a [DirectiveToken],
    /// Explicit positional parameters of the invoked token
    pub params: &'a [String],
}

/// A registered binding definition, or a namespace of them
#[derive(Clone)]
pub enum BindingEntry {
    /// Plain key→value map used verbatim as partial output
    Static(BindingMap),
    /// Function of the data context, invoked at resolution time
    Callable(BindingFn),
    /// Nested namespace reachable through dotted tokens; not itself a binding
    Group(FxHashMap<String, BindingEntry>),
}

impl BindingEntry {
    /// Callable entry from a closure
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&BindingContext, &Invocation<'_>) -> BindingMap + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(f))
    }

    /// Group entry from nested (name, entry) pairs
    pub fn group<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, BindingEntry)>,
    {
        Self::Group(
            entries
                .into_iter()
                .map(|(key, entry)| (key.into(), entry))
                .collect(),
        )
    }

    /// True for namespace entries
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Execute the definition against the context.
    ///
    /// Static maps are returned verbatim, callables are invoked, groups yield
    /// `None` — a namespace is structure, not a binding.
    pub fn evaluate(&self, ctx: &BindingContext, invocation: &Invocation<'_>) -> Option<BindingMap> {
        match self {
            Self::Static(map) => Some(map.clone()),
            Self::Callable(f) => Some(f(ctx, invocation)),
            Self::Group(_) => None,
        }
    }
}

impl fmt::Debug for BindingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(map) => f.debug_tuple("Static").field(map).finish(),
            Self::Callable(_) => f.write_str("Callable(..)"),
            Self::Group(map) => f.debug_tuple("Group").field(map).finish(),
        }
    }
}

impl From<BindingMap> for BindingEntry {
    fn from(map: BindingMap) -> Self {
        Self::Static(map)
    }
}

/// Mutable mapping from directive name to binding definition
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    entries: FxHashMap<String, BindingEntry>,
}

impl BindingRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded from (name, entry) pairs
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, BindingEntry)>,
    {
        let mut registry = Self::new();
        registry.register(entries);
        registry
    }

    /// Merge new definitions in: incoming keys overwrite, keys not present in
    /// `entries` are untouched.
    pub fn register<K, I>(&mut self, entries: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, BindingEntry)>,
    {
        for (key, entry) in entries {
            self.entries.insert(key.into(), entry);
        }
    }

    /// Ingest a JSON object of static binding definitions.
    ///
    /// Every member must itself be an object; each becomes a `Static` entry
    /// under its key (dotted keys register as flat keys).
    pub fn register_value(&mut self, value: Value) -> Result<(), BinderyError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(BinderyError::RegistryNotObject {
                    got: json_kind(&other).to_string(),
                })
            }
        };

        for (key, member) in map {
            let fields = match member {
                Value::Object(fields) => fields,
                other => {
                    return Err(BinderyError::EntryNotObject {
                        key,
                        got: json_kind(&other).to_string(),
                    })
                }
            };
            self.entries.insert(key, BindingEntry::Static(fields));
        }

        Ok(())
    }

    /// Entry for an exact (possibly dotted) key
    pub fn get(&self, key: &str) -> Option<&BindingEntry> {
        self.entries.get(key)
    }

    /// Top-level entries, for routing strategies
    pub fn entries(&self) -> &FxHashMap<String, BindingEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Right-biased shallow merge of one definition's output into the accumulator
pub fn merge_into(acc: &mut BindingMap, overlay: BindingMap) {
    for (key, value) in overlay {
        acc.insert(key, value);
    }
}

/// Short JSON type name for error messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
