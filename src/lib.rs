//! bindery - directive resolution engine for class-driven data binding
//!
//! Resolves declarative directive markers (`data-class="one two"`, or
//! `<!-- ko class: one -->` in comment form) found on UI-tree nodes into a
//! merged binding map for a host data-binding runtime. The engine scans a
//! node, tokenizes the directive string, qualifies relative tokens with the
//! ancestor-inherited scope prefix, routes each token through a hierarchical
//! registry, invokes the resolved definitions against a data context, and
//! merges the outputs in token order. When a node carries no directive, an
//! injected fallback resolver can take over.

pub mod context;
pub mod directive;
pub mod error;
pub mod node;
pub mod prefix;
pub mod provider;
pub mod registry;
pub mod router;
mod scan;

pub use context::BindingContext;
pub use directive::{parse_directive_text, DirectiveToken};
pub use error::{BinderyError, FixSuggestion};
pub use node::{DirectiveNode, MemoryNode, NodeId, NodeKind};
pub use prefix::{PrefixResolver, ROOT_PREFIX};
pub use provider::{ClassBindingProvider, FallbackResolver, ProviderOptions};
pub use registry::{BindingEntry, BindingFn, BindingMap, BindingRegistry, Invocation};
pub use router::{BindingRouter, DefaultRouter};
