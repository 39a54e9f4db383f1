//! Class binding provider
//!
//! The engine facade: wires options, scans nodes for directive markers,
//! resolves each token through the registry, merges outputs in token order,
//! and delegates to the fallback resolver when nothing is found.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::context::BindingContext;
use crate::directive::parse_directive_text;
use crate::error::BinderyError;
use crate::node::DirectiveNode;
use crate::prefix::PrefixResolver;
use crate::registry::{merge_into, BindingEntry, BindingMap, BindingRegistry, Invocation};
use crate::router::{BindingRouter, DefaultRouter};
use crate::scan::marker_text;

/// Secondary resolver consulted when a node carries no directive marker
pub trait FallbackResolver: Send + Sync {
    /// Presence check with the same node contract as the engine's
    fn node_has_bindings(&self, node: &dyn DirectiveNode) -> bool;

    /// Resolution with the same `(node, context)` signature; the result is
    /// returned verbatim, never merged with engine output
    fn get_bindings(&self, node: &dyn DirectiveNode, ctx: &BindingContext) -> BindingMap;
}

/// Construction options; every field has a conventional default
pub struct ProviderOptions {
    /// Marker attribute on element nodes
    pub attribute: String,
    /// Attribute carrying an author-declared scope prefix
    pub prefix_attribute: String,
    /// Virtual marker name for comment nodes; the marker substring is derived
    /// as `"ko <name>:"`
    pub virtual_attribute: String,
    /// Routing strategy override
    pub router: Option<Arc<dyn BindingRouter>>,
    /// Secondary resolver for nodes without a directive
    pub fallback: Option<Arc<dyn FallbackResolver>>,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            attribute: "data-class".to_string(),
            prefix_attribute: "data-class-prefix".to_string(),
            virtual_attribute: "class".to_string(),
            router: None,
            fallback: None,
        }
    }
}

/// Directive resolution engine
pub struct ClassBindingProvider {
    attribute: String,
    virtual_attribute: String,
    registry: BindingRegistry,
    router: Arc<dyn BindingRouter>,
    fallback: Option<Arc<dyn FallbackResolver>>,
    prefixes: PrefixResolver,
}

impl Default for ClassBindingProvider {
    fn default() -> Self {
        Self::new(BindingRegistry::default(), ProviderOptions::default())
    }
}

impl ClassBindingProvider {
    /// Engine over `registry` with the given options
    pub fn new(registry: BindingRegistry, options: ProviderOptions) -> Self {
        Self {
            attribute: options.attribute,
            virtual_attribute: format!("ko {}:", options.virtual_attribute),
            registry,
            router: options.router.unwrap_or_else(|| Arc::new(DefaultRouter)),
            fallback: options.fallback,
            prefixes: PrefixResolver::new(options.prefix_attribute),
        }
    }

    /// Whether the node carries a directive marker, or the fallback claims it
    pub fn node_has_bindings(&self, node: &dyn DirectiveNode) -> bool {
        if marker_text(node, &self.attribute, &self.virtual_attribute).is_some() {
            return true;
        }
        self.fallback
            .as_ref()
            .is_some_and(|fallback| fallback.node_has_bindings(node))
    }

    /// Resolve the node's directive string into a merged binding map.
    ///
    /// Unresolved tokens contribute nothing. A node with no directive text at
    /// all delegates to the fallback resolver when one is configured, and
    /// yields an empty map otherwise — never an error.
    pub fn get_bindings(&self, node: &dyn DirectiveNode, ctx: &BindingContext) -> BindingMap {
        match marker_text(node, &self.attribute, &self.virtual_attribute) {
            Some(text) if !text.is_empty() => self.resolve_directives(node, &text, ctx),
            _ => match &self.fallback {
                Some(fallback) => fallback.get_bindings(node, ctx),
                None => BindingMap::new(),
            },
        }
    }

    fn resolve_directives(
        &self,
        node: &dyn DirectiveNode,
        text: &str,
        ctx: &BindingContext,
    ) -> BindingMap {
        let prefix = self.prefixes.clean_prefix(node);
        let tokens = parse_directive_text(text);
        let mut result = BindingMap::new();

        for token in &tokens {
            let entry = match self.router.route(&token.name, &self.registry, &prefix) {
                Ok(Some(entry)) => entry,
                Ok(None) => {
                    trace!(token = %token.name, "no binding for directive token");
                    continue;
                }
                // Local to this token: siblings still resolve
                Err(err) => {
                    debug!(token = %token.name, %err, "skipping unresolvable directive token");
                    continue;
                }
            };

            let invocation = Invocation {
                tokens: &tokens,
                params: &token.params,
            };
            if let Some(bindings) = entry.evaluate(ctx, &invocation) {
                merge_into(&mut result, bindings);
            }
        }

        result
    }

    /// Route a single directive token explicitly.
    ///
    /// Unlike the lenient loop inside [`Self::get_bindings`], a dotted path
    /// that breaks mid-traversal surfaces
    /// [`BinderyError::DirectiveNotFound`] here.
    pub fn route(&self, token: &str, prefix: &str) -> Result<Option<&BindingEntry>, BinderyError> {
        self.router.route(token, &self.registry, prefix)
    }

    /// Merge new definitions into the live registry
    pub fn register<K, I>(&mut self, entries: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, BindingEntry)>,
    {
        self.registry.register(entries);
    }

    /// Ingest a JSON object of static binding definitions
    pub fn register_value(&mut self, value: Value) -> Result<(), BinderyError> {
        self.registry.register_value(value)
    }

    /// Current registry
    pub fn registry(&self) -> &BindingRegistry {
        &self.registry
    }

    /// Prefix resolver; exposes `clear` for out-of-band cache invalidation
    pub fn prefixes(&self) -> &PrefixResolver {
        &self.prefixes
    }
}
