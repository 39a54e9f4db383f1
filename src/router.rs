//! Token→definition routing
//!
//! The router maps one (token, registry, prefix) triple to a binding
//! definition. The default strategy qualifies relative tokens with the
//! inherited prefix, tries a direct flat-key match, then walks the registry's
//! nested groups one path segment at a time. A custom strategy can replace it
//! wholesale at construction.

use tracing::trace;

use crate::error::BinderyError;
use crate::prefix::{strip_root, ROOT_PREFIX};
use crate::registry::{BindingEntry, BindingRegistry};

/// Routing strategy mapping one directive token to a binding definition
pub trait BindingRouter: Send + Sync {
    /// Resolve `token` against `registry`, qualified by `prefix`.
    ///
    /// `Ok(None)` means the token has no binding; `Err(DirectiveNotFound)`
    /// means a dotted path broke mid-traversal (informative failure naming
    /// the qualified token).
    fn route<'r>(
        &self,
        token: &str,
        registry: &'r BindingRegistry,
        prefix: &str,
    ) -> Result<Option<&'r BindingEntry>, BinderyError>;
}

/// Default strategy: flat key match first, then dotted descent through groups
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRouter;

impl BindingRouter for DefaultRouter {
    fn route<'r>(
        &self,
        token: &str,
        registry: &'r BindingRegistry,
        prefix: &str,
    ) -> Result<Option<&'r BindingEntry>, BinderyError> {
        // Root-qualified tokens opt out of prefix inheritance
        let qualified = if !prefix.is_empty() && !token.contains(ROOT_PREFIX) {
            format!("{prefix}.{token}")
        } else {
            token.to_string()
        };
        let qualified = strip_root(&qualified);

        // Flat dotted keys win over any coincidental nested structure
        if let Some(entry) = registry.get(&qualified) {
            return Ok(Some(entry));
        }

        let segments: Vec<&str> = qualified.split('.').collect();
        let mut current = registry.entries();

        for (index, segment) in segments.iter().enumerate() {
            let last = index + 1 == segments.len();
            match current.get(*segment) {
                None if last => return Ok(None),
                None => {
                    return Err(BinderyError::DirectiveNotFound {
                        token: qualified.clone(),
                    })
                }
                Some(entry) if last => {
                    if entry.is_group() {
                        trace!(token = %qualified, "token names a namespace, not a binding");
                        return Ok(None);
                    }
                    return Ok(Some(entry));
                }
                Some(BindingEntry::Group(group)) => current = group,
                // A static or callable leaf mid-path cannot be descended into
                Some(_) => {
                    return Err(BinderyError::DirectiveNotFound {
                        token: qualified.clone(),
                    })
                }
            }
        }

        Ok(None)
    }
}
