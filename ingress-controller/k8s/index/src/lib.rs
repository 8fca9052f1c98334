//! Ingress routing index
//!
//! Maintains the in-memory table of routing rules derived from the cluster's
//! ingress resources and answers backend lookups against it:
//!
//! - Each `Ingress` resource is translated into one [`RuleSet`] and stored
//!   under its namespace/name. Updates replace the stored rule-set wholesale;
//!   deletions remove it.
//! - [`Index::resolve`] scans the current rule-sets for the first one that
//!   contributes a result for a request's host and path, taking each set's
//!   first matching rule in source order, or its default backend when no rule
//!   matches.
//!
//! The index is owned and mutated by a single task consuming watch events via
//! `kubert::index`, while lookups take the read side of the shared lock from
//! any number of request-handling tasks. Readers always observe a rule-set
//! either entirely before or entirely after an update, never a mix.

#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

mod ingress;
pub mod metrics;

#[cfg(test)]
mod tests;

use ingress_controller_core::{Path, Rule, RuleSet};
use ingress_controller_k8s_api as k8s;
use parking_lot::RwLock;
use std::{collections::BTreeMap, fmt, sync::Arc};

pub type SharedIndex = Arc<RwLock<Index>>;

/// Identifies one ingress resource in the cluster.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId {
    pub namespace: String,
    pub name: String,
}

/// Holds the routing rules of every known ingress resource.
///
/// Keyed by namespace/name; the map's ordering fixes the iteration order used
/// by [`Index::resolve`], so resolution across resources is stable between
/// calls.
#[derive(Debug, Default)]
pub struct Index {
    routes: BTreeMap<ResourceId, RuleSet>,
}

// === impl ResourceId ===

impl ResourceId {
    pub fn new(namespace: String, name: String) -> Self {
        Self { namespace, name }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

// === impl Index ===

impl Index {
    pub fn shared() -> SharedIndex {
        Arc::new(RwLock::new(Self::default()))
    }

    /// Selects the backend for a request.
    ///
    /// Rule-sets are visited in the table's iteration order and the first one
    /// that contributes a result wins outright; later resources are not
    /// searched for a closer match.
    pub fn resolve(&self, host: Option<&str>, path: &str) -> Option<Rule> {
        let path = Path::from(path);
        for (id, routes) in &self.routes {
            if let Some(rule) = routes.best_match(host, &path) {
                tracing::debug!(ingress = %id, fallback = rule.is_fallback(), "matched backend");
                return Some(rule.clone());
            }
        }
        tracing::trace!(?host, %path, "no backend found");
        None
    }

    /// The number of ingress resources currently indexed.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub(crate) fn rule_count(&self) -> usize {
        self.routes.values().map(|routes| routes.rules.len()).sum()
    }
}

impl kubert::index::IndexNamespacedResource<k8s::Ingress> for Index {
    fn apply(&mut self, resource: k8s::Ingress) {
        let id = match (&resource.metadata.namespace, &resource.metadata.name) {
            (Some(namespace), Some(name)) => ResourceId::new(namespace.clone(), name.clone()),
            _ => {
                tracing::warn!("ignoring ingress without a namespace and name");
                return;
            }
        };

        match ingress::to_rule_set(resource) {
            Some(routes) => {
                tracing::debug!(ingress = %id, rules = routes.rules.len(), "updating routes");
                self.routes.insert(id, routes);
            }
            // An update without a spec must not clear previously indexed
            // rules for the same resource.
            None => tracing::debug!(ingress = %id, "ignoring ingress without a spec"),
        }
    }

    fn delete(&mut self, namespace: String, name: String) {
        let id = ResourceId::new(namespace, name);
        if self.routes.remove(&id).is_some() {
            tracing::debug!(ingress = %id, "removed routes");
        }
    }

    // Applies reindex a single resource at a time, so watch resets need no
    // special handling.
}
