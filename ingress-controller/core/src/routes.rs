use crate::path::Path;
use anyhow::Result;
use std::{fmt, num::NonZeroU16};

/// A service port, referenced by number or by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Port {
    Number(NonZeroU16),
    Name(String),
}

/// The backend service a matched request is routed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Backend {
    pub namespace: String,
    pub service: String,
    pub port: Port,
}

/// One routable pattern: requests to this host and/or under this path prefix
/// go to `backend`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub host: Option<String>,
    pub path: Option<Path>,
    pub backend: Backend,
}

/// The normalized routing rules derived from a single ingress resource.
///
/// `rules` preserves the order rules appear in the source resource;
/// resolution is first-match-wins. `default_rule` carries the resource's
/// catch-all backend, if any, and is only consulted when no rule matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub name: Option<String>,
    pub default_rule: Option<Rule>,
    pub rules: Vec<Rule>,
}

/// Models backend discovery for an HTTP request.
#[async_trait::async_trait]
pub trait DiscoverBackend<T> {
    async fn get_backend(&self, target: T) -> Result<Option<Rule>>;
}

// === impl Rule ===

impl Rule {
    /// Returns true if this rule applies to a request with the given host
    /// header and (already parsed) path.
    ///
    /// A rule with neither host nor path configured never matches; such rules
    /// are only reachable through a rule-set's default slot.
    pub fn matches(&self, host: Option<&str>, path: &Path) -> bool {
        match (self.host.as_deref(), self.path.as_ref()) {
            (Some(rule_host), Some(prefix)) => {
                host == Some(rule_host) && prefix.is_prefix_of(path)
            }
            (Some(rule_host), None) => host == Some(rule_host),
            (None, Some(prefix)) => prefix.is_prefix_of(path),
            (None, None) => false,
        }
    }

    /// True for catch-all rules that carry neither a host nor a path.
    pub fn is_fallback(&self) -> bool {
        self.host.is_none() && self.path.is_none()
    }
}

// === impl RuleSet ===

impl RuleSet {
    /// Selects this rule-set's contribution for a request: the first rule (in
    /// source order) that matches, or the default backend when no rule does.
    pub fn best_match(&self, host: Option<&str>, path: &Path) -> Option<&Rule> {
        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(host, path)) {
            return Some(rule);
        }
        self.default_rule.as_ref()
    }
}

// === impl Port ===

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Number(port) => port.fmt(f),
            Port::Name(name) => name.fmt(f),
        }
    }
}
