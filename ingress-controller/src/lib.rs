#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

mod args;

pub use self::args::Args;
pub use ingress_controller_core::{Backend, DiscoverBackend, Path, Port, Rule, RuleSet};
pub use ingress_controller_k8s_api as k8s;
pub use ingress_controller_k8s_index::{Index, ResourceId, SharedIndex};

use anyhow::Result;

/// Serves backend lookups for request-handling callers by reading the shared
/// ingress index.
#[derive(Clone, Debug)]
pub struct BackendDiscover(SharedIndex);

// === impl BackendDiscover ===

impl BackendDiscover {
    pub fn new(index: SharedIndex) -> Self {
        Self(index)
    }
}

#[async_trait::async_trait]
impl DiscoverBackend<(Option<String>, String)> for BackendDiscover {
    async fn get_backend(&self, (host, path): (Option<String>, String)) -> Result<Option<Rule>> {
        Ok(self.0.read().resolve(host.as_deref(), &path))
    }
}
