mod ingress;

use crate::{Index, SharedIndex};
use ingress_controller_core::Rule;
use ingress_controller_k8s_api as k8s;
use kubert::index::IndexNamespacedResource;

struct TestIndex {
    index: SharedIndex,
    _tracing: tracing::subscriber::DefaultGuard,
}

// === impl TestIndex ===

impl TestIndex {
    fn new() -> Self {
        let _tracing = tracing::subscriber::set_default(
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::TRACE)
                .finish(),
        );
        Self {
            index: Index::shared(),
            _tracing,
        }
    }

    fn apply(&self, ingress: k8s::Ingress) {
        self.index.write().apply(ingress);
    }

    fn delete(&self, namespace: &str, name: &str) {
        self.index
            .write()
            .delete(namespace.to_string(), name.to_string());
    }

    fn resolve(&self, host: Option<&str>, path: &str) -> Option<Rule> {
        self.index.read().resolve(host, path)
    }
}

fn mk_ingress(
    ns: impl ToString,
    name: impl ToString,
    default_backend: Option<k8s::IngressBackend>,
    rules: impl IntoIterator<Item = k8s::IngressRule>,
) -> k8s::Ingress {
    k8s::Ingress {
        metadata: k8s::ObjectMeta {
            namespace: Some(ns.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(k8s::IngressSpec {
            backend: default_backend,
            rules: Some(rules.into_iter().collect()),
        }),
    }
}

fn mk_rule<'p>(
    host: Option<&str>,
    paths: impl IntoIterator<Item = (Option<&'p str>, k8s::IngressBackend)>,
) -> k8s::IngressRule {
    k8s::IngressRule {
        host: host.map(ToString::to_string),
        http: Some(k8s::HttpIngressRuleValue {
            paths: paths
                .into_iter()
                .map(|(path, backend)| k8s::HttpIngressPath {
                    path: path.map(ToString::to_string),
                    backend,
                })
                .collect(),
        }),
    }
}

fn mk_backend(service: impl ToString, port: u16) -> k8s::IngressBackend {
    k8s::IngressBackend {
        service_name: service.to_string(),
        service_port: k8s::Port::Number(port.try_into().unwrap()),
    }
}
