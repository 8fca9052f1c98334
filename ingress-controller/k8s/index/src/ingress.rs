use ingress_controller_core::{Backend, Path, Port, Rule, RuleSet};
use ingress_controller_k8s_api as k8s;

/// Translates one ingress resource into its normalized rule-set.
///
/// Returns `None` when the resource has no spec. Rules are emitted in source
/// order: rule blocks in declaration order, then path entries within each
/// block. A top-level backend becomes the set's default rule.
pub(crate) fn to_rule_set(ingress: k8s::Ingress) -> Option<RuleSet> {
    let k8s::Ingress { metadata, spec } = ingress;
    let spec = spec?;

    let namespace = metadata
        .namespace
        .unwrap_or_else(|| "default".to_string());

    let mut rules = Vec::new();
    for rule in spec.rules.into_iter().flatten() {
        let host = rule.host;
        for path in rule.http.into_iter().flat_map(|http| http.paths) {
            rules.push(Rule {
                host: host.clone(),
                path: path.path.as_deref().map(Path::from),
                backend: to_backend(&namespace, path.backend),
            });
        }
    }

    let default_rule = spec.backend.map(|backend| Rule {
        host: None,
        path: None,
        backend: to_backend(&namespace, backend),
    });

    Some(RuleSet {
        name: metadata.name,
        default_rule,
        rules,
    })
}

fn to_backend(namespace: &str, backend: k8s::IngressBackend) -> Backend {
    Backend {
        namespace: namespace.to_string(),
        service: backend.service_name,
        port: match backend.service_port {
            k8s::Port::Number(port) => Port::Number(port),
            k8s::Port::Name(name) => Port::Name(name),
        },
    }
}
