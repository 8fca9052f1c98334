use super::{mk_backend, mk_ingress, mk_rule};
use crate::ingress::to_rule_set;
use ingress_controller_core::{Path, Port};
use ingress_controller_k8s_api as k8s;

#[test]
fn preserves_source_order() {
    let ingress = mk_ingress(
        "prod",
        "web",
        None,
        vec![
            mk_rule(
                Some("example.com"),
                vec![
                    (Some("/api"), mk_backend("api", 8080)),
                    (Some("/"), mk_backend("web", 8080)),
                ],
            ),
            mk_rule(Some("admin.example.com"), vec![(None, mk_backend("admin", 9090))]),
        ],
    );

    let routes = to_rule_set(ingress).expect("must translate");
    assert_eq!(routes.name.as_deref(), Some("web"));

    let summary = routes
        .rules
        .iter()
        .map(|rule| (rule.host.as_deref(), rule.backend.service.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![
            (Some("example.com"), "api"),
            (Some("example.com"), "web"),
            (Some("admin.example.com"), "admin"),
        ],
    );

    assert_eq!(routes.rules[0].path, Some(Path::from("/api")));
    assert_eq!(routes.rules[2].path, None);
    assert_eq!(routes.rules[2].backend.port, Port::Number(9090.try_into().unwrap()));
}

#[test]
fn defaults_namespace() {
    let ingress = k8s::Ingress {
        metadata: k8s::ObjectMeta {
            name: Some("web".to_string()),
            ..Default::default()
        },
        spec: Some(k8s::IngressSpec {
            backend: Some(mk_backend("fallback", 80)),
            rules: None,
        }),
    };

    let routes = to_rule_set(ingress).expect("must translate");
    let default_rule = routes.default_rule.expect("must carry default backend");
    assert_eq!(default_rule.backend.namespace, "default");
}

#[test]
fn carries_resource_namespace() {
    let ingress = mk_ingress(
        "prod",
        "web",
        None,
        vec![mk_rule(None, vec![(Some("/api"), mk_backend("api", 8080))])],
    );

    let routes = to_rule_set(ingress).expect("must translate");
    assert_eq!(routes.rules[0].backend.namespace, "prod");
}

#[test]
fn skips_ingress_without_spec() {
    let ingress = k8s::Ingress {
        metadata: k8s::ObjectMeta {
            namespace: Some("prod".to_string()),
            name: Some("web".to_string()),
            ..Default::default()
        },
        spec: None,
    };
    assert!(to_rule_set(ingress).is_none());
}

#[test]
fn default_backend_is_unconstrained() {
    let ingress = mk_ingress("prod", "web", Some(mk_backend("fallback", 80)), vec![]);

    let routes = to_rule_set(ingress).expect("must translate");
    assert!(routes.rules.is_empty());
    let default_rule = routes.default_rule.expect("must carry default backend");
    assert!(default_rule.is_fallback());
    assert_eq!(default_rule.backend.service, "fallback");
}

#[test]
fn rule_without_http_paths_emits_no_rules() {
    let ingress = mk_ingress(
        "prod",
        "web",
        None,
        vec![k8s::IngressRule {
            host: Some("example.com".to_string()),
            http: None,
        }],
    );

    let routes = to_rule_set(ingress).expect("must translate");
    assert!(routes.rules.is_empty());
    assert!(routes.default_rule.is_none());
}
