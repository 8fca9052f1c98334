#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod ingress;

pub use self::ingress::{
    HttpIngressPath, HttpIngressRuleValue, Ingress, IngressBackend, IngressRule, IngressSpec, Port,
};
pub use kube::api::{ObjectMeta, ResourceExt};
