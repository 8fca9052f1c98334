#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod path;
pub mod routes;

pub use self::{
    path::Path,
    routes::{Backend, DiscoverBackend, Port, Rule, RuleSet},
};
