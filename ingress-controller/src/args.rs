use anyhow::{bail, Result};
use clap::Parser;
use futures::prelude::*;
use ingress_controller_k8s_api as k8s;
use ingress_controller_k8s_index::{metrics, Index};
use kube::runtime::watcher;
use prometheus_client::registry::Registry;
use tracing::{info_span, Instrument};

#[derive(Debug, Parser)]
#[clap(name = "ingress", about = "An ingress routing-rule controller")]
pub struct Args {
    #[clap(
        long,
        default_value = "ingress_controller=info,warn",
        env = "INGRESS_CONTROLLER_LOG"
    )]
    log_level: kubert::LogFilter,

    #[clap(long, default_value = "plain")]
    log_format: kubert::LogFormat,

    #[clap(flatten)]
    client: kubert::ClientArgs,

    #[clap(flatten)]
    admin: kubert::AdminArgs,

    /// Watch ingress resources in a single namespace rather than cluster-wide.
    #[clap(long)]
    watch_namespace: Option<String>,
}

impl Args {
    #[inline]
    pub async fn parse_and_run() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let Self {
            admin,
            client,
            log_level,
            log_format,
            watch_namespace,
        } = self;

        // The routing table: written by the watch task below, read by lookup
        // callers holding a clone of this handle.
        let index = Index::shared();

        let mut prom = <Registry>::default();
        metrics::register(prom.sub_registry_with_prefix("ingress_index"), index.clone());
        let rt_metrics = kubert::RuntimeMetrics::register(prom.sub_registry_with_prefix("kube"));

        let mut runtime = kubert::Runtime::builder()
            .with_log(log_level, log_format)
            .with_metrics(rt_metrics)
            .with_admin(admin.into_builder().with_prometheus(prom))
            .with_client(client)
            .build()
            .await?;

        let ingresses = match watch_namespace {
            Some(ns) => runtime
                .watch_namespaced::<k8s::Ingress>(ns, watcher::Config::default())
                .boxed(),
            None => runtime
                .watch_all::<k8s::Ingress>(watcher::Config::default())
                .boxed(),
        };
        tokio::spawn(
            kubert::index::namespaced(index.clone(), ingresses).instrument(info_span!("ingresses")),
        );

        // Block the main thread on the shutdown signal. Once it fires, wait
        // for the background tasks to complete before exiting.
        if runtime.run().await.is_err() {
            bail!("Aborted");
        }

        Ok(())
    }
}
