use crate::SharedIndex;
use prometheus_client::{
    collector::Collector,
    encoding::{DescriptorEncoder, EncodeMetric},
    metrics::{gauge::ConstGauge, MetricType},
    registry::Registry,
};

#[derive(Debug)]
struct Instrumented(SharedIndex);

pub fn register(reg: &mut Registry, index: SharedIndex) {
    reg.register_collector(Box::new(Instrumented(index)));
}

impl Collector for Instrumented {
    fn encode(&self, mut encoder: DescriptorEncoder<'_>) -> Result<(), std::fmt::Error> {
        let this = self.0.read();

        let ingress_encoder = encoder.encode_descriptor(
            "resource_index_size",
            "The number of ingress resources in the index",
            None,
            MetricType::Gauge,
        )?;
        let ingresses = ConstGauge::new(this.len() as u32);
        ingresses.encode(ingress_encoder)?;

        let rule_encoder = encoder.encode_descriptor(
            "rule_index_size",
            "The total number of routing rules in the index",
            None,
            MetricType::Gauge,
        )?;
        let rules = ConstGauge::new(this.rule_count() as u32);
        rules.encode(rule_encoder)?;

        Ok(())
    }
}
