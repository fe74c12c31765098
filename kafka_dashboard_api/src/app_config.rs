use anyhow::Context;
use config::Config;
use kafka_dashboard::cluster::SecurityProtocol;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Maximum number of broker nodes rendered individually in the topology
    /// graph before the rest collapses into one node.
    #[serde(default = "default_graph_node_limit")]
    pub graph_node_limit: usize,
    pub offset_storage: String,
    pub consumer_rpc_url: String,
    pub clusters: HashMap<String, ClusterSettings>,
}

#[derive(Deserialize, Debug)]
pub struct ClusterSettings {
    pub brokers: Vec<String>,
    #[serde(default)]
    pub security_protocol: SecurityProtocol,
    /// Comma-separated coordination-service address list.
    pub zookeepers: String,
}

fn default_graph_node_limit() -> usize {
    10
}

impl AppConfig {
    pub fn build() -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .add_source(config::File::with_name("appsettings"))
            .add_source(config::Environment::with_prefix("App").separator("__"))
            .build()
            .context("While building config")?;

        let deserialized_config = config
            .try_deserialize()
            .context("While deserializing config")?;

        info!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }
}
