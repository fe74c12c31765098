use anyhow::bail;
use rdkafka::ClientConfig;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Bootstrap connection settings for one configured cluster alias.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterConnection {
    pub brokers: Vec<String>,
    #[serde(default)]
    pub security_protocol: SecurityProtocol,
}

#[derive(Debug, Copy, Clone, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityProtocol {
    #[default]
    Plaintext,
    Ssl,
}

impl Display for SecurityProtocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityProtocol::Plaintext => write!(f, "plaintext"),
            SecurityProtocol::Ssl => write!(f, "ssl"),
        }
    }
}

impl TryFrom<&ClusterConnection> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(value: &ClusterConnection) -> Result<Self, Self::Error> {
        if value.brokers.is_empty() {
            bail!("No brokers specified")
        }

        let mut config = ClientConfig::new();

        config
            .set("bootstrap.servers", value.brokers.join(","))
            .set("security.protocol", value.security_protocol.to_string());

        Ok(config)
    }
}
