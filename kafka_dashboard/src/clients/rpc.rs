use anyhow::Context;
use async_trait::async_trait;

/// Remote consumer-count service. Returns the membership mapping for every
/// known consumer group as a serialized JSON object. The listing is global,
/// not scoped to a cluster alias.
#[async_trait]
pub trait ConsumerRpcClient: Send + Sync {
    async fn global_consumer_groups(&self) -> Result<String, anyhow::Error>;
}

pub struct HttpConsumerRpcClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpConsumerRpcClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ConsumerRpcClient for HttpConsumerRpcClient {
    async fn global_consumer_groups(&self) -> Result<String, anyhow::Error> {
        let body = self
            .client
            .get(format!("{}/consumers", self.base_url))
            .send()
            .await
            .context("While sending request for consumer groups")?
            .error_for_status()
            .context("While checking consumer groups response status")?
            .text()
            .await
            .context("While reading consumer groups response body")?;

        Ok(body)
    }
}
