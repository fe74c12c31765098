use crate::cluster::ClusterConnection;
use anyhow::Context;
use async_trait::async_trait;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::util::Timeout;
use rdkafka::ClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Cluster facts needed by the dashboard. Broker and partition listings are
/// exchanged as serialized JSON arrays; consumer-group membership is a typed
/// mapping of group id to member ids, scoped to the given cluster alias.
#[async_trait]
pub trait ClusterMetadataClient: Send + Sync {
    async fn list_brokers(&self, cluster: &str) -> Result<String, anyhow::Error>;

    async fn list_partitions(&self, cluster: &str) -> Result<String, anyhow::Error>;

    async fn list_consumer_groups(
        &self,
        cluster: &str,
    ) -> Result<HashMap<String, Vec<String>>, anyhow::Error>;
}

/// One element of the serialized broker listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct BrokerDescriptor {
    pub host: String,
    pub port: u16,
}

/// One element of the serialized partition listing, one entry per
/// topic-partition combination.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopicPartitionDescriptor {
    pub topic: String,
    pub partition: i32,
}

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub struct KafkaMetadataClient {
    clusters: HashMap<String, ClusterConnection>,
}

impl KafkaMetadataClient {
    pub fn new(clusters: HashMap<String, ClusterConnection>) -> Self {
        Self { clusters }
    }

    fn connection(&self, cluster: &str) -> Result<ClusterConnection, anyhow::Error> {
        self.clusters
            .get(cluster)
            .cloned()
            .with_context(|| format!("Unknown cluster alias `{cluster}`"))
    }

    fn create_client(connection: &ClusterConnection) -> Result<StreamConsumer, anyhow::Error> {
        let client = ClientConfig::try_from(connection)
            .context("While building client config")?
            .create()
            .context("While creating kafka client")?;

        Ok(client)
    }

    async fn fetch_descriptors(
        &self,
        cluster: &str,
    ) -> Result<(Vec<BrokerDescriptor>, Vec<TopicPartitionDescriptor>), anyhow::Error> {
        let connection = self.connection(cluster)?;

        let handle = tokio::task::spawn_blocking(move || {
            let client = Self::create_client(&connection)?;

            let metadata = client
                .fetch_metadata(None, Timeout::After(FETCH_TIMEOUT))
                .context("While fetching metadata")?;

            let brokers = metadata
                .brokers()
                .iter()
                .map(|broker| BrokerDescriptor {
                    host: broker.host().to_owned(),
                    port: broker.port() as u16,
                })
                .collect::<Vec<_>>();

            let partitions = metadata
                .topics()
                .iter()
                .flat_map(|topic| {
                    topic.partitions().iter().map(move |partition| TopicPartitionDescriptor {
                        topic: topic.name().to_owned(),
                        partition: partition.id(),
                    })
                })
                .collect::<Vec<_>>();

            Result::<_, anyhow::Error>::Ok((brokers, partitions))
        });

        let descriptors = handle.await.context("While joining blocking handle")??;
        Ok(descriptors)
    }
}

#[async_trait]
impl ClusterMetadataClient for KafkaMetadataClient {
    async fn list_brokers(&self, cluster: &str) -> Result<String, anyhow::Error> {
        let (brokers, _) = self.fetch_descriptors(cluster).await?;
        serde_json::to_string(&brokers).context("While serializing broker listing")
    }

    async fn list_partitions(&self, cluster: &str) -> Result<String, anyhow::Error> {
        let (_, partitions) = self.fetch_descriptors(cluster).await?;
        serde_json::to_string(&partitions).context("While serializing partition listing")
    }

    async fn list_consumer_groups(
        &self,
        cluster: &str,
    ) -> Result<HashMap<String, Vec<String>>, anyhow::Error> {
        let connection = self.connection(cluster)?;

        let handle = tokio::task::spawn_blocking(move || {
            let client = Self::create_client(&connection)?;

            let group_list = client
                .fetch_group_list(None, Timeout::After(FETCH_TIMEOUT))
                .context("While fetching consumer group list")?;

            let mut groups = HashMap::new();
            for group in group_list.groups() {
                let members = group
                    .members()
                    .iter()
                    .map(|member| member.id().to_owned())
                    .collect::<Vec<_>>();

                groups.insert(group.name().to_owned(), members);
            }

            Result::<_, anyhow::Error>::Ok(groups)
        });

        let groups = handle.await.context("While joining blocking handle")??;
        Ok(groups)
    }
}
