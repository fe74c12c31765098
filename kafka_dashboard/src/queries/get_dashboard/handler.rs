use crate::clients::{
    BrokerDescriptor, ClusterMetadataClient, ConfigStore, ConsumerRpcClient,
    TopicPartitionDescriptor,
};
use crate::error::DashboardError;
use crate::offset_storage::OffsetStorageMode;
use crate::queries::get_dashboard::request::GetDashboardQueryInternal;
use crate::queries::get_dashboard::response::{
    BrokerGraph, DashboardPanel, GetDashboardQueryInternalResponse, GraphNode, BROKER_GRAPH_NAME,
    TRUNCATED_NODE_NAME,
};
use std::collections::HashMap;
use tracing::debug;

/// Aggregates one cluster's dashboard payload. Collaborators are injected at
/// construction; the aggregator holds no cross-request state, so one instance
/// serves concurrent requests.
pub struct DashboardAggregator<Metadata, Rpc, Config> {
    metadata: Metadata,
    rpc: Rpc,
    config: Config,
    graph_node_limit: usize,
}

impl<Metadata, Rpc, Config> DashboardAggregator<Metadata, Rpc, Config>
where
    Metadata: ClusterMetadataClient,
    Rpc: ConsumerRpcClient,
    Config: ConfigStore,
{
    pub fn new(metadata: Metadata, rpc: Rpc, config: Config, graph_node_limit: usize) -> Self {
        Self {
            metadata,
            rpc,
            config,
            graph_node_limit,
        }
    }

    /// Builds the broker topology and the summary panel for one cluster
    /// alias. All-or-nothing: the first failing read fails the request, no
    /// partial payload is returned.
    pub async fn get_dashboard(
        &self,
        query: GetDashboardQueryInternal,
    ) -> Result<GetDashboardQueryInternalResponse, DashboardError> {
        let kafka = self.broker_graph(&query.cluster).await?;
        let dashboard = self.summary_panel(&query.cluster).await?;

        debug!(
            "Aggregated dashboard for `{}`: {} brokers, {} graph nodes",
            query.cluster,
            dashboard.brokers,
            kafka.children.len()
        );

        Ok(GetDashboardQueryInternalResponse { kafka, dashboard })
    }

    async fn list_brokers(&self, cluster: &str) -> Result<Vec<BrokerDescriptor>, DashboardError> {
        let listing = self
            .metadata
            .list_brokers(cluster)
            .await
            .map_err(DashboardError::CollaboratorUnavailable)?;

        serde_json::from_str(&listing).map_err(|source| DashboardError::MalformedResponse {
            what: "broker listing",
            source,
        })
    }

    async fn broker_graph(&self, cluster: &str) -> Result<BrokerGraph, DashboardError> {
        let brokers = self.list_brokers(cluster).await?;

        let mut children = Vec::new();
        for (index, broker) in brokers.iter().enumerate() {
            // Past the display limit a single synthetic node stands in for
            // every remaining broker.
            if index > self.graph_node_limit {
                children.push(GraphNode {
                    name: TRUNCATED_NODE_NAME.to_owned(),
                });
                break;
            }
            children.push(GraphNode {
                name: format!("{}:{}", broker.host, broker.port),
            });
        }

        Ok(BrokerGraph {
            name: BROKER_GRAPH_NAME.to_owned(),
            children,
        })
    }

    async fn summary_panel(&self, cluster: &str) -> Result<DashboardPanel, DashboardError> {
        let addresses = self.config.coordination_addresses(cluster).ok_or_else(|| {
            DashboardError::ConfigurationMissing {
                key: format!("clusters.{cluster}.zookeepers"),
            }
        })?;
        let coordination_nodes = addresses.split(',').count();

        let listing = self
            .metadata
            .list_partitions(cluster)
            .await
            .map_err(DashboardError::CollaboratorUnavailable)?;
        let partitions: Vec<TopicPartitionDescriptor> =
            serde_json::from_str(&listing).map_err(|source| DashboardError::MalformedResponse {
                what: "partition listing",
                source,
            })?;

        // The broker count comes from its own listing read and stays exact
        // even when the topology above was truncated.
        let brokers = self.list_brokers(cluster).await?;

        let mode =
            self.config
                .offset_storage_mode()
                .ok_or_else(|| DashboardError::ConfigurationMissing {
                    key: "offset_storage".to_owned(),
                })?;
        let consumers = self
            .consumer_count(cluster, OffsetStorageMode::from(mode.as_str()))
            .await?;

        Ok(DashboardPanel {
            brokers: brokers.len(),
            topics: partitions.len(),
            coordination_nodes,
            consumers,
        })
    }

    /// Active consumer instances, from exactly one of the two sources: the
    /// remote service's global mapping when offsets live in the brokers, the
    /// cluster-scoped metadata mapping otherwise.
    async fn consumer_count(
        &self,
        cluster: &str,
        mode: OffsetStorageMode,
    ) -> Result<usize, DashboardError> {
        let groups = match mode {
            OffsetStorageMode::Kafka => {
                let mapping = self
                    .rpc
                    .global_consumer_groups()
                    .await
                    .map_err(DashboardError::CollaboratorUnavailable)?;

                serde_json::from_str::<HashMap<String, Vec<String>>>(&mapping).map_err(
                    |source| DashboardError::MalformedResponse {
                        what: "consumer group mapping",
                        source,
                    },
                )?
            }
            OffsetStorageMode::CoordinationService => self
                .metadata
                .list_consumer_groups(cluster)
                .await
                .map_err(DashboardError::CollaboratorUnavailable)?,
        };

        Ok(groups.values().map(Vec::len).sum())
    }
}
