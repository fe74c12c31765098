use crate::app_config::AppConfig;
use crate::dashboard_api;
use anyhow::Context;
use axum::routing::get;
use axum::Router;
use kafka_dashboard::clients::{ClusterRegistry, HttpConsumerRpcClient, KafkaMetadataClient};
use kafka_dashboard::cluster::ClusterConnection;
use kafka_dashboard::queries::get_dashboard::DashboardAggregator;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub type Aggregator =
    DashboardAggregator<KafkaMetadataClient, HttpConsumerRpcClient, ClusterRegistry>;

pub async fn run_until_stopped(config: AppConfig) -> Result<(), anyhow::Error> {
    let address = format!("{}:{}", config.host, config.port);

    let mut connections = HashMap::new();
    let mut coordination_addresses = HashMap::new();
    for (alias, cluster) in config.clusters {
        connections.insert(
            alias.clone(),
            ClusterConnection {
                brokers: cluster.brokers,
                security_protocol: cluster.security_protocol,
            },
        );
        coordination_addresses.insert(alias, cluster.zookeepers);
    }

    let aggregator = DashboardAggregator::new(
        KafkaMetadataClient::new(connections),
        HttpConsumerRpcClient::new(config.consumer_rpc_url),
        ClusterRegistry::new(config.offset_storage, coordination_addresses),
        config.graph_node_limit,
    );

    let app = Router::new()
        .route("/api/dashboard/{cluster}", get(dashboard_api::get_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(aggregator));

    info!("Listening {address}");
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .context("While binding listener")?;

    axum::serve(listener, app).await.context("While serving")?;

    Ok(())
}
