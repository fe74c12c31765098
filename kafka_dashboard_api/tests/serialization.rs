extern crate kafka_dashboard_api;

use kafka_dashboard::queries::get_dashboard::{
    BrokerGraph, DashboardPanel, GetDashboardQueryInternalResponse, GraphNode, BROKER_GRAPH_NAME,
    TRUNCATED_NODE_NAME,
};
use kafka_dashboard_api::dashboard_api::dashboard_to_response;
use serde_json::json;

#[test]
fn dashboard_response_matches_the_wire_shape() -> Result<(), Box<dyn std::error::Error>> {
    let model = GetDashboardQueryInternalResponse {
        kafka: BrokerGraph {
            name: BROKER_GRAPH_NAME.to_owned(),
            children: vec![
                GraphNode {
                    name: "broker-0:9092".to_owned(),
                },
                GraphNode {
                    name: TRUNCATED_NODE_NAME.to_owned(),
                },
            ],
        },
        dashboard: DashboardPanel {
            brokers: 12,
            topics: 5,
            coordination_nodes: 2,
            consumers: 3,
        },
    };

    let serialized = serde_json::to_value(dashboard_to_response(model))?;

    assert_eq!(
        serialized,
        json!({
            "kafka": {
                "name": "Kafka Brokers",
                "children": [
                    { "name": "broker-0:9092" },
                    { "name": "…" },
                ],
            },
            "dashboard": {
                "brokers": 12,
                "topics": 5,
                "zks": 2,
                "consumers": 3,
            },
        })
    );

    Ok(())
}
