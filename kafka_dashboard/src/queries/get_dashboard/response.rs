/// Fixed label of the topology root.
pub const BROKER_GRAPH_NAME: &str = "Kafka Brokers";

/// Name of the synthetic node appended when the broker list is cut off.
pub const TRUNCATED_NODE_NAME: &str = "…";

#[derive(Debug, PartialEq)]
pub struct GetDashboardQueryInternalResponse {
    pub kafka: BrokerGraph,
    pub dashboard: DashboardPanel,
}

/// Display-ready broker topology. Children keep the order of the broker
/// listing; a truncation node, when present, is always last.
#[derive(Debug, PartialEq)]
pub struct BrokerGraph {
    pub name: String,
    pub children: Vec<GraphNode>,
}

#[derive(Debug, PartialEq)]
pub struct GraphNode {
    pub name: String,
}

#[derive(Debug, PartialEq)]
pub struct DashboardPanel {
    pub brokers: usize,
    pub topics: usize,
    pub coordination_nodes: usize,
    pub consumers: usize,
}
