use kafka_dashboard::queries::get_dashboard::GetDashboardQueryInternalResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub kafka: BrokerGraphDto,
    pub dashboard: DashboardPanelDto,
}

#[derive(Debug, Serialize)]
pub struct BrokerGraphDto {
    pub name: String,
    pub children: Vec<GraphNodeDto>,
}

#[derive(Debug, Serialize)]
pub struct GraphNodeDto {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardPanelDto {
    pub brokers: usize,
    pub topics: usize,
    // Wire name kept for existing dashboard consumers.
    #[serde(rename = "zks")]
    pub coordination_nodes: usize,
    pub consumers: usize,
}

pub fn dashboard_to_response(model: GetDashboardQueryInternalResponse) -> DashboardResponse {
    let children = model
        .kafka
        .children
        .into_iter()
        .map(|node| GraphNodeDto { name: node.name })
        .collect();

    DashboardResponse {
        kafka: BrokerGraphDto {
            name: model.kafka.name,
            children,
        },
        dashboard: DashboardPanelDto {
            brokers: model.dashboard.brokers,
            topics: model.dashboard.topics,
            coordination_nodes: model.dashboard.coordination_nodes,
            consumers: model.dashboard.consumers,
        },
    }
}
