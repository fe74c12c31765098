use crate::dashboard_api::converter::{dashboard_to_response, DashboardResponse};
use crate::error::ApplicationError;
use crate::startup::Aggregator;
use axum::extract::{Path, State};
use axum::Json;
use kafka_dashboard::queries::get_dashboard::GetDashboardQueryInternal;
use std::sync::Arc;
use tracing::debug;

#[tracing::instrument(skip_all)]
pub async fn get_dashboard(
    State(aggregator): State<Arc<Aggregator>>,
    Path(cluster): Path<String>,
) -> Result<Json<DashboardResponse>, ApplicationError> {
    let query = GetDashboardQueryInternal { cluster };
    debug!("New request: {:?}", query);

    let response = aggregator
        .get_dashboard(query)
        .await
        .map_err(ApplicationError::Dashboard)?;

    Ok(Json(dashboard_to_response(response)))
}
