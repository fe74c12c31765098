use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kafka_dashboard::error::DashboardError;
use tracing::error;

#[derive(Debug)]
pub enum ApplicationError {
    Dashboard(DashboardError),
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Dashboard(e) => {
                error!("{e:?}");
                let status = match &e {
                    DashboardError::ConfigurationMissing { .. } => StatusCode::NOT_FOUND,
                    DashboardError::CollaboratorUnavailable(_)
                    | DashboardError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
                };
                (status, format!("{e}")).into_response()
            }
        }
    }
}
