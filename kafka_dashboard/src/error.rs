use thiserror::Error;

/// Failures surfaced by dashboard aggregation. None of these are recovered
/// inside the aggregator; a failed sub-call fails the whole request.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("collaborator call failed: {0}")]
    CollaboratorUnavailable(anyhow::Error),

    #[error("malformed {what} in collaborator response")]
    MalformedResponse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing configuration value `{key}`")]
    ConfigurationMissing { key: String },
}
