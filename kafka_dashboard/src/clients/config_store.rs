use std::collections::HashMap;

/// Process-wide configuration reads the aggregation depends on. Lookups
/// return `None` when the value was never configured; classifying that as an
/// error is left to the caller.
pub trait ConfigStore: Send + Sync {
    /// Comma-separated coordination-service address list for a cluster alias.
    fn coordination_addresses(&self, cluster: &str) -> Option<String>;

    /// Configured offset-storage mode, shared by all clusters.
    fn offset_storage_mode(&self) -> Option<String>;
}

/// In-memory registry filled from the application config at startup.
pub struct ClusterRegistry {
    offset_storage: String,
    coordination_addresses: HashMap<String, String>,
}

impl ClusterRegistry {
    pub fn new(offset_storage: String, coordination_addresses: HashMap<String, String>) -> Self {
        Self {
            offset_storage,
            coordination_addresses,
        }
    }
}

impl ConfigStore for ClusterRegistry {
    fn coordination_addresses(&self, cluster: &str) -> Option<String> {
        self.coordination_addresses.get(cluster).cloned()
    }

    fn offset_storage_mode(&self) -> Option<String> {
        Some(self.offset_storage.clone())
    }
}
