use std::fmt::{Display, Formatter};

/// Where consumer offsets are tracked for the monitored clusters. Selects
/// which collaborator answers the active-consumer count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OffsetStorageMode {
    Kafka,
    CoordinationService,
}

impl From<&str> for OffsetStorageMode {
    /// Total conversion: only the exact value `kafka-backend` selects the
    /// broker-tracked strategy, every other configured string falls back to
    /// the coordination-service strategy.
    fn from(value: &str) -> Self {
        match value {
            "kafka-backend" => OffsetStorageMode::Kafka,
            _ => OffsetStorageMode::CoordinationService,
        }
    }
}

impl Display for OffsetStorageMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OffsetStorageMode::Kafka => write!(f, "kafka-backend"),
            OffsetStorageMode::CoordinationService => write!(f, "coordination-service-backend"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_kafka_backend_value_selects_kafka() {
        assert_eq!(OffsetStorageMode::from("kafka-backend"), OffsetStorageMode::Kafka);

        for other in ["coordination-service-backend", "zookeeper", "KAFKA-BACKEND", ""] {
            assert_eq!(
                OffsetStorageMode::from(other),
                OffsetStorageMode::CoordinationService
            );
        }
    }
}
