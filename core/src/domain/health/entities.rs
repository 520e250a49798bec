use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sizes of the read-only data loaded at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub fruits: usize,
    pub intents: usize,
    pub examples: usize,
}
