use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: i64,
    pub menu_items: usize,
    pub demand_model: String,
    pub pos_configured: bool,
}
