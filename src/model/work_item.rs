use serde::{Deserialize, Serialize};

use crate::model::status::HealthStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub module_name: String,
    pub owner: String,
    pub pm: String,
    pub health_status: HealthStatus,
    pub team_working: String,
    /// Hierarchical path label (e.g. "O1 > KR2 > Initiative"); kept opaque,
    /// nothing on this side parses its structure.
    pub okr_hierarchy: String,
}

/// Response envelope of the execution-items endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchResult {
    pub items: Vec<WorkItem>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

impl FetchResult {
    /// A lone `page` without `limit` (or the reverse) counts as not paginated.
    pub fn pagination(&self) -> Option<(u64, u64)> {
        match (self.page, self.limit) {
            (Some(page), Some(limit)) => Some((page, limit)),
            _ => None,
        }
    }
}
