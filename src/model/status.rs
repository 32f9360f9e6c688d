use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::work_item::WorkItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    OnTrack,
    AtRisk,
    OffTrack,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 3] = [
        HealthStatus::OnTrack,
        HealthStatus::AtRisk,
        HealthStatus::OffTrack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::OnTrack => "on-track",
            HealthStatus::AtRisk => "at-risk",
            HealthStatus::OffTrack => "off-track",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict membership test against the three wire strings. Case-sensitive,
/// no trimming: `"At Risk"` and `"ON-TRACK"` are both invalid.
pub fn is_valid_status(value: &str) -> bool {
    HealthStatus::ALL.iter().any(|status| status.as_str() == value)
}

/// Computes the health status of a fetched item. Today this passes
/// `item.health_status` through unchanged; it is the seam where derived
/// rules (deadline proximity, blocker counts) would plug in, so the fetch
/// path routes every item through it rather than assuming identity.
pub fn classify(item: &WorkItem) -> HealthStatus {
    item.health_status
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Display configuration for a status cell in the roadmap table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusConfig {
    pub label: &'static str,
    pub color: &'static str,
    pub background_color: &'static str,
    pub severity: Severity,
}

pub fn config_for(status: HealthStatus) -> StatusConfig {
    match status {
        HealthStatus::OnTrack => StatusConfig {
            label: "On Track",
            color: "#0ed183",
            background_color: "#eefbf2",
            severity: Severity::Success,
        },
        HealthStatus::AtRisk => StatusConfig {
            label: "At Risk",
            color: "#ff514e",
            background_color: "#ffefed",
            severity: Severity::Error,
        },
        HealthStatus::OffTrack => StatusConfig {
            label: "Off Track",
            color: "#ffab26",
            background_color: "#fff7ed",
            severity: Severity::Warning,
        },
    }
}

/// Style for the status badge widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub background_color: &'static str,
    // Unused terminal-side; part of the badge contract.
    #[allow(dead_code)]
    pub class_name: &'static str,
}

/// Second lookup table, kept independent of `config_for` on purpose: the
/// label text disagrees with it ("On track", "At Risks") and which wording
/// is canonical is still an open design question, so neither table is
/// folded into the other. Unlike `config_for` this one accepts a missing
/// status and falls back to an "unknown" style.
pub fn badge_for(status: Option<HealthStatus>) -> BadgeStyle {
    match status {
        Some(HealthStatus::OnTrack) => BadgeStyle {
            label: "On track",
            color: "#0ed183",
            background_color: "#eefbf2",
            class_name: "health-status-on-track",
        },
        Some(HealthStatus::AtRisk) => BadgeStyle {
            label: "At Risks",
            color: "#ff514e",
            background_color: "#ffefed",
            class_name: "health-status-at-risk",
        },
        Some(HealthStatus::OffTrack) => BadgeStyle {
            label: "Off Track",
            color: "#ffab26",
            background_color: "#fff7ed",
            class_name: "health-status-off-track",
        },
        None => BadgeStyle {
            label: "Unknown",
            color: "#656b75",
            background_color: "#f3f3f3",
            class_name: "health-status-unknown",
        },
    }
}
