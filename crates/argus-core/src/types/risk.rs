//! Risk level discretization.

use serde::{Deserialize, Serialize};

/// Discrete risk level of a node.
///
/// Levels are normally supplied alongside the continuous risk score; when only
/// a score is known, [`RiskLevel::from_score`] derives one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Informational, no meaningful risk.
    #[default]
    Info,
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
    /// Critical risk.
    Critical,
}

impl RiskLevel {
    /// Derive a risk level from a score in `[0, 1]`.
    ///
    /// Thresholds: `>= 0.8` critical, `>= 0.6` high, `>= 0.4` medium,
    /// `>= 0.2` low, anything else (including NaN) info.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::Critical
        } else if score >= 0.6 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else if score >= 0.2 {
            Self::Low
        } else {
            Self::Info
        }
    }

    /// Get the level name as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}
