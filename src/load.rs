//! Load-series adapter between stored activity history and the estimator
//!
//! The risk estimator only understands two numeric series. This module owns
//! the mapping from logged [`Activity`] records to those series: sessions
//! are ordered newest first, the acute window takes the most recent
//! handful, and the chronic baseline takes a longer slice that includes the
//! acute period (the standard ACWR convention).
//!
//! Window sizes are dependency-injected through [`LoadWindows`] rather than
//! read from any ambient state, so callers with different data cadences can
//! tune them per call site.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Activity, WellnessEntry};
use crate::risk::{estimate_injury_risk, RiskAssessment, RiskError};

/// Session-count windows for the acute and chronic series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadWindows {
    /// Sessions in the acute (recent) window
    pub recent_sessions: usize,

    /// Sessions in the chronic baseline window
    pub chronic_sessions: usize,
}

impl Default for LoadWindows {
    fn default() -> Self {
        // Roughly one week acute vs. one month chronic for an athlete
        // training daily.
        LoadWindows {
            recent_sessions: 7,
            chronic_sessions: 28,
        }
    }
}

/// Acute and chronic load series ready for the estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSeries {
    /// Most recent session loads, newest first
    pub recent: Vec<Decimal>,

    /// Baseline window loads, newest first (includes the recent window)
    pub chronic: Vec<Decimal>,
}

/// Builds load series from activity history
pub struct LoadSeriesBuilder {
    windows: LoadWindows,
}

impl LoadSeriesBuilder {
    /// Create a builder with default windows
    pub fn new() -> Self {
        LoadSeriesBuilder {
            windows: LoadWindows::default(),
        }
    }

    /// Create a builder with custom windows
    pub fn with_windows(windows: LoadWindows) -> Self {
        LoadSeriesBuilder { windows }
    }

    /// Per-session training loads, newest session first
    ///
    /// Duration in minutes is the load proxy; activities are sorted by date
    /// descending regardless of input order. Ties keep input order.
    pub fn session_loads(&self, activities: &[Activity]) -> Vec<Decimal> {
        let mut sorted: Vec<&Activity> = activities.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.iter().map(|a| a.duration_minutes).collect()
    }

    /// Split activity history into acute and chronic load series
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] when the history is empty or
    /// when the acute window is configured larger than the chronic one
    /// (the baseline must contain the recent period). A history shorter
    /// than a window simply yields a shorter series; the estimator treats
    /// the available sessions as the whole window.
    pub fn split(&self, activities: &[Activity]) -> Result<LoadSeries, RiskError> {
        if self.windows.recent_sessions > self.windows.chronic_sessions {
            return Err(RiskError::InvalidInput(format!(
                "recent window ({} sessions) exceeds chronic window ({} sessions)",
                self.windows.recent_sessions, self.windows.chronic_sessions
            )));
        }

        if activities.is_empty() {
            return Err(RiskError::InvalidInput(
                "activity history is empty".to_string(),
            ));
        }

        let loads = self.session_loads(activities);

        let recent: Vec<Decimal> = loads
            .iter()
            .take(self.windows.recent_sessions)
            .copied()
            .collect();
        let chronic: Vec<Decimal> = loads
            .iter()
            .take(self.windows.chronic_sessions)
            .copied()
            .collect();

        debug!(
            recent_sessions = recent.len(),
            chronic_sessions = chronic.len(),
            "built load series from activity history"
        );

        Ok(LoadSeries { recent, chronic })
    }
}

impl Default for LoadSeriesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Assess injury risk directly from activity history and a wellness entry
///
/// Convenience wrapper that runs the adapter and the estimator in one call.
pub fn assess_history(
    activities: &[Activity],
    wellness: WellnessEntry,
    windows: LoadWindows,
) -> Result<RiskAssessment, RiskError> {
    let series = LoadSeriesBuilder::with_windows(windows).split(activities)?;
    estimate_injury_risk(
        &series.recent,
        &series.chronic,
        wellness.sleep_hours,
        wellness.soreness,
    )
}
