//! Injury risk estimation from training load and wellness signals
//!
//! # Sports Science Background
//!
//! The estimator is built around the acute:chronic workload ratio (ACWR),
//! a widely used overtraining and injury-risk proxy:
//!
//! - **Acute load**: average training volume over a short recent window
//!   (typically the most recent 3-7 sessions).
//! - **Chronic load**: average training volume over a longer baseline
//!   window (typically several weeks).
//! - **ACWR**: acute divided by chronic. Ratios well above 1.0 indicate a
//!   training-load spike relative to what the athlete is adapted to.
//!
//! Two wellness self-reports modulate the load signal:
//!
//! - **Sleep**: hours slept last night, compared against an 8-hour
//!   reference. The sleep term is NOT clamped: sleeping more than 8 hours
//!   produces a negative contribution that reduces the overall score, and
//!   very short sleep can push the term above 1. This mirrors the linear
//!   formula as designed; callers that want a bounded term must clamp on
//!   their side.
//! - **Soreness**: subjective muscular soreness on a 0 (none) to 10
//!   (severe) scale, normalized linearly. Also not clamped above 10.
//!
//! The three sub-risks are blended with fixed weights (load 0.5, sleep 0.3,
//! soreness 0.2) and the resulting score is stepped into a three-level
//! classification.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Risk estimation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// Input outside the estimator's valid domain (empty series,
    /// zero chronic baseline, negative load sample)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Three-level injury risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a risk score into a level
    ///
    /// Thresholds are exclusive on the high side: a score of exactly 0.7
    /// classifies as `Medium` and a score of exactly 0.4 as `Low`.
    pub fn from_score(score: Decimal) -> Self {
        if score > HIGH_THRESHOLD {
            RiskLevel::High
        } else if score > MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Short guidance string for display alongside the level
    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Training load is well tolerated",
            RiskLevel::Medium => "Elevated risk - monitor load and recovery",
            RiskLevel::High => "Training load spike detected - reduce load",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Risk assessment result with sub-risk breakdown
///
/// `score` is the weighted blend of the three sub-risks. It clusters in
/// [0, 1] for in-range inputs but is unbounded in principle because the
/// sleep and soreness terms are linear and unclamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Step classification of the score
    pub level: RiskLevel,

    /// Weighted risk score
    pub score: Decimal,

    /// Acute:chronic workload ratio the load sub-risk was derived from
    pub acwr: Decimal,

    /// Load sub-risk (step function of ACWR: 0.3, 0.6 or 1.0)
    pub load_risk: Decimal,

    /// Sleep sub-risk ((8 - hours) / 8, unclamped)
    pub sleep_risk: Decimal,

    /// Soreness sub-risk (soreness / 10, unclamped)
    pub soreness_risk: Decimal,
}

// Fixed model constants. These are part of the estimator's contract and
// deliberately not configurable.
const LOAD_WEIGHT: Decimal = dec!(0.5);
const SLEEP_WEIGHT: Decimal = dec!(0.3);
const SORENESS_WEIGHT: Decimal = dec!(0.2);

const ACWR_SPIKE: Decimal = dec!(1.5);
const ACWR_ELEVATED: Decimal = dec!(1.2);

const HIGH_THRESHOLD: Decimal = dec!(0.7);
const MEDIUM_THRESHOLD: Decimal = dec!(0.4);

const SLEEP_REFERENCE_HOURS: Decimal = dec!(8);
const SORENESS_SCALE: Decimal = dec!(10);

/// Estimate injury risk from load history and wellness signals
///
/// `recent_load` and `chronic_load` are ordered sequences of non-negative
/// per-session (or per-day) training loads; `sleep_hours` is hours slept
/// last night and `soreness` a 0-10 self-report.
///
/// # Errors
///
/// Returns [`RiskError::InvalidInput`] when either series is empty, when
/// the chronic mean is zero (the ratio is undefined), or when a load
/// sample is negative. Out-of-range sleep or soreness values are accepted;
/// the linear formulas extrapolate.
pub fn estimate_injury_risk(
    recent_load: &[Decimal],
    chronic_load: &[Decimal],
    sleep_hours: Decimal,
    soreness: Decimal,
) -> Result<RiskAssessment, RiskError> {
    let acute = mean_load(recent_load, "recent load")?;
    let chronic = mean_load(chronic_load, "chronic load")?;

    if chronic.is_zero() {
        return Err(RiskError::InvalidInput(
            "chronic load mean is zero, ACWR is undefined".to_string(),
        ));
    }

    let acwr = acute / chronic;

    let load_risk = if acwr > ACWR_SPIKE {
        Decimal::ONE
    } else if acwr > ACWR_ELEVATED {
        dec!(0.6)
    } else {
        dec!(0.3)
    };

    let sleep_risk = (SLEEP_REFERENCE_HOURS - sleep_hours) / SLEEP_REFERENCE_HOURS;
    let soreness_risk = soreness / SORENESS_SCALE;

    let score =
        LOAD_WEIGHT * load_risk + SLEEP_WEIGHT * sleep_risk + SORENESS_WEIGHT * soreness_risk;

    Ok(RiskAssessment {
        level: RiskLevel::from_score(score),
        score,
        acwr,
        load_risk,
        sleep_risk,
        soreness_risk,
    })
}

/// Mean of a non-empty series of non-negative load samples
fn mean_load(samples: &[Decimal], label: &str) -> Result<Decimal, RiskError> {
    if samples.is_empty() {
        return Err(RiskError::InvalidInput(format!("{} series is empty", label)));
    }

    if let Some(bad) = samples.iter().find(|s| s.is_sign_negative() && !s.is_zero()) {
        return Err(RiskError::InvalidInput(format!(
            "{} contains negative sample {}",
            label, bad
        )));
    }

    let sum: Decimal = samples.iter().copied().sum();
    Ok(sum / Decimal::from(samples.len()))
}
