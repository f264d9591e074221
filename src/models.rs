use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FitriskError, Result};

/// A single logged training session
///
/// This is the record shape the surrounding application stores for each
/// workout: a free-form name, the session date, duration in minutes, and
/// optional calories, perceived intensity, and heart rate readings.
/// Duration doubles as the training-load proxy for risk analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for the session
    pub id: String,

    /// Free-form session name ("Morning Run", "Leg Day")
    pub name: String,

    /// Date the session took place
    pub date: NaiveDate,

    /// Session duration in minutes
    pub duration_minutes: Decimal,

    /// Calories burned (estimated)
    pub calories: Option<u16>,

    /// Perceived intensity on a 1-10 scale
    pub intensity: Option<u8>,

    /// Average heart rate in beats per minute
    pub heart_rate: Option<u16>,

    /// Optional free-form notes
    pub notes: Option<String>,
}

impl Activity {
    /// Create a new activity with a generated id
    pub fn new(name: impl Into<String>, date: NaiveDate, duration_minutes: Decimal) -> Self {
        Activity {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            date,
            duration_minutes,
            calories: None,
            intensity: None,
            heart_rate: None,
            notes: None,
        }
    }

    /// Validate field ranges
    ///
    /// Duration must be non-negative and intensity, when present, must be
    /// on the 1-10 scale.
    pub fn validate(&self) -> Result<()> {
        if self.duration_minutes < Decimal::ZERO {
            return Err(FitriskError::Validation(format!(
                "activity {} has negative duration {}",
                self.id, self.duration_minutes
            )));
        }

        if let Some(intensity) = self.intensity {
            if !(1..=10).contains(&intensity) {
                return Err(FitriskError::Validation(format!(
                    "activity {} has intensity {} outside 1-10",
                    self.id, intensity
                )));
            }
        }

        Ok(())
    }
}

/// Daily wellness self-report
///
/// The two scalar signals the risk estimator consumes alongside load
/// history. `sleep_hours` is expected in 0-24 and `soreness` in 0-10, but
/// neither is clamped here; the estimator documents how out-of-range
/// values extrapolate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellnessEntry {
    /// Hours slept last night
    pub sleep_hours: Decimal,

    /// Self-reported muscular soreness, 0 (none) to 10 (severe)
    pub soreness: Decimal,
}

impl WellnessEntry {
    pub fn new(sleep_hours: Decimal, soreness: Decimal) -> Self {
        WellnessEntry {
            sleep_hours,
            soreness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 23).unwrap()
    }

    #[test]
    fn test_new_activity_gets_unique_id() {
        let a = Activity::new("Morning Run", test_date(), dec!(45));
        let b = Activity::new("Morning Run", test_date(), dec!(45));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_validate_accepts_reasonable_activity() {
        let mut activity = Activity::new("Leg Day", test_date(), dec!(60));
        activity.intensity = Some(7);
        activity.calories = Some(450);
        assert!(activity.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_duration() {
        let activity = Activity::new("Bad Import", test_date(), dec!(-5));
        assert!(activity.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_scale_intensity() {
        let mut activity = Activity::new("Spin", test_date(), dec!(30));
        activity.intensity = Some(11);
        assert!(activity.validate().is_err());

        activity.intensity = Some(0);
        assert!(activity.validate().is_err());
    }

    #[test]
    fn test_activity_serde_round_trip() {
        let mut activity = Activity::new("Swim", test_date(), dec!(40));
        activity.heart_rate = Some(132);

        let json = serde_json::to_string(&activity).unwrap();
        let back: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(activity, back);
    }
}
