use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::fs;

use fitrisk::import::import_activities;
use fitrisk::load::{assess_history, LoadWindows};
use fitrisk::models::{Activity, WellnessEntry};
use fitrisk::report::TrainingSummary;
use fitrisk::risk::RiskLevel;

/// Integration tests that exercise the complete import -> adapter ->
/// estimator -> report pipeline.

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn history_csv(dir: &tempfile::TempDir) -> std::path::PathBuf {
        // Four steady weeks at 60 minutes, then a three-session spike.
        let mut rows = String::from("name,date,duration_minutes,calories,intensity\n");
        for day in 1..=28 {
            rows.push_str(&format!("Base Ride,2024-08-{:02},60,400,5\n", day));
        }
        rows.push_str("Long Run,2024-08-29,120,800,8\n");
        rows.push_str("Intervals,2024-08-30,130,900,9\n");
        rows.push_str("Race,2024-08-31,110,750,9\n");

        let path = dir.path().join("history.csv");
        fs::write(&path, rows).unwrap();
        path
    }

    #[test]
    fn test_csv_history_to_high_risk_assessment() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = history_csv(&dir);

        let activities = import_activities(&path).unwrap();
        assert_eq!(activities.len(), 31);

        let windows = LoadWindows {
            recent_sessions: 3,
            chronic_sessions: 28,
        };
        let assessment = assess_history(
            &activities,
            WellnessEntry::new(dec!(5), dec!(8)),
            windows,
        )
        .unwrap();

        // Recent mean 120 against a baseline dominated by 60-minute
        // sessions puts ACWR well past the 1.5 spike cutoff.
        assert_eq!(assessment.load_risk, dec!(1));
        assert_eq!(assessment.level, RiskLevel::High);
    }

    #[test]
    fn test_csv_history_steady_state_is_low_risk() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut rows = String::from("date,duration_minutes\n");
        for day in 1..=14 {
            rows.push_str(&format!("2024-08-{:02},60\n", day));
        }
        let path = dir.path().join("steady.csv");
        fs::write(&path, rows).unwrap();

        let activities = import_activities(&path).unwrap();
        let assessment = assess_history(
            &activities,
            WellnessEntry::new(dec!(8), dec!(1)),
            LoadWindows::default(),
        )
        .unwrap();

        assert_eq!(assessment.acwr, dec!(1));
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn test_json_history_round_trips_through_pipeline() {
        let dir = tempfile::TempDir::new().unwrap();

        let activities: Vec<Activity> = (1..=10)
            .map(|day| {
                Activity::new(
                    format!("Session {}", day),
                    NaiveDate::from_ymd_opt(2024, 8, day).unwrap(),
                    dec!(45),
                )
            })
            .collect();

        let path = dir.path().join("history.json");
        fs::write(&path, serde_json::to_string(&activities).unwrap()).unwrap();

        let imported = import_activities(&path).unwrap();
        assert_eq!(imported, activities);

        let assessment = assess_history(
            &imported,
            WellnessEntry::new(dec!(7), dec!(3)),
            LoadWindows::default(),
        )
        .unwrap();
        assert_eq!(assessment.score, dec!(0.2475));
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn test_summary_matches_imported_history() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = history_csv(&dir);

        let mut activities = import_activities(&path).unwrap();
        activities.sort_by(|a, b| b.date.cmp(&a.date));

        let summary = TrainingSummary::from_activities(&activities);
        assert_eq!(summary.session_count, 31);
        assert_eq!(summary.total_minutes, dec!(2040));
        assert_eq!(summary.total_calories, 28 * 400 + 800 + 900 + 750);
        // The spike sessions dominate the end of the intensity trend
        assert_eq!(summary.intensity_trend[5], 9);
    }

    #[test]
    fn test_insufficient_history_is_reported_as_invalid_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "date,duration_minutes\n").unwrap();

        let activities = import_activities(&path).unwrap();
        let err = assess_history(
            &activities,
            WellnessEntry::new(dec!(8), dec!(0)),
            LoadWindows::default(),
        )
        .unwrap_err();

        let err = fitrisk::FitriskError::from(err);
        assert!(err.user_message().contains("Not enough workout history"));
    }
}
