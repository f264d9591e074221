//! Training summary and terminal rendering
//!
//! Computes the aggregate numbers the dashboard shows (session count, total
//! calories, intensity trend over the last six sessions) and renders
//! activities and risk assessments for the terminal.

use colored::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

use crate::models::Activity;
use crate::risk::{RiskAssessment, RiskLevel};

/// Number of sessions in the intensity trend sparkline
const TREND_SESSIONS: usize = 6;

/// Aggregate training summary over an activity slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Number of sessions in the slice
    pub session_count: usize,

    /// Total estimated calories across sessions
    pub total_calories: u32,

    /// Total training minutes across sessions
    pub total_minutes: Decimal,

    /// Perceived intensity of the last six sessions, oldest first,
    /// zero-padded on the left when history is short
    pub intensity_trend: Vec<u8>,
}

impl TrainingSummary {
    /// Build a summary from activities ordered newest first
    pub fn from_activities(activities: &[Activity]) -> Self {
        let total_calories = activities
            .iter()
            .map(|a| a.calories.unwrap_or(0) as u32)
            .sum();

        let total_minutes = activities.iter().map(|a| a.duration_minutes).sum();

        let mut intensity_trend: Vec<u8> = activities
            .iter()
            .take(TREND_SESSIONS)
            .map(|a| a.intensity.unwrap_or(0))
            .collect();
        intensity_trend.reverse();
        while intensity_trend.len() < TREND_SESSIONS {
            intensity_trend.insert(0, 0);
        }

        TrainingSummary {
            session_count: activities.len(),
            total_calories,
            total_minutes,
            intensity_trend,
        }
    }
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Session")]
    name: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Minutes")]
    minutes: String,
    #[tabled(rename = "Calories")]
    calories: String,
    #[tabled(rename = "Intensity")]
    intensity: String,
    #[tabled(rename = "HR")]
    heart_rate: String,
}

impl From<&Activity> for ActivityRow {
    fn from(activity: &Activity) -> Self {
        let opt = |v: Option<u16>| v.map(|x| x.to_string()).unwrap_or_else(|| "-".to_string());
        ActivityRow {
            name: activity.name.clone(),
            date: activity.date.format("%Y-%m-%d").to_string(),
            minutes: activity.duration_minutes.to_string(),
            calories: opt(activity.calories),
            intensity: activity
                .intensity
                .map(|i| i.to_string())
                .unwrap_or_else(|| "-".to_string()),
            heart_rate: opt(activity.heart_rate),
        }
    }
}

/// Render up to `limit` activities as a table, newest first
pub fn render_activity_table(activities: &[Activity], limit: usize) -> String {
    let rows: Vec<ActivityRow> = activities.iter().take(limit).map(ActivityRow::from).collect();
    Table::new(rows).to_string()
}

fn level_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::High => Color::Red,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Color::Cyan,
    }
}

/// Render the risk banner with level, score and guidance
pub fn render_risk_banner(assessment: &RiskAssessment) -> String {
    let color = level_color(assessment.level);
    format!(
        "{}\n{}  (score {:.4}, ACWR {:.2})\n{}",
        "INJURY RISK".color(color).bold(),
        assessment.level.to_string().color(color).bold(),
        assessment.score,
        assessment.acwr,
        assessment.level.description().dimmed()
    )
}

#[derive(Tabled)]
struct SubRiskRow {
    #[tabled(rename = "Signal")]
    signal: &'static str,
    #[tabled(rename = "Sub-risk")]
    value: String,
    #[tabled(rename = "Weight")]
    weight: &'static str,
}

/// Render the sub-risk breakdown behind a score
pub fn render_subrisk_table(assessment: &RiskAssessment) -> String {
    let rows = vec![
        SubRiskRow {
            signal: "Training load",
            value: assessment.load_risk.to_string(),
            weight: "0.5",
        },
        SubRiskRow {
            signal: "Sleep",
            value: assessment.sleep_risk.to_string(),
            weight: "0.3",
        },
        SubRiskRow {
            signal: "Soreness",
            value: assessment.soreness_risk.to_string(),
            weight: "0.2",
        },
    ];
    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn activity(day: u32, minutes: Decimal, calories: u16, intensity: u8) -> Activity {
        let mut a = Activity::new(
            format!("session_{}", day),
            NaiveDate::from_ymd_opt(2024, 9, day).unwrap(),
            minutes,
        );
        a.calories = Some(calories);
        a.intensity = Some(intensity);
        a
    }

    #[test]
    fn test_summary_totals() {
        let activities = vec![
            activity(3, dec!(30), 200, 5),
            activity(2, dec!(45), 350, 7),
            activity(1, dec!(60), 400, 4),
        ];

        let summary = TrainingSummary::from_activities(&activities);
        assert_eq!(summary.session_count, 3);
        assert_eq!(summary.total_calories, 950);
        assert_eq!(summary.total_minutes, dec!(135));
    }

    #[test]
    fn test_intensity_trend_is_zero_padded_and_oldest_first() {
        // Newest-first input of 3 sessions; trend shows oldest first with
        // three leading zeros.
        let activities = vec![
            activity(3, dec!(30), 200, 6),
            activity(2, dec!(45), 350, 7),
            activity(1, dec!(60), 400, 4),
        ];

        let summary = TrainingSummary::from_activities(&activities);
        assert_eq!(summary.intensity_trend, vec![0, 0, 0, 4, 7, 6]);
    }

    #[test]
    fn test_intensity_trend_caps_at_six_sessions() {
        let activities: Vec<Activity> = (1..=9)
            .rev()
            .map(|day| activity(day, dec!(30), 100, day as u8))
            .collect();

        let summary = TrainingSummary::from_activities(&activities);
        assert_eq!(summary.intensity_trend.len(), 6);
        // Newest session (day 9) lands at the end of the trend
        assert_eq!(*summary.intensity_trend.last().unwrap(), 9);
    }

    #[test]
    fn test_summary_of_empty_history() {
        let summary = TrainingSummary::from_activities(&[]);
        assert_eq!(summary.session_count, 0);
        assert_eq!(summary.total_calories, 0);
        assert_eq!(summary.intensity_trend, vec![0; 6]);
    }

    #[test]
    fn test_risk_banner_shows_level_score_and_acwr() {
        // High-risk spike: score 0.7725, ACWR 2.0
        let assessment = crate::risk::estimate_injury_risk(
            &[dec!(120), dec!(130), dec!(110)],
            &[dec!(60), dec!(60), dec!(60)],
            dec!(5),
            dec!(8),
        )
        .unwrap();

        let banner = render_risk_banner(&assessment);
        assert!(banner.contains("INJURY RISK"));
        assert!(banner.contains("High"));
        assert!(banner.contains("0.7725"));
        assert!(banner.contains("2.00"));
        assert!(banner.contains(assessment.level.description()));
    }

    #[test]
    fn test_subrisk_table_lists_all_signals() {
        let assessment = crate::risk::estimate_injury_risk(
            &[dec!(60)],
            &[dec!(60)],
            dec!(7),
            dec!(3),
        )
        .unwrap();

        let table = render_subrisk_table(&assessment);
        assert!(table.contains("Training load"));
        assert!(table.contains("Sleep"));
        assert!(table.contains("Soreness"));
        assert!(table.contains("0.3"));
        assert!(table.contains("0.125"));
    }

    #[test]
    fn test_activity_table_renders_missing_fields_as_dash() {
        let mut a = activity(1, dec!(30), 200, 5);
        a.heart_rate = None;
        let table = render_activity_table(&[a], 10);
        assert!(table.contains("session_1"));
        assert!(table.contains('-'));
    }
}
