// Library interface for fitrisk modules
// This allows integration tests to access the core functionality

pub mod config;
pub mod error;
pub mod import;
pub mod load;
pub mod logging;
pub mod models;
pub mod report;
pub mod risk;

// Re-export commonly used types for convenience
pub use error::{FitriskError, Result};
pub use import::{import_activities, CsvImporter, ImportError, ImportFormat};
pub use load::{assess_history, LoadSeries, LoadSeriesBuilder, LoadWindows};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use models::{Activity, WellnessEntry};
pub use report::TrainingSummary;
pub use risk::{estimate_injury_risk, RiskAssessment, RiskError, RiskLevel};
