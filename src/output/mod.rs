mod csv;
mod json;
mod table;
mod text;

use chrono::Utc;
use serde::Serialize;

use crate::config::PipelineConfig;
use crate::session::PipelineResult;
use crate::signal_processing::{HeartRate, SignalStats};

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::table::write_signal_table;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Everything the report layer renders for one recording
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub generated: String,
    pub alpha: f64,
    pub threshold: f64,
    pub stats: SignalStats,
    pub peak_count: usize,
    pub peaks: Vec<f64>,
    pub heart_rate: Option<HeartRate>,
}

impl AnalysisReport {
    pub fn new(source: &str, config: &PipelineConfig, result: &PipelineResult) -> Self {
        Self {
            source: source.to_string(),
            generated: iso8601_timestamp(),
            alpha: config.filter.alpha,
            threshold: config.peaks.threshold,
            stats: result.stats,
            peak_count: result.peaks.len(),
            peaks: result.peaks.clone(),
            heart_rate: result.heart_rate,
        }
    }
}

pub trait Formatter {
    fn format(&self, report: &AnalysisReport) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, max_listed_peaks: usize) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(max_listed_peaks)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

pub fn iso8601_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
