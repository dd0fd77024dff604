use super::{AnalysisReport, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}
