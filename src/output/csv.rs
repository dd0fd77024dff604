use super::{AnalysisReport, Formatter};

/// One summary row per recording
pub struct CsvFormatter;

/// Quote a free-text field if it would otherwise break the row
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, report: &AnalysisReport) -> String {
        let mean_rr = report
            .heart_rate
            .map_or(String::new(), |r| format!("{:.6}", r.mean_rr_interval));
        let bpm = report
            .heart_rate
            .map_or(String::new(), |r| format!("{:.2}", r.bpm));
        format!(
            "{},{},{},{},{:.6},{:.6},{:.6},{:.6},{},{},{}",
            escape_field(&report.source),
            report.generated,
            report.alpha,
            report.threshold,
            report.stats.min,
            report.stats.max,
            report.stats.mean,
            report.stats.duration,
            report.peak_count,
            mean_rr,
            bpm
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("source,ts,alpha,threshold,min,max,mean,duration,peak_count,mean_rr,bpm")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_rate, sample_report};

    #[test]
    fn test_row_matches_header() {
        let formatter = CsvFormatter;
        let row = formatter.format(&sample_report(Some(sample_rate())));
        let header = formatter.header().unwrap();

        assert_eq!(row.split(',').count(), header.split(',').count());
        assert!(row.ends_with(",2,0.200000,300.00"));
    }

    #[test]
    fn test_source_with_comma_is_quoted() {
        let mut report = sample_report(Some(sample_rate()));
        report.source = "ecg,run \"2\".txt".to_string();

        let row = CsvFormatter.format(&report);
        assert!(row.starts_with("\"ecg,run \"\"2\"\".txt\","));
        assert!(row.ends_with(",2,0.200000,300.00"));
        assert_eq!(escape_field("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_row_without_rate() {
        let row = CsvFormatter.format(&sample_report(None));
        assert!(row.ends_with(",2,,"));
    }
}
