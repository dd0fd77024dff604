use std::fmt::Write;

use super::{AnalysisReport, Formatter};

/// Human-readable summary block
pub struct TextFormatter {
    max_listed_peaks: usize,
}

impl TextFormatter {
    pub fn new(max_listed_peaks: usize) -> Self {
        Self { max_listed_peaks }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &AnalysisReport) -> String {
        let stats = &report.stats;
        let mut out = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(out, "=== Signal statistics: {} ===", report.source);
        let _ = writeln!(out, "Samples:        {}", stats.count);
        let _ = writeln!(out, "Min amplitude:  {:.3}", stats.min);
        let _ = writeln!(out, "Max amplitude:  {:.3}", stats.max);
        let _ = writeln!(out, "Mean amplitude: {:.3}", stats.mean);
        let _ = writeln!(out, "Duration:       {:.3} s", stats.duration);
        let _ = writeln!(out);
        let _ = writeln!(out, "=== Heart rate analysis ===");
        let _ = writeln!(
            out,
            "Filter alpha: {}  Peak threshold: {}",
            report.alpha, report.threshold
        );
        let _ = writeln!(out, "Peaks detected: {}", report.peak_count);

        for (i, t) in report.peaks.iter().take(self.max_listed_peaks).enumerate() {
            let _ = writeln!(out, "  Peak {}: t = {:.3} s", i + 1, t);
        }
        if report.peaks.len() > self.max_listed_peaks {
            let _ = writeln!(
                out,
                "  ... and {} more",
                report.peaks.len() - self.max_listed_peaks
            );
        }

        match report.heart_rate {
            Some(rate) => {
                let _ = writeln!(out, "Mean R-R interval: {:.4} s", rate.mean_rr_interval);
                let _ = write!(out, "Heart rate: {:.1} BPM", rate.bpm);
            }
            None => {
                let _ = write!(out, "Heart rate: n/a (need at least 2 peaks)");
            }
        }

        out
    }
}
