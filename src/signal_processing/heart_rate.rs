use log::{info, warn};
use serde::Serialize;

use crate::constants::{MIN_PEAKS_FOR_RATE, SECONDS_PER_MINUTE};
use crate::error::{EcgError, Result};

/// Average heart rate derived from R-R intervals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeartRate {
    /// Beats per minute
    pub bpm: f64,
    /// Mean R-R interval in seconds
    pub mean_rr_interval: f64,
    /// Number of peaks the estimate was computed from
    pub peak_count: usize,
}

/// Successive differences between peak times (the R-R intervals)
pub fn rr_intervals(peaks: &[f64]) -> Vec<f64> {
    peaks.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Estimate the average heart rate from peak times in seconds.
///
/// `bpm = 60 / mean(R-R)`. Intervals are assumed positive; zero or negative
/// spacing yields an infinite or negative rate rather than an error.
pub fn estimate_heart_rate(peaks: &[f64]) -> Result<HeartRate> {
    if peaks.len() < MIN_PEAKS_FOR_RATE {
        return Err(EcgError::InsufficientPeaks { found: peaks.len() });
    }

    let intervals = rr_intervals(peaks);
    let mean_rr_interval = intervals.iter().sum::<f64>() / intervals.len() as f64;
    let bpm = SECONDS_PER_MINUTE / mean_rr_interval;

    info!(
        "Heart rate: {:.1} BPM (mean R-R {:.4} s over {} peaks)",
        bpm,
        mean_rr_interval,
        peaks.len()
    );

    Ok(HeartRate {
        bpm,
        mean_rr_interval,
        peak_count: peaks.len(),
    })
}

/// Like [`estimate_heart_rate`] but yields 0.0 BPM when there are too few peaks.
pub fn heart_rate_or_zero(peaks: &[f64]) -> f64 {
    match estimate_heart_rate(peaks) {
        Ok(rate) => rate.bpm,
        Err(e) => {
            warn!("{}", e);
            0.0
        }
    }
}
