use log::{info, trace};

use crate::constants::DEFAULT_PEAK_THRESHOLD;
use crate::signal::Signal;

/// Local-maximum peak detector for R-wave detection
///
/// A sample is a peak when its amplitude is strictly greater than both
/// immediate neighbours and strictly greater than the threshold. Only
/// interior samples are candidates, so the first and last samples are never
/// peaks and equal-amplitude plateaus never produce one.
#[derive(Debug, Clone, Copy)]
pub struct PeakDetector {
    threshold: f64,
}

impl PeakDetector {
    /// Create a new peak detector
    ///
    /// # Arguments
    /// * `threshold` - Minimum amplitude (exclusive) for a local maximum to count
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Check whether index `i` of `amplitudes` is a peak
    ///
    /// Returns `false` for the first and last index.
    pub fn is_peak(&self, amplitudes: &[f64], i: usize) -> bool {
        if i == 0 || i + 1 >= amplitudes.len() {
            return false;
        }
        let current = amplitudes[i];
        current > amplitudes[i - 1] && current > amplitudes[i + 1] && current > self.threshold
    }

    /// Find all peaks in a signal
    ///
    /// Returns the sample times of every peak, in scan (time) order.
    pub fn find_all_peaks(&self, signal: &Signal) -> Vec<f64> {
        let samples = signal.samples();
        let amplitudes: Vec<f64> = signal.amplitudes().collect();

        let peaks: Vec<f64> = (1..amplitudes.len().saturating_sub(1))
            .filter(|&i| self.is_peak(&amplitudes, i))
            .map(|i| {
                trace!(
                    "Peak at index {} (t = {}, amplitude = {})",
                    i, samples[i].time, samples[i].amplitude
                );
                samples[i].time
            })
            .collect();

        info!(
            "Detected {} peaks (threshold = {})",
            peaks.len(),
            self.threshold
        );
        peaks
    }
}

impl Default for PeakDetector {
    fn default() -> Self {
        Self::new(DEFAULT_PEAK_THRESHOLD)
    }
}

/// Detect peaks in an already-filtered signal
pub fn detect_peaks(filtered: &Signal, threshold: f64) -> Vec<f64> {
    PeakDetector::new(threshold).find_all_peaks(filtered)
}
