use log::{info, warn};

use crate::config::PipelineConfig;
use crate::error::{EcgError, Result};
use crate::signal::Signal;
use crate::signal_processing::{
    HeartRate, SignalStats, apply_low_pass, detect_peaks, estimate_heart_rate, summarize,
};

/// Outcome of a full pipeline pass
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub stats: SignalStats,
    pub peaks: Vec<f64>,
    /// `None` when fewer than two peaks were detected
    pub heart_rate: Option<HeartRate>,
}

/// One processing session over a single recording.
///
/// Owns the raw signal, the most recent filtered signal and the most recent
/// peak list. A failing step leaves previously computed results untouched.
pub struct EcgSession {
    raw: Signal,
    filtered: Option<Signal>,
    peaks: Vec<f64>,
}

impl EcgSession {
    pub fn new(raw: Signal) -> Self {
        Self {
            raw,
            filtered: None,
            peaks: Vec::new(),
        }
    }

    pub fn raw(&self) -> &Signal {
        &self.raw
    }

    pub fn filtered(&self) -> Option<&Signal> {
        self.filtered.as_ref()
    }

    pub fn peaks(&self) -> &[f64] {
        &self.peaks
    }

    /// Rebuild the filtered signal, discarding any previous one
    pub fn apply_filter(&mut self, alpha: f64) -> Result<&Signal> {
        let filtered = apply_low_pass(&self.raw, alpha)?;
        Ok(&*self.filtered.insert(filtered))
    }

    /// Detect peaks in the filtered signal and store them as the session's peak list
    pub fn detect_peaks(&mut self, threshold: f64) -> Result<&[f64]> {
        let filtered = self.filtered.as_ref().ok_or(EcgError::UnfilteredSignal)?;
        self.peaks = detect_peaks(filtered, threshold);
        Ok(&self.peaks)
    }

    /// Estimate heart rate from the current peak list
    pub fn heart_rate(&self) -> Result<HeartRate> {
        estimate_heart_rate(&self.peaks)
    }

    pub fn statistics(&self) -> Result<SignalStats> {
        summarize(&self.raw)
    }

    /// Run statistics, filter, peak detection and heart-rate estimation.
    ///
    /// Too few peaks is not an error here: the result simply carries no rate.
    pub fn run(&mut self, config: &PipelineConfig) -> Result<PipelineResult> {
        let stats = self.statistics()?;
        self.apply_filter(config.filter.alpha)?;
        let peaks = self.detect_peaks(config.peaks.threshold)?.to_vec();

        let heart_rate = match self.heart_rate() {
            Ok(rate) => Some(rate),
            Err(EcgError::InsufficientPeaks { found }) => {
                warn!(
                    "Need at least 2 peaks to estimate heart rate, found {}",
                    found
                );
                None
            }
            Err(e) => return Err(e),
        };

        info!(
            "Processed {} samples: {} peaks, heart rate {}",
            self.raw.len(),
            peaks.len(),
            heart_rate.map_or("n/a".to_string(), |r| format!("{:.1} BPM", r.bpm))
        );

        Ok(PipelineResult {
            stats,
            peaks,
            heart_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_beat_signal() -> Signal {
        Signal::from(vec![
            (10.0, 0.0),
            (60.0, 0.1),
            (10.0, 0.2),
            (60.0, 0.3),
            (10.0, 0.4),
        ])
    }

    #[test]
    fn test_detect_before_filter() {
        let mut session = EcgSession::new(two_beat_signal());
        assert!(matches!(
            session.detect_peaks(50.0),
            Err(EcgError::UnfilteredSignal)
        ));
        assert!(session.peaks().is_empty());
    }

    #[test]
    fn test_empty_session() {
        let mut session = EcgSession::new(Signal::new());
        assert!(matches!(session.apply_filter(0.1), Err(EcgError::EmptySignal)));
        assert!(matches!(session.statistics(), Err(EcgError::EmptySignal)));
        assert!(session.filtered().is_none());
        assert!(matches!(
            session.run(&PipelineConfig::default()),
            Err(EcgError::EmptySignal)
        ));
    }

    #[test]
    fn test_refilter_replaces_previous() {
        let mut session = EcgSession::new(two_beat_signal());
        session.apply_filter(1.0).unwrap();
        assert_eq!(session.filtered(), Some(&two_beat_signal()));

        let smoothed = session.apply_filter(0.5).unwrap().clone();
        assert_eq!(smoothed.len(), 5);
        assert_eq!(session.filtered(), Some(&smoothed));
        assert_relative_eq!(smoothed.samples()[1].amplitude, 35.0);
    }

    #[test]
    fn test_pipeline_pass_through() {
        let mut session = EcgSession::new(two_beat_signal());
        let mut config = PipelineConfig::default();
        config.filter.alpha = 1.0;

        let result = session.run(&config).unwrap();
        assert_eq!(result.peaks, vec![0.1, 0.3]);
        let rate = result.heart_rate.unwrap();
        assert_relative_eq!(rate.bpm, 300.0, epsilon = 1e-9);
        assert_relative_eq!(result.stats.max, 60.0);
    }

    #[test]
    fn test_insufficient_peaks_keeps_session() {
        let mut session = EcgSession::new(Signal::from(vec![(0.0, 0.0), (90.0, 0.1), (0.0, 0.2)]));
        let mut config = PipelineConfig::default();
        config.filter.alpha = 1.0;

        let result = session.run(&config).unwrap();
        assert_eq!(result.peaks, vec![0.1]);
        assert!(result.heart_rate.is_none());
        assert!(matches!(
            session.heart_rate(),
            Err(EcgError::InsufficientPeaks { found: 1 })
        ));
        assert_eq!(session.peaks(), &[0.1]);
    }
}
