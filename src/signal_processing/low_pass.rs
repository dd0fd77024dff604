use log::info;

use super::filter::Filter;
use crate::error::{EcgError, Result};
use crate::signal::{Sample, Signal};

/// Single-pole low-pass filter (exponential moving average).
///
/// `y[0] = x[0]`, then `y[n] = alpha * x[n] + (1 - alpha) * y[n-1]`.
/// Alpha is conventionally in (0, 1] but is not range-checked; `alpha = 1.0`
/// passes the input through unchanged.
pub struct LowPassFilter {
    alpha: f64,
    previous: Option<f64>,
}

impl LowPassFilter {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            previous: None,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Filter for LowPassFilter {
    fn process(&mut self, sample: f64) -> f64 {
        let output = match self.previous {
            None => sample,
            Some(prev) => self.alpha * sample + (1.0 - self.alpha) * prev,
        };
        self.previous = Some(output);
        output
    }
}

/// Smooth `signal` with an EMA and return a new signal of the same length.
///
/// Time values are copied unchanged. The input is never modified.
pub fn apply_low_pass(signal: &Signal, alpha: f64) -> Result<Signal> {
    if signal.is_empty() {
        return Err(EcgError::EmptySignal);
    }

    let mut filter = LowPassFilter::new(alpha);
    let filtered: Signal = signal
        .iter()
        .map(|s| Sample::new(filter.process(s.amplitude), s.time))
        .collect();

    info!("Low-pass filter applied (alpha = {})", alpha);
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp_signal() -> Signal {
        Signal::from(vec![(10.0, 0.0), (20.0, 0.1), (30.0, 0.2), (40.0, 0.3)])
    }

    #[test]
    fn test_first_output_equals_first_input() {
        for alpha in [0.01, 0.1, 0.5, 1.0, 1.7] {
            let filtered = apply_low_pass(&ramp_signal(), alpha).unwrap();
            assert_eq!(filtered.samples()[0].amplitude, 10.0);
        }
    }

    #[test]
    fn test_recurrence() {
        let filtered = apply_low_pass(&ramp_signal(), 0.5).unwrap();
        let amps: Vec<f64> = filtered.amplitudes().collect();

        // 10, 0.5*20+0.5*10, 0.5*30+0.5*15, 0.5*40+0.5*22.5
        assert_abs_diff_eq!(amps[1], 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(amps[2], 22.5, epsilon = 1e-12);
        assert_abs_diff_eq!(amps[3], 31.25, epsilon = 1e-12);
    }

    #[test]
    fn test_length_and_times_preserved() {
        let raw = ramp_signal();
        let filtered = apply_low_pass(&raw, 0.1).unwrap();

        assert_eq!(filtered.len(), raw.len());
        assert!(raw.times().eq(filtered.times()));
    }

    #[test]
    fn test_alpha_one_is_identity() {
        let raw = Signal::from(vec![(3.0, 0.0), (-7.5, 0.1), (42.0, 0.2), (0.25, 0.3)]);
        let filtered = apply_low_pass(&raw, 1.0).unwrap();
        assert_eq!(filtered, raw);
    }

    #[test]
    fn test_empty_signal() {
        let result = apply_low_pass(&Signal::new(), 0.1);
        assert!(matches!(result, Err(EcgError::EmptySignal)));
    }

    #[test]
    fn test_filter_starts_from_first_sample() {
        let mut filter = LowPassFilter::new(0.1);
        assert_eq!(filter.process(5.0), 5.0);
        assert_eq!(filter.alpha(), 0.1);
    }

    #[test]
    fn test_step_response() {
        let mut filter = LowPassFilter::new(0.25);
        let buffer: Vec<f64> = [0.0, 100.0, 100.0, 100.0]
            .into_iter()
            .map(|x| filter.process(x))
            .collect();

        assert_abs_diff_eq!(buffer[1], 25.0, epsilon = 1e-12);
        assert_abs_diff_eq!(buffer[2], 43.75, epsilon = 1e-12);
        assert!(buffer[3] < 100.0);
    }
}
