use rolling_stats::Stats;
use serde::Serialize;

use crate::error::{EcgError, Result};
use crate::signal::Signal;

/// Amplitude and duration summary of a raw signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    /// Time of the last sample. Recordings are assumed to start at t = 0,
    /// so this is not `last - first`.
    pub duration: f64,
}

/// Summarize amplitude extrema, mean and duration of `signal`
pub fn summarize(signal: &Signal) -> Result<SignalStats> {
    let last = signal.last().ok_or(EcgError::EmptySignal)?;

    let mut stats: Stats<f64> = Stats::new();
    for amplitude in signal.amplitudes() {
        stats.update(amplitude);
    }

    Ok(SignalStats {
        count: stats.count,
        min: stats.min,
        max: stats.max,
        mean: stats.mean,
        std_dev: stats.std_dev,
        duration: last.time,
    })
}
