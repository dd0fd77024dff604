//! Default pipeline parameters and unit conversions.

/// Default EMA smoothing factor. Small values smooth more aggressively.
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Default peak amplitude threshold.
///
/// Tuned to the amplitude scale of the recordings this tool was written for;
/// it is not derived from signal statistics.
pub const DEFAULT_PEAK_THRESHOLD: f64 = 50.0;

pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Minimum number of peaks needed to form one R-R interval.
pub const MIN_PEAKS_FOR_RATE: usize = 2;
