pub mod filter;
pub mod heart_rate;
pub mod low_pass;
pub mod peak_detector;
pub mod statistics;

pub use filter::Filter;
pub use heart_rate::{HeartRate, estimate_heart_rate, heart_rate_or_zero, rr_intervals};
pub use low_pass::{LowPassFilter, apply_low_pass};
pub use peak_detector::{PeakDetector, detect_peaks};
pub use statistics::{SignalStats, summarize};
