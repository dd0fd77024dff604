mod ecg;

pub use ecg::{EcgSynthConfig, beat_times, generate_ecg};
