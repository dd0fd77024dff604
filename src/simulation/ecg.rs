use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::constants::SECONDS_PER_MINUTE;
use crate::error::{EcgError, Result};
use crate::signal::Signal;

/// Beyond this many widths an R-wave bump contributes nothing measurable
const BUMP_SUPPORT_WIDTHS: f64 = 6.0;

/// Synthetic ECG trace parameters
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct EcgSynthConfig {
    pub sample_rate_hz: f64,
    pub duration_secs: f64,
    pub heart_rate_bpm: f64,
    /// Height of each R wave above the baseline
    pub r_amplitude: f64,
    pub baseline: f64,
    /// Gaussian sigma of the R wave in seconds
    pub r_width_secs: f64,
    /// Maximum uniform jitter applied to each R-R interval, in seconds
    pub rr_jitter_secs: f64,
    /// Standard deviation of additive Gaussian noise
    pub noise_std: f64,
    pub seed: Option<u64>,
}

impl Default for EcgSynthConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 250.0,
            duration_secs: 10.0,
            heart_rate_bpm: 72.0,
            r_amplitude: 200.0,
            baseline: 0.0,
            r_width_secs: 0.02,
            rr_jitter_secs: 0.0,
            noise_std: 0.0,
            seed: None,
        }
    }
}

impl EcgSynthConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_heart_rate(mut self, bpm: f64) -> Self {
        self.heart_rate_bpm = bpm;
        self
    }

    pub fn with_noise(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn with_jitter(mut self, rr_jitter_secs: f64) -> Self {
        self.rr_jitter_secs = rr_jitter_secs;
        self
    }

    /// Reject sample rates and durations that cannot describe a finite trace
    pub fn validate(&self) -> Result<()> {
        if !(self.sample_rate_hz.is_finite() && self.sample_rate_hz > 0.0) {
            return Err(EcgError::Config(format!(
                "sample rate must be finite and positive, got {}",
                self.sample_rate_hz
            )));
        }
        if !(self.duration_secs.is_finite() && self.duration_secs >= 0.0) {
            return Err(EcgError::Config(format!(
                "duration must be finite and non-negative, got {}",
                self.duration_secs
            )));
        }
        Ok(())
    }

    pub fn rr_interval_secs(&self) -> f64 {
        SECONDS_PER_MINUTE / self.heart_rate_bpm
    }
}

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// R-wave centre times within the configured duration.
///
/// The first beat falls half an interval in so it is never on the first sample.
pub fn beat_times(config: &EcgSynthConfig, rng: &mut ChaCha8Rng) -> Vec<f64> {
    let interval = config.rr_interval_secs();
    if !(interval.is_finite() && interval > 0.0) {
        return Vec::new();
    }

    let mut beats = Vec::new();
    let mut t = interval / 2.0;
    while t < config.duration_secs {
        beats.push(t);
        let jitter = if config.rr_jitter_secs > 0.0 {
            (rng.random::<f64>() * 2.0 - 1.0) * config.rr_jitter_secs
        } else {
            0.0
        };
        t += (interval + jitter).max(interval * 0.1);
    }
    beats
}

/// Generate a synthetic ECG: Gaussian R waves on a flat baseline plus optional noise
///
/// A config that fails [`EcgSynthConfig::validate`] yields an empty signal.
pub fn generate_ecg(config: &EcgSynthConfig) -> Signal {
    if config.validate().is_err() {
        return Signal::new();
    }

    let mut rng = create_rng(config.seed);
    let beats = beat_times(config, &mut rng);

    let num_samples = (config.duration_secs * config.sample_rate_hz).max(0.0) as usize;
    let support = BUMP_SUPPORT_WIDTHS * config.r_width_secs;
    let noise = if config.noise_std > 0.0 {
        Normal::new(0.0, config.noise_std).ok()
    } else {
        None
    };

    let mut signal = Signal::with_capacity(num_samples);
    let mut first_beat = 0;
    for i in 0..num_samples {
        let t = i as f64 / config.sample_rate_hz;

        while first_beat < beats.len() && beats[first_beat] < t - support {
            first_beat += 1;
        }

        let mut amplitude = config.baseline;
        for &beat in beats[first_beat..].iter().take_while(|&&b| b <= t + support) {
            let z = (t - beat) / config.r_width_secs;
            amplitude += config.r_amplitude * (-0.5 * z * z).exp();
        }

        if let Some(ref normal) = noise {
            amplitude += normal.sample(&mut rng);
        }

        signal.append(amplitude, t);
    }

    signal
}
