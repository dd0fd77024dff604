use rwave::Signal;

/// Flat baseline with single-sample pulses every `samples_per_beat` samples.
/// Pulses start at `samples_per_beat` so the first sample is never a pulse.
pub fn pulse_train(
    num_samples: usize,
    sample_rate: f64,
    samples_per_beat: usize,
    baseline: f64,
    pulse: f64,
) -> Signal {
    let mut signal = Signal::with_capacity(num_samples);
    for i in 0..num_samples {
        let t = i as f64 / sample_rate;
        let amplitude = if i > 0 && i % samples_per_beat == 0 {
            pulse
        } else {
            baseline
        };
        signal.append(amplitude, t);
    }
    signal
}

/// Strictly monotonic amplitude ramp
pub fn ramp(num_samples: usize, start: f64, step: f64) -> Signal {
    (0..num_samples)
        .map(|i| rwave::Sample::new(start + step * i as f64, i as f64 * 0.01))
        .collect()
}

/// Render a signal in the ingestion format
pub fn trace_text(signal: &Signal) -> String {
    let mut text = String::from("amplitude,time\n");
    for sample in signal {
        text.push_str(&format!("{},{}\n", sample.amplitude, sample.time));
    }
    text
}
