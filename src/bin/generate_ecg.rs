use anyhow::{Context, Result};
use clap::Parser;
use rwave::simulation::{EcgSynthConfig, generate_ecg};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate_ecg")]
#[command(about = "Generate synthetic ECG traces in the rwave input format")]
struct Args {
    /// Output file
    #[arg(default_value = "ECG.txt")]
    output: PathBuf,

    /// TOML synthesis configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Heart rate in BPM (CLI override)
    #[arg(long)]
    bpm: Option<f64>,

    /// Signal duration in seconds (CLI override)
    #[arg(short, long)]
    duration: Option<f64>,

    /// Sample rate in Hz (CLI override)
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Additive Gaussian noise standard deviation (CLI override)
    #[arg(long)]
    noise: Option<f64>,

    /// R-R interval jitter in seconds (CLI override)
    #[arg(long)]
    jitter: Option<f64>,

    /// Seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,
}

fn load_toml_config(path: &PathBuf) -> Result<EcgSynthConfig> {
    let content = fs::read_to_string(path).context("Failed to read config file")?;
    toml::from_str(&content).context("Failed to parse config file")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => load_toml_config(path)?,
        None => EcgSynthConfig::default(),
    };
    if let Some(bpm) = args.bpm {
        config.heart_rate_bpm = bpm;
    }
    if let Some(duration) = args.duration {
        config.duration_secs = duration;
    }
    if let Some(rate) = args.sample_rate {
        config.sample_rate_hz = rate;
    }
    if let Some(noise) = args.noise {
        config.noise_std = noise;
    }
    if let Some(jitter) = args.jitter {
        config.rr_jitter_secs = jitter;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate().context("Invalid synthesis parameters")?;
    let signal = generate_ecg(&config);

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "amplitude,time")?;
    for sample in &signal {
        writeln!(writer, "{:.6},{:.6}", sample.amplitude, sample.time)?;
    }
    writer.flush()?;

    println!(
        "Wrote {} samples ({:.1} s at {} BPM) to {}",
        signal.len(),
        config.duration_secs,
        config.heart_rate_bpm,
        args.output.display()
    );
    Ok(())
}
