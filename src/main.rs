use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use rwave::config::PipelineConfig;
use rwave::input::load_samples;
use rwave::output::{AnalysisReport, OutputFormat, create_formatter, write_signal_table};
use rwave::session::EcgSession;

#[derive(Parser, Debug)]
#[command(name = "rwave")]
#[command(about = "Estimate heart rate from an ECG trace", long_about = None)]
struct Args {
    /// ECG trace: header line, then `amplitude,time` per line
    input: PathBuf,

    /// TOML pipeline configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Low-pass smoothing factor (overrides config)
    #[arg(short, long)]
    alpha: Option<f64>,

    /// Peak amplitude threshold (overrides config)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Output format: text, json, csv
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write time, raw and filtered amplitude to this file
    #[arg(short = 'o', long)]
    signal_out: Option<PathBuf>,

    /// Peaks listed individually in text output
    #[arg(long, default_value_t = 10)]
    max_listed_peaks: usize,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match args.config {
        Some(ref path) => PipelineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(alpha) = args.alpha {
        config.filter.alpha = alpha;
    }
    if let Some(threshold) = args.threshold {
        config.peaks.threshold = threshold;
    }
    config.validate()?;

    let loaded = load_samples(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    if loaded.skipped_lines > 0 {
        log::warn!("{} line(s) could not be parsed", loaded.skipped_lines);
    }

    let mut session = EcgSession::new(loaded.signal);
    let result = session.run(&config)?;

    let source = args
        .input
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| args.input.display().to_string());
    let report = AnalysisReport::new(&source, &config, &result);

    let formatter = create_formatter(args.format, args.max_listed_peaks);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    println!("{}", formatter.format(&report));

    if let Some(ref path) = args.signal_out {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_signal_table(&mut writer, session.raw(), session.filtered())?;
        log::info!("Signals written to {}", path.display());
    }

    Ok(())
}
