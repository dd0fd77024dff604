pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod output;
pub mod session;
pub mod signal;
pub mod signal_processing;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::PipelineConfig;
pub use error::{EcgError, Result};
pub use session::{EcgSession, PipelineResult};
pub use signal::{Sample, Signal};
