#![allow(dead_code, unused_imports)]

pub mod generate;

pub use generate::{pulse_train, ramp, trace_text};
