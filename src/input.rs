//! Loading of ECG traces from comma-separated text.
//!
//! Expected layout: one header line, then `amplitude,time` per line.
//! Trailing carriage returns and blank lines are tolerated; lines that do not
//! parse as two numbers are dropped with a warning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::error::{EcgError, Result};
use crate::signal::Signal;

/// Parsed trace plus bookkeeping about what the parser had to tolerate
#[derive(Debug, Clone)]
pub struct LoadedSignal {
    pub signal: Signal,
    /// Non-blank data lines that failed to parse
    pub skipped_lines: usize,
    /// Places where time decreases from one sample to the next
    pub non_monotonic: usize,
}

/// Parse one `amplitude,time` record
pub fn parse_line(line: &str) -> Option<(f64, f64)> {
    let (amplitude, time) = line.split_once(',')?;
    let amplitude = amplitude.trim().parse().ok()?;
    let time = time.trim().parse().ok()?;
    Some((amplitude, time))
}

/// Parse a header-prefixed `amplitude,time` trace from a reader.
///
/// Samples are kept in file order. Out-of-order or duplicated times are
/// passed through unchanged and only reported.
pub fn parse_samples<R: BufRead>(reader: R) -> Result<LoadedSignal> {
    // Split on raw bytes so a non-UTF-8 line is skipped rather than
    // aborting the whole load.
    let mut lines = reader.split(b'\n');

    match lines.next() {
        Some(header) => {
            header?;
        }
        None => return Err(EcgError::EmptyInput),
    }

    let mut signal = Signal::new();
    let mut skipped_lines = 0;

    for (index, line) in lines.enumerate() {
        let bytes = line?;
        // +2: one for the header, one for 1-based numbering
        let line_number = index + 2;

        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line,
            Err(_) => {
                warn!("Skipping line {}: not valid UTF-8", line_number);
                skipped_lines += 1;
                continue;
            }
        };
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some((amplitude, time)) => signal.append(amplitude, time),
            None => {
                warn!("Skipping unparseable line {}: {:?}", line_number, line);
                skipped_lines += 1;
            }
        }
    }

    let non_monotonic = signal.non_monotonic_steps();
    if non_monotonic > 0 {
        warn!(
            "Time decreases at {} place(s); samples kept in file order",
            non_monotonic
        );
    }

    info!("Loaded {} ECG samples", signal.len());

    Ok(LoadedSignal {
        signal,
        skipped_lines,
        non_monotonic,
    })
}

/// Load a trace from a file
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<LoadedSignal> {
    let file = File::open(path.as_ref())?;
    parse_samples(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_with_header() {
        let text = "amplitude,time\n10,0.0\n60,0.1\n10,0.2\n";
        let loaded = parse_samples(Cursor::new(text)).unwrap();

        assert_eq!(loaded.signal.len(), 3);
        assert_eq!(loaded.skipped_lines, 0);
        assert_eq!(loaded.signal.samples()[1].amplitude, 60.0);
        assert_eq!(loaded.signal.samples()[1].time, 0.1);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let text = "amp,t\r\n1.5,0.0\r\n\r\n2.5,0.5\r\n\n";
        let loaded = parse_samples(Cursor::new(text)).unwrap();

        assert_eq!(loaded.signal.len(), 2);
        assert_eq!(loaded.skipped_lines, 0);
        assert_eq!(loaded.signal.last().map(|s| s.time), Some(0.5));
    }

    #[test]
    fn test_bad_lines_skipped() {
        let text = "amp,t\n1,0\nabc,0.1\n2\n3, 0.3\n4,x\n";
        let loaded = parse_samples(Cursor::new(text)).unwrap();

        assert_eq!(loaded.signal.len(), 2);
        assert_eq!(loaded.skipped_lines, 3);
        assert_eq!(loaded.signal.samples()[1].amplitude, 3.0);
    }

    #[test]
    fn test_header_only() {
        let loaded = parse_samples(Cursor::new("amplitude,time\n")).unwrap();
        assert!(loaded.signal.is_empty());
    }

    #[test]
    fn test_invalid_utf8_data_line_skipped() {
        let bytes: &[u8] = b"amplitude,time\n10,0.0\n\xff\xfe,1\n60,0.1\n10,0.2\n";
        let loaded = parse_samples(Cursor::new(bytes)).unwrap();

        assert_eq!(loaded.signal.len(), 3);
        assert_eq!(loaded.skipped_lines, 1);
        let amps: Vec<f64> = loaded.signal.amplitudes().collect();
        assert_eq!(amps, vec![10.0, 60.0, 10.0]);
    }

    #[test]
    fn test_latin1_header_accepted() {
        // "se\xf1al,tiempo" is a Latin-1 encoded header
        let bytes: &[u8] = b"se\xf1al,tiempo\r\n10,0.0\r\n60,0.1\r\n";
        let loaded = parse_samples(Cursor::new(bytes)).unwrap();

        assert_eq!(loaded.signal.len(), 2);
        assert_eq!(loaded.skipped_lines, 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_samples(Cursor::new("")),
            Err(EcgError::EmptyInput)
        ));
    }

    #[test]
    fn test_non_monotonic_passed_through() {
        let text = "amp,t\n1,0.2\n2,0.1\n3,0.3\n";
        let loaded = parse_samples(Cursor::new(text)).unwrap();

        assert_eq!(loaded.non_monotonic, 1);
        let times: Vec<f64> = loaded.signal.times().collect();
        assert_eq!(times, vec![0.2, 0.1, 0.3]);
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("-12.5,3"), Some((-12.5, 3.0)));
        assert_eq!(parse_line(" 1 , 2 "), Some((1.0, 2.0)));
        assert_eq!(parse_line("1;2"), None);
        assert_eq!(parse_line("1,2,3"), None);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_samples("/nonexistent/ecg.txt"),
            Err(EcgError::Io(_))
        ));
    }
}
