use std::io::{self, Write};

use crate::signal::Signal;

/// Write the raw and (optionally) filtered signal as a three-column table.
///
/// The filtered column is left empty when no filter pass has run, or past
/// the end of a shorter filtered signal.
pub fn write_signal_table<W: Write>(
    writer: &mut W,
    raw: &Signal,
    filtered: Option<&Signal>,
) -> io::Result<()> {
    writeln!(writer, "time,raw_amplitude,filtered_amplitude")?;

    let mut filtered_iter = filtered.map(|f| f.iter());
    for sample in raw {
        write!(writer, "{:.6},{:.6},", sample.time, sample.amplitude)?;
        if let Some(f) = filtered_iter.as_mut().and_then(|it| it.next()) {
            write!(writer, "{:.6}", f.amplitude)?;
        }
        writeln!(writer)?;
    }

    writer.flush()
}
