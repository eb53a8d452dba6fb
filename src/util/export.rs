//! Plain-text export of an intensity curve.

use crate::error::Result;
use crate::physics::InterferencePattern;
use std::io::Write;

/// Write the curve as `t,intensity` CSV with a header line.
pub fn write_samples<W: Write>(out: &mut W, pattern: &InterferencePattern) -> Result<()> {
    writeln!(out, "t,intensity")?;
    for (t, i) in pattern.points() {
        writeln!(out, "{:.3},{:.6}", t, i)?;
    }
    out.flush()?;
    Ok(())
}
