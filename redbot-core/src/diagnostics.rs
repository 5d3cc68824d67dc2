// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Diagnostic line output.
//!
//! One line per control-loop iteration: the left, middle and right readings as decimal integers
//! separated by [`SEPARATOR`], terminated by CRLF so a plain serial terminal renders it correctly.
//!
//! ```text
//! 200    800    200
//! ```

use core::fmt::{self, Write};

use crate::motion::Motion;
use crate::sensors::SensorReading;

pub const SEPARATOR: &str = "    ";

/// Diagnostic line layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticFormat {
    /// Readings only.
    Readings,
    /// Readings followed by the motion chosen for them (`hold` when none was).
    Verbose,
}

/// Write one diagnostic line for `reading` to `out`.
pub fn write_line<W: Write>(
    out: &mut W,
    format: DiagnosticFormat,
    reading: SensorReading,
    motion: Option<Motion>,
) -> fmt::Result {
    write!(
        out,
        "{}{sep}{}{sep}{}",
        reading.left,
        reading.middle,
        reading.right,
        sep = SEPARATOR
    )?;

    if format == DiagnosticFormat::Verbose {
        let name = motion.map_or("hold", Motion::name);
        write!(out, "{}{}", SEPARATOR, name)?;
    }

    out.write_str("\r\n")
}
