//! CLI output formatting and digit file persistence.
//!
//! Digit files hold the decimal value, most significant digit first, with no
//! separators or trailing newline.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

use fftmul_core::constants::PREVIEW_DIGITS;
use fftmul_core::digits::Digits;
use tracing::debug;

/// Format a value for display, abbreviating long ones unless `verbose`.
#[must_use]
pub fn format_result(value: &Digits, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 2 * PREVIEW_DIGITS {
        format!(
            "{}...{} ({} digits)",
            &s[..PREVIEW_DIGITS],
            &s[s.len() - PREVIEW_DIGITS..],
            s.len()
        )
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write a value to `path`.
pub fn write_digits(path: &Path, value: &Digits) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let bytes: Vec<u8> = value.as_slice().iter().rev().map(|&d| b'0' + d).collect();
    out.write_all(&bytes)?;
    out.flush()?;
    debug!(path = %path.display(), digits = value.len(), "wrote digit file");
    Ok(())
}

/// Read a value written by [`write_digits`] (or any decimal text file).
pub fn read_digits(path: &Path) -> io::Result<Digits> {
    let mut text = String::new();
    File::open(path)?.read_to_string(&mut text)?;
    Digits::parse(&text).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {e}", path.display()),
        )
    })
}
