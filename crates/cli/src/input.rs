//! Boundary validation for user-supplied numbers
//!
//! Nothing negative or non-numeric reaches the core.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Ask one question and return the trimmed answer
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    if read == 0 {
        bail!("No input provided for: {}", question.trim_end_matches([':', ' ']));
    }
    Ok(line.trim().to_string())
}

/// Parse a whole number typed by the user
pub fn parse_number(label: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("{} must be a whole number, got {:?}", label, raw.trim()))
}

pub fn queue_capacity(value: i64) -> Result<usize> {
    if value < 1 {
        bail!("Maximum queue length must be at least 1, got {}", value);
    }
    usize::try_from(value).context("Maximum queue length is too large")
}

pub fn customer_count(value: i64) -> Result<u64> {
    if value < 0 {
        bail!("Number of customers cannot be negative, got {}", value);
    }
    Ok(value as u64)
}
