//! Library half of the `asod` command line.
//!
//! The binary is a thin shell over these modules so the integration suite can
//! drive decoding, classification and rendering without spawning a process.

pub mod config;
pub mod logging;
pub mod notation;
pub mod render;

use std::io::{self, Write};

use anyhow::{Context, Result};
use asod_guards::classify;

use crate::render::{OutputFormat, render};

/// Decode, classify and render one input.
pub fn classify_line(input: &str, format: OutputFormat) -> Result<String> {
    let value = notation::parse(input).with_context(|| format!("cannot decode {input}"))?;
    let classification = classify(&value).map_err(|err| {
        let method = err.method();
        anyhow::Error::new(err).context(format!(
            "capability method {method} failed while classifying {input}"
        ))
    })?;
    render(format, input, &classification).context("failed to render report")
}

/// Classify every non-blank input, writing one report line each.
///
/// Inputs are consumed lazily, so a line is reported before the next one is
/// read. Stops at the first input that cannot be read, decoded or classified.
/// Returns the number of lines written.
pub fn run_classify<I, W>(inputs: I, format: OutputFormat, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut written = 0;
    for input in inputs {
        let input = input.context("failed to read input")?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        let line = classify_line(input, format)?;
        writeln!(out, "{line}").context("failed to write report")?;
        out.flush().context("failed to write report")?;
        written += 1;
    }
    tracing::debug!(count = written, "classified inputs");
    Ok(written)
}
