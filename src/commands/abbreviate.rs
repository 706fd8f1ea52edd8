//! Path abbreviation command implementation
//!
//! Reads paths from CLI arguments, a file, or stdin and writes each one
//! shortened to the configured width, one per line.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::core::config::{
    clamp_max_len, resolve_max_len, MAX_LEN_ENV_VAR, NEGATIVE_MAX_LEN_WARNING,
};
use crate::utils::abbreviate;

/// Where the paths to abbreviate come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSource {
    /// Paths given directly on the command line
    Args(Vec<String>),
    /// A file with one path per line
    File(PathBuf),
    /// The reader passed to the command, one path per line
    Stdin,
}

/// Arguments for the abbreviate command
#[derive(Debug, Clone)]
pub struct AbbreviateArgs {
    pub source: PathSource,
    pub max_len: Option<i64>,
}

/// Counts reported after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbbreviateSummary {
    pub total: usize,
    pub shortened: usize,
}

impl AbbreviateSummary {
    /// Generates a one-line summary of the run
    pub fn generate_summary(&self) -> String {
        format!("✅ {} paths • {} shortened", self.total, self.shortened)
    }

    fn record(&mut self, original: &str, output: &str) {
        self.total += 1;
        if original != output {
            self.shortened += 1;
        }
    }
}

/// Handles the abbreviate command
///
/// `input` is only read for [`PathSource::Stdin`]. Warnings go to stderr so
/// that `out` carries nothing but paths.
pub fn handle_abbreviate_command<R: BufRead, W: Write>(
    args: AbbreviateArgs,
    input: R,
    out: &mut W,
) -> Result<AbbreviateSummary> {
    let (requested, env_ignored) = resolve_max_len(args.max_len);
    if env_ignored {
        eprintln!("⚠️  {MAX_LEN_ENV_VAR} is not a valid integer, using the default");
    }

    let (max_len, clamped) = clamp_max_len(requested);
    if clamped {
        eprintln!("{NEGATIVE_MAX_LEN_WARNING}");
    }

    let mut summary = AbbreviateSummary::default();

    match args.source {
        PathSource::Args(paths) => {
            for path in &paths {
                write_abbreviated(out, path, max_len, &mut summary)?;
            }
        }
        PathSource::File(file) => {
            let handle = File::open(&file)
                .with_context(|| format!("Failed to read paths from {}", file.display()))?;
            abbreviate_lines(BufReader::new(handle), out, max_len, &mut summary)
                .with_context(|| format!("Failed to read paths from {}", file.display()))?;
        }
        PathSource::Stdin => {
            abbreviate_lines(input, out, max_len, &mut summary)
                .context("Failed to read paths from stdin")?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(summary)
}

fn abbreviate_lines<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    max_len: usize,
    summary: &mut AbbreviateSummary,
) -> Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let path = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line.as_str());
        write_abbreviated(out, path, max_len, summary)?;
    }
}

fn write_abbreviated<W: Write>(
    out: &mut W,
    path: &str,
    max_len: usize,
    summary: &mut AbbreviateSummary,
) -> Result<()> {
    let short_path = abbreviate(path, max_len);
    writeln!(out, "{short_path}").context("Failed to write output")?;
    summary.record(path, &short_path);
    Ok(())
}
