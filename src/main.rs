//! `cmark-lists` - reformat the lists of Markdown files.
//!
//! Without file arguments, reads stdin and writes the result to stdout.
//! Files are rewritten in place, or only checked with `--check`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use tracing_subscriber::EnvFilter;

use cmark_lists::config::{VALID_BULLETS, VALID_ORDERED_MARKERS};
use cmark_lists::{Bullet, Config, OrderedMarker, format_markdown};

/// Reformat Markdown lists with consistent markers and indentation.
#[derive(Parser, Debug)]
#[command(name = "cmark-lists", version, about)]
struct Cli {
    /// Markdown files to format in place. Reads stdin when omitted.
    files: Vec<PathBuf>,

    /// Character to use for bullet list items (default: -).
    #[arg(long, value_parser = PossibleValuesParser::new(VALID_BULLETS))]
    bullet: Option<String>,

    /// Marker to use for ordered list items (default: .).
    #[arg(long, value_parser = PossibleValuesParser::new(VALID_ORDERED_MARKERS))]
    ordered_marker: Option<String>,

    /// Number ordered list items consecutively.
    #[arg(long)]
    number: bool,

    /// TOML options file; flags given on the command line take precedence.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Don't write anything; exit with status 1 if a file would change.
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading options from {}", path.display()))?;
                Config::from_toml_str(&text)
                    .with_context(|| format!("loading options from {}", path.display()))?
            }
            None => Config::default(),
        };
        if let Some(bullet) = &self.bullet {
            config = config.with_bullet(bullet.parse::<Bullet>()?);
        }
        if let Some(marker) = &self.ordered_marker {
            config = config.with_ordered_marker(marker.parse::<OrderedMarker>()?);
        }
        if self.number {
            config = config.with_number(true);
        }
        Ok(config)
    }
}

/// Format one file. Returns whether its content changed.
fn format_file(path: &Path, config: &Config, check: bool) -> Result<bool> {
    let original =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let formatted = format_markdown(&original, config)
        .with_context(|| format!("formatting {}", path.display()))?;
    if formatted == original {
        tracing::debug!(path = %path.display(), "unchanged");
        return Ok(false);
    }
    if check {
        tracing::info!(path = %path.display(), "would reformat");
    } else {
        fs::write(path, formatted).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "reformatted");
    }
    Ok(true)
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = cli.resolve_config()?;
    tracing::debug!(?config, "resolved options");

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).context("reading stdin")?;
        let formatted = format_markdown(&input, &config)?;
        if cli.check {
            return Ok(if formatted == input { ExitCode::SUCCESS } else { ExitCode::FAILURE });
        }
        io::stdout().write_all(formatted.as_bytes()).context("writing stdout")?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut changed = 0usize;
    for path in &cli.files {
        if format_file(path, &config, cli.check)? {
            changed += 1;
        }
    }
    if cli.check && changed > 0 {
        eprintln!("{changed} file(s) would be reformatted");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
