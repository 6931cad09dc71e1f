//! `epgsplit` CLI — reconcile XMLTV feeds into one schedule file per channel.
//!
//! ## Usage
//!
//! ```sh
//! # One feed, channels.csv in the working directory, output next to it
//! epgsplit -s source.xml
//!
//! # Stack feeds: the first one listed is the most authoritative
//! epgsplit -s today.xml -s yesterday.xml -c channels.csv -o out/
//!
//! # Every *.xml in a directory, newest first, preferring Bulgarian titles
//! epgsplit --source-dir feeds/ --preferred-lang bg -o out/
//!
//! # Write a JSON audit report and show every collision
//! epgsplit -s source.xml --report report.json -v
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use epg_engine::{reconcile_lineup, ChannelRef, ChannelReport, IdentityScope, ReconcileOptions};
use epg_format::{
    decode_feed_file, read_channels_file, schedule_file_name, select_feeds, write_schedule,
};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Feed read when neither `--source` nor `--source-dir` is given.
const DEFAULT_SOURCE: &str = "source.xml";

#[derive(Parser)]
#[command(
    name = "epgsplit",
    version,
    about = "Reconcile XMLTV feeds into per-channel schedule files"
)]
struct Cli {
    /// Source feed; repeat to stack feeds, most authoritative first
    #[arg(short, long = "source", value_name = "FILE")]
    sources: Vec<PathBuf>,

    /// Directory whose *.xml feeds are read after --source ones, newest first
    #[arg(long, value_name = "DIR")]
    source_dir: Option<PathBuf>,

    /// Channel allow-list (CSV rows of `id,display name`)
    #[arg(short, long, default_value = "channels.csv", value_name = "FILE")]
    channels_file: PathBuf,

    /// Directory receiving one `<channel id>.xml` per channel
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    output_dir: PathBuf,

    /// Language tag preferred when titles come in several languages
    #[arg(long, value_name = "TAG")]
    preferred_lang: Option<String>,

    /// How far duplicate-slot detection reaches
    #[arg(long, value_enum, default_value_t = ScopeArg::Channel)]
    identity_scope: ScopeArg,

    /// Write a JSON report of per-channel counts and collisions
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    /// One registry per allow-list channel
    Channel,
    /// One registry for the whole run
    Run,
}

impl From<ScopeArg> for IdentityScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Channel => IdentityScope::Channel,
            ScopeArg::Run => IdentityScope::Run,
        }
    }
}

#[derive(Serialize)]
struct RunReport<'a> {
    feeds: &'a [PathBuf],
    files_written: &'a [PathBuf],
    skipped_channels: Vec<&'a ChannelRef>,
    channels: Vec<&'a ChannelReport>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let channels = read_channels_file(&cli.channels_file).with_context(|| {
        format!(
            "Failed to read channels file: {}",
            cli.channels_file.display()
        )
    })?;
    info!(count = channels.len(), "channels requested");

    let feeds = select_feeds(&explicit_sources(cli), cli.source_dir.as_deref())
        .context("Failed to select source feeds")?;

    let mut events = Vec::new();
    for path in &feeds {
        let feed = decode_feed_file(path)
            .with_context(|| format!("Failed to read feed: {}", path.display()))?;
        info!(
            feed = %path.display(),
            channels = feed.channels.len(),
            programmes = feed.programmes.len(),
            "feed loaded"
        );
        events.extend(feed.programmes);
    }

    let options = ReconcileOptions {
        preferred_language: cli.preferred_lang.clone(),
        identity_scope: cli.identity_scope.into(),
    };
    let schedules =
        reconcile_lineup(&channels, &events, &options).context("Failed to reconcile schedules")?;

    // Every file name is checked before the first write.
    for schedule in &schedules {
        schedule_file_name(&schedule.channel.id).with_context(|| {
            format!(
                "Invalid output file name for channel {}",
                schedule.channel.id
            )
        })?;
    }

    let mut written = Vec::with_capacity(schedules.len());
    for schedule in &schedules {
        let path = write_schedule(&cli.output_dir, schedule).with_context(|| {
            format!("Failed to write schedule for channel {}", schedule.channel.id)
        })?;
        debug!(path = %path.display(), events = schedule.events.len(), "schedule written");
        written.push(path);
    }

    if let Some(report_path) = &cli.report {
        let report = RunReport {
            feeds: &feeds,
            files_written: &written,
            skipped_channels: channels
                .iter()
                .filter(|c| schedules.iter().all(|s| s.channel != **c))
                .collect(),
            channels: schedules.iter().map(|s| &s.report).collect(),
        };
        write_report(report_path, &report)?;
    }

    info!("files written: {}", written.len());
    Ok(())
}

/// Explicit `--source` feeds, or the default feed when no source was given
/// at all.
fn explicit_sources(cli: &Cli) -> Vec<PathBuf> {
    if cli.sources.is_empty() && cli.source_dir.is_none() {
        vec![PathBuf::from(DEFAULT_SOURCE)]
    } else {
        cli.sources.clone()
    }
}

fn write_report(path: &Path, report: &RunReport<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize run report")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}
