use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use galaxy_tools::{
    emit_tables, format_pretty, generate_steam_user_id, inspect_snapshot, render_json,
    InspectReport, SnapshotClient, DEFAULT_SERVER,
};
use glob::Pattern;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "galaxy-tools",
    version,
    about = "Fetch, decode, and inspect galaxy leaderboard snapshots"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the latest snapshot if it is new, then decode it into tables.
    Sync {
        /// Publishing server base URL.
        #[arg(long, env = "GALAXY_SERVER", default_value = DEFAULT_SERVER)]
        server: String,
        /// Directory holding downloaded snapshots.
        #[arg(long, default_value = ".")]
        cache_dir: PathBuf,
        /// Directory receiving the emitted tables.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Use this retrieval id instead of asking the server for the latest.
        #[arg(long)]
        retrieval_id: Option<String>,
        /// HTTP timeout in seconds.
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
    },
    /// Decode a snapshot file.
    Decode {
        /// Path to the decompressed snapshot bytes.
        snapshot_file: PathBuf,
        /// Directory receiving the emitted tables (csv format only).
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Csv)]
        format: DecodeFormat,
    },
    /// Inspect snapshot structure and sizes.
    Inspect {
        /// Path to a snapshot file or a directory of snapshots.
        snapshot_path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected snapshots.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected snapshots (after sorting).
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Csv,
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Sync {
            server,
            cache_dir,
            out_dir,
            retrieval_id,
            timeout_secs,
        } => {
            let client = SnapshotClient::new(&server, Duration::from_secs(timeout_secs))?;
            let retrieval_id = match retrieval_id {
                Some(id) => id,
                None => {
                    let user_id = generate_steam_user_id(&mut rand::thread_rng());
                    info!(user_id, "generated user id");
                    client.login_header(user_id)?.retrieval_id
                }
            };
            info!(%retrieval_id, "latest snapshot");
            let cached = client.ensure_cached(&retrieval_id, &cache_dir)?;
            if cached.downloaded {
                info!(path = %cached.path.display(), "new snapshot downloaded");
            }
            if let Err(err) = decode_to_tables(&cached.path, &out_dir) {
                error!(
                    path = %cached.path.display(),
                    "decode failed; cached file kept for the next run"
                );
                return Err(err);
            }
        }
        Command::Decode {
            snapshot_file,
            out_dir,
            format,
        } => match format {
            DecodeFormat::Csv => decode_to_tables(&snapshot_file, &out_dir)?,
            DecodeFormat::Json => {
                let snapshot = read_snapshot(&snapshot_file)?;
                let json = render_json(&snapshot).context("serialize json")?;
                println!("{json}");
            }
            DecodeFormat::Pretty => {
                let snapshot = read_snapshot(&snapshot_file)?;
                print!("{}", format_pretty(&snapshot));
            }
        },
        Command::Inspect {
            snapshot_path,
            glob,
            sort,
            limit,
        } => {
            if snapshot_path.is_dir() {
                let entries = collect_snapshot_entries(&snapshot_path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    let bytes = fs::read(&entry.path)
                        .with_context(|| format!("read snapshot {}", entry.path.display()))?;
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    match inspect_snapshot(&bytes, &wire::Limits::default()) {
                        Ok(report) => print_inspect_report(&report),
                        Err(err) => println!("decode failed: {err:#}"),
                    }
                }
            } else {
                let bytes = fs::read(&snapshot_path)
                    .with_context(|| format!("read snapshot {}", snapshot_path.display()))?;
                let report = inspect_snapshot(&bytes, &wire::Limits::default())?;
                print_inspect_report(&report);
            }
        }
    }
    Ok(())
}

fn read_snapshot(path: &Path) -> Result<codec::Snapshot> {
    let bytes = fs::read(path).with_context(|| format!("read snapshot {}", path.display()))?;
    codec::decode_snapshot(&bytes, &wire::Limits::default())
        .with_context(|| format!("decode snapshot {}", path.display()))
}

fn decode_to_tables(path: &Path, out_dir: &Path) -> Result<()> {
    info!(path = %path.display(), "parsing snapshot into tables");
    let snapshot = read_snapshot(path)?;
    let files = emit_tables(&snapshot, out_dir)?;
    info!(
        leaderboard = %files.leaderboard.display(),
        summary = %files.summary.display(),
        worlds = %files.worlds.display(),
        entries = snapshot.leaderboard.entries.len(),
        worlds_count = snapshot.aggregates.worlds.len(),
        "tables written"
    );
    Ok(())
}

struct SnapshotEntry {
    path: PathBuf,
    size: u64,
}

fn collect_snapshot_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<SnapshotEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(SnapshotEntry { path, size });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<SnapshotEntry>,
    sort: Option<InspectSort>,
) -> Vec<SnapshotEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}

fn print_inspect_report(report: &InspectReport) {
    println!(
        "format: {} size: {} bytes trailing: {} bytes",
        report.format_version, report.byte_len, report.trailing_bytes
    );
    println!(
        "  leaderboard ({}): {} entries",
        report.leaderboard_version, report.leaderboard_entries
    );
    println!(
        "  summary ({}): {} players",
        report.summary_version, report.total_players
    );
    println!(
        "  world aggregates ({}): {} worlds",
        report.aggregates_version, report.world_count
    );
}
