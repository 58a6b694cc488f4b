mod classify;
mod io;
mod registry;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use registry::Level;

const CHUNK_SIZE: usize = 500;

#[derive(Parser)]
#[command(name = "prodimap", about = "Map library CSV exports onto study-program ids")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map member institution names to a single program id
    Members {
        /// Path to the member CSV export
        #[arg(short, long)]
        input: PathBuf,
        /// Output CSV path (member_id,prodi_id rows)
        #[arg(short, long, default_value = "member_prodi_mapping.csv")]
        output: PathBuf,
        /// Log per-record decisions and list unmapped institution names
        #[arg(short, long)]
        verbose: bool,
    },
    /// Classify catalog titles into one or more program ids
    Catalog {
        /// Path to the bibliographic CSV export
        #[arg(short, long)]
        input: PathBuf,
        /// Output CSV path (biblio_id,prodi_id rows, one per matched id)
        #[arg(short, long, default_value = "classifications.csv")]
        output: PathBuf,
        /// Log per-record label sets
        #[arg(short, long)]
        verbose: bool,
    },
    /// Program registry overview
    Programs {
        /// Filter by degree level (S1, S2, D3, D4, PROFESI)
        #[arg(short, long)]
        level: Option<String>,
        /// Dump the registry as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose() { "prodimap=debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let t0 = Instant::now();

    let result = match cli.command {
        Commands::Members { input, output, verbose } => run_members(&input, &output, verbose),
        Commands::Catalog { input, output, .. } => run_catalog(&input, &output),
        Commands::Programs { level, json } => run_programs(level.as_deref(), json),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

impl Cli {
    fn verbose(&self) -> bool {
        matches!(
            self.command,
            Commands::Members { verbose: true, .. } | Commands::Catalog { verbose: true, .. }
        )
    }
}

// ── Member mapping ──

#[derive(Default)]
struct MemberStats {
    mapped: usize,
    unmapped: usize,
    per_program: BTreeMap<u32, usize>,
    unmapped_samples: BTreeSet<String>,
}

impl MemberStats {
    fn record(&mut self, inst_name: &str, prodi_id: Option<u32>) {
        match prodi_id {
            Some(id) => {
                self.mapped += 1;
                *self.per_program.entry(id).or_insert(0) += 1;
            }
            None => {
                self.unmapped += 1;
                if !inst_name.is_empty() && self.unmapped_samples.len() < 10 {
                    self.unmapped_samples.insert(inst_name.to_string());
                }
            }
        }
    }

    fn print(&self, total: usize) {
        let pct = |n: usize| n as f64 / total as f64 * 100.0;
        println!("\nTotal members: {}", total);
        println!("Mapped:   {} ({:.1}%)", self.mapped, pct(self.mapped));
        println!("Unmapped: {} ({:.1}%)", self.unmapped, pct(self.unmapped));

        if !self.per_program.is_empty() {
            println!("\nDistribution by program:");
            for (id, count) in &self.per_program {
                let name = registry::find(*id).map(|p| p.name).unwrap_or("?");
                println!(
                    "  {:>2} | {:<44} | {:>6} ({:.1}%)",
                    id,
                    name,
                    count,
                    *count as f64 / self.mapped as f64 * 100.0
                );
            }
        }
    }
}

fn run_members(input: &Path, output: &Path, verbose: bool) -> Result<()> {
    let members = io::read_members(input)?;
    if members.is_empty() {
        println!("No member rows found in {}", input.display());
        return Ok(());
    }
    println!("Loaded {} members", members.len());

    let pb = progress_bar(members.len());
    let mut mappings = Vec::new();
    let mut stats = MemberStats::default();

    for chunk in members.chunks(CHUNK_SIZE) {
        let results: Vec<Option<u32>> = chunk
            .par_iter()
            .map(|m| classify::find_program_id(&m.inst_name))
            .collect();

        for (member, prodi_id) in chunk.iter().zip(results) {
            debug!(
                member_id = %member.member_id,
                inst_name = %member.inst_name,
                prodi_id = ?prodi_id,
                "member mapped"
            );
            stats.record(&member.inst_name, prodi_id);
            if let Some(id) = prodi_id {
                mappings.push((member.member_id.clone(), id));
            }
        }
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    io::write_mappings(output, "member_id", &mappings)?;
    stats.print(members.len());

    if verbose && !stats.unmapped_samples.is_empty() {
        println!("\nSample of unmapped inst_name values:");
        for sample in &stats.unmapped_samples {
            println!("  - {:?}", sample);
        }
    }

    println!("\nOutput written to {}", output.display());
    Ok(())
}

// ── Catalog classification ──

fn run_catalog(input: &Path, output: &Path) -> Result<()> {
    let rows = io::read_catalog(input)?;
    if rows.is_empty() {
        println!("No catalog rows with id and title found in {}", input.display());
        return Ok(());
    }
    println!("Loaded {} rows with biblio_id, title and topic", rows.len());

    let pb = progress_bar(rows.len());
    let mut pair_rows = Vec::new();
    let mut label_counts: BTreeMap<usize, usize> = BTreeMap::new();

    for chunk in rows.chunks(CHUNK_SIZE) {
        let results: Vec<BTreeSet<u32>> = chunk
            .par_iter()
            .map(|r| classify::classify(&r.title, &r.topic))
            .collect();

        for (row, labels) in chunk.iter().zip(results) {
            debug!(biblio_id = %row.biblio_id, labels = ?labels, "record classified");
            *label_counts.entry(labels.len()).or_insert(0) += 1;
            for id in labels {
                pair_rows.push((row.biblio_id.clone(), id));
            }
        }
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    io::write_mappings(output, "biblio_id", &pair_rows)?;

    println!("\nInput rows:  {}", rows.len());
    println!("Output rows: {}", pair_rows.len());
    println!(
        "Multi-label ratio: {:.2}x",
        pair_rows.len() as f64 / rows.len() as f64
    );

    println!("\nLabels per record:");
    for (labels, count) in &label_counts {
        println!(
            "  {} program(s): {} records ({:.1}%)",
            labels,
            count,
            *count as f64 / rows.len() as f64 * 100.0
        );
    }

    println!("\nOutput written to {}", output.display());
    Ok(())
}

// ── Registry overview ──

#[derive(Serialize)]
struct ProgramView {
    id: u32,
    level: &'static str,
    name: &'static str,
    description: &'static str,
    aliases: &'static [&'static str],
    domains: Vec<&'static str>,
}

fn run_programs(level: Option<&str>, json: bool) -> Result<()> {
    let level = level
        .map(|s| {
            Level::parse(s)
                .ok_or_else(|| anyhow!("unknown level {:?}, expected S1, S2, D3, D4 or PROFESI", s))
        })
        .transpose()?;

    let programs: Vec<_> = registry::PROGRAMS
        .iter()
        .filter(|p| level.is_none_or(|l| p.level == l))
        .collect();

    if json {
        let views: Vec<ProgramView> = programs
            .iter()
            .map(|p| ProgramView {
                id: p.id,
                level: p.level.as_str(),
                name: p.name,
                description: p.description,
                aliases: p.aliases,
                domains: registry::domains_for(p.id),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if programs.is_empty() {
        println!("No programs at that level.");
        return Ok(());
    }

    println!(
        "{:>2} | {:<7} | {:<44} | {:>7} | {:<32}",
        "id", "level", "name", "aliases", "domains"
    );
    println!("{}", "-".repeat(102));
    for p in &programs {
        let domains = registry::domains_for(p.id).join(", ");
        println!(
            "{:>2} | {:<7} | {:<44} | {:>7} | {:<32}",
            p.id,
            p.level.as_str(),
            p.name,
            p.aliases.len(),
            truncate(&domains, 32)
        );
    }
    println!("\n{} programs", programs.len());
    Ok(())
}

// ── Helpers ──

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("=> "),
    );
    pb
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn duration_formatting() {
        use std::time::Duration;
        assert_eq!(format_duration(Duration::from_secs(5)), "5.0s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
        assert_eq!(format_duration(Duration::from_secs(3700)), "1h 1m 40s");
    }

    #[test]
    fn member_stats_samples_are_bounded() {
        let mut stats = MemberStats::default();
        for i in 0..25 {
            stats.record(&format!("UNIT {}", i), None);
        }
        stats.record("S1 GIZI", Some(21));
        assert_eq!(stats.unmapped, 25);
        assert_eq!(stats.mapped, 1);
        assert_eq!(stats.unmapped_samples.len(), 10);
        assert_eq!(stats.per_program.get(&21), Some(&1));
    }
}
