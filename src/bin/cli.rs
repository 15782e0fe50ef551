//! sortrank CLI - Sorting algorithm playground
//!
//! Usage:
//!   sortrank run [--size N] [--seed S] [--pattern P] [--algos a,b] [--current A] [--json]
//!   sortrank rank <records.json> [--current A] [--json]
//!   sortrank compare <records.json> <candidate> <baseline>
//!   sortrank list

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use sortrank::{
    AlgorithmId, Direction, MetricsRecord, PlaygroundConfig, RawRecord, RunSet, ScoreRow,
    Scoreboard, Tier, compare, parse_algorithm_list, run_playground,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;

/// Sorting algorithm playground
#[derive(Parser)]
#[command(name = "sortrank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort one generated input with each algorithm and rank the runs
    Run {
        /// Elements in the input (overrides SORTRANK_SIZE)
        #[arg(short, long)]
        size: Option<usize>,

        /// Seed for input generation (overrides SORTRANK_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Input shape: random, nearly-sorted, reversed, few-unique, sorted
        #[arg(short, long)]
        pattern: Option<String>,

        /// Comma separated algorithms to run (default: all)
        #[arg(short, long)]
        algos: Option<String>,

        /// Algorithm the others are compared against
        #[arg(short, long)]
        current: Option<String>,

        /// Print the scoreboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rank previously recorded runs from a JSON file
    Rank {
        /// JSON array of run records
        records: PathBuf,

        /// Algorithm the others are compared against
        #[arg(short, long)]
        current: Option<String>,

        /// Print the scoreboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare two recorded runs
    Compare {
        /// JSON array of run records
        records: PathBuf,

        /// Algorithm being compared
        candidate: String,

        /// Baseline algorithm
        baseline: String,
    },
    /// List the algorithm catalogue
    List,
}

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            size,
            seed,
            pattern,
            algos,
            current,
            json,
        } => handle_run(size, seed, pattern, algos, current, json),
        Commands::Rank {
            records,
            current,
            json,
        } => handle_rank(&records, current, json),
        Commands::Compare {
            records,
            candidate,
            baseline,
        } => handle_compare(&records, &candidate, &baseline),
        Commands::List => {
            handle_list();
            Ok(())
        }
    };

    match result {
        Ok(()) => process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
            process::exit(exit_code_for(&e));
        }
    }
}

/// Records file problems are invalid input; everything else, including bad
/// flag values, is a general error.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<RecordsFileError>().is_some() {
        EXIT_INVALID_INPUT
    } else {
        EXIT_ERROR
    }
}

fn handle_run(
    size: Option<usize>,
    seed: Option<u64>,
    pattern: Option<String>,
    algos: Option<String>,
    current: Option<String>,
    json: bool,
) -> Result<()> {
    let mut config = PlaygroundConfig::from_env()?;

    if let Some(size) = size {
        config.size = size;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(pattern) = pattern {
        config.pattern = pattern.parse()?;
    }
    if let Some(algos) = algos {
        let list = parse_algorithm_list(&algos)?;
        if list.is_empty() {
            bail!("No algorithms selected");
        }
        config.algorithms = Some(list);
    }
    if let Some(current) = current {
        config.current = Some(current.parse()?);
    }

    if !json {
        println!(
            "{} {} elements, {} input, seed {}",
            "Input:".bright_cyan(),
            config.size,
            config.pattern,
            config.seed
        );
    }

    let runs = run_playground(&config)?;
    let board = Scoreboard::build(&runs, config.current);

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print_scoreboard(&board);
    }

    Ok(())
}

fn handle_rank(path: &Path, current: Option<String>, json: bool) -> Result<()> {
    let runs = load_runs(path)?;
    let current = current.map(|c| c.parse::<AlgorithmId>()).transpose()?;

    if let Some(id) = current {
        if runs.get(id).is_none() {
            log::warn!("Current algorithm {} has no record in {}", id, path.display());
        }
    }

    let board = Scoreboard::build(&runs, current);

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print_scoreboard(&board);
    }

    Ok(())
}

fn handle_compare(path: &Path, candidate: &str, baseline: &str) -> Result<()> {
    let runs = load_runs(path)?;
    let candidate: AlgorithmId = candidate.parse()?;
    let baseline: AlgorithmId = baseline.parse()?;

    let Some(candidate_record) = runs.get(candidate) else {
        bail!("No record for {} in {}", candidate, path.display());
    };
    let Some(baseline_record) = runs.get(baseline) else {
        bail!("No record for {} in {}", baseline, path.display());
    };

    match compare(candidate_record, baseline_record) {
        Some(result) => {
            let label = match result.direction {
                Direction::Faster => result.to_string().bright_green().to_string(),
                Direction::Slower => result.to_string().bright_red().to_string(),
            };
            println!("{} is {} than {}", candidate, label, baseline);
        }
        None => {
            println!(
                "{} No comparison ({} vs {}: unmeasured run or same algorithm)",
                "Info:".bright_cyan(),
                candidate,
                baseline
            );
        }
    }

    Ok(())
}

fn handle_list() {
    println!("{:<10} {:<9} {}", "Algorithm", "Tier", "Complexity");
    for id in AlgorithmId::ALL {
        println!(
            "{:<10} {} {}",
            id.name(),
            color_tier(id.tier()),
            id.complexity()
        );
    }
}

// ============================================================================
// Record Loading
// ============================================================================

/// A records file that could not be turned into a run set.
#[derive(Debug, Error)]
enum RecordsFileError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read records file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse records file: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn load_runs(path: &Path) -> std::result::Result<RunSet, RecordsFileError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => RecordsFileError::NotFound(path.to_path_buf()),
        _ => RecordsFileError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let runs = parse_runs(&text).map_err(|source| RecordsFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Loaded {} record(s) from {}", runs.len(), path.display());
    Ok(runs)
}

/// Parses a JSON array of raw records, skipping the ones that fail validation
/// or disagree with the set's input size.
fn parse_runs(text: &str) -> serde_json::Result<RunSet> {
    let raw: Vec<RawRecord> = serde_json::from_str(text)?;

    let mut runs = RunSet::new();
    for entry in raw {
        let record = match MetricsRecord::try_from(entry) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping record: {}", e);
                continue;
            }
        };
        if let Err(e) = runs.insert(record) {
            log::warn!("Skipping record: {}", e);
        }
    }

    Ok(runs)
}

// ============================================================================
// Output
// ============================================================================

fn print_scoreboard(board: &Scoreboard) {
    if board.rows.is_empty() {
        println!("{} No measured runs to rank", "Info:".bright_cyan());
        return;
    }

    println!();
    println!(
        "{:>4}  {:<10} {:<9} {:>12} {:>12} {:>12}  {}",
        "Rank", "Algorithm", "Tier", "Swaps", "Comparisons", "Time", "vs current"
    );

    for row in &board.rows {
        print_row(row);
    }

    if !board.pending.is_empty() {
        let names: Vec<&str> = board.pending.iter().map(|id| id.name()).collect();
        println!();
        println!("{} {}", "Not measured:".bright_yellow(), names.join(", "));
    }
}

fn print_row(row: &ScoreRow) {
    let name = if row.is_current {
        format!("{}*", row.algorithm)
    } else {
        row.algorithm.to_string()
    };

    let versus = match row.comparison {
        Some(c) if c.direction == Direction::Faster => c.to_string().bright_green().to_string(),
        Some(c) => c.to_string().bright_red().to_string(),
        None => String::new(),
    };

    let rank = format!("{:>4}", format!("#{}", row.rank));
    let rank = if row.rank == 1 {
        rank.bright_green().bold().to_string()
    } else {
        rank
    };

    println!(
        "{}  {:<10} {} {:>12} {:>12} {:>12}  {}",
        rank,
        name,
        color_tier(row.tier),
        row.swaps,
        row.comparisons,
        format_millis(row.time_ms),
        versus
    );
}

fn color_tier(tier: Tier) -> String {
    let label = format!("{:<9}", tier.to_string());
    match tier {
        Tier::Fast => label.bright_green().to_string(),
        Tier::Moderate => label.bright_yellow().to_string(),
        Tier::Slow => label.bright_red().to_string(),
    }
}

// ============================================================================
// Utilities
// ============================================================================

fn format_millis(ms: f64) -> String {
    if ms < 0.001 {
        format!("{:.0}ns", ms * 1_000_000.0)
    } else if ms < 1.0 {
        format!("{:.1}μs", ms * 1_000.0)
    } else if ms < 1_000.0 {
        format!("{:.2}ms", ms)
    } else {
        format!("{:.3}s", ms / 1_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED_RECORDS: &str = r#"[
        {"algorithm": "quick", "swaps": 12, "comparisons": 40, "time_ms": 1.5, "input_size": 20},
        {"algorithm": "merge", "swaps": -4, "comparisons": 40, "time_ms": 2.0},
        {"algorithm": "bogo", "swaps": 1, "comparisons": 1, "time_ms": 9.0},
        {"algorithm": "heap", "swaps": 30, "comparisons": 60, "time_ms": 1.0, "input_size": 10},
        {"algorithmId": "insertion", "swaps": 90, "comparisons": 95, "timeMs": 4.0}
    ]"#;

    fn temp_records(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sortrank-{}-{}.json", process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_runs_skips_invalid_and_mismatched_records() {
        let runs = parse_runs(MIXED_RECORDS).unwrap();

        let order: Vec<_> = runs.iter().map(MetricsRecord::algorithm).collect();
        assert_eq!(order, vec![AlgorithmId::Quick, AlgorithmId::Insertion]);
        assert!(runs.get(AlgorithmId::Merge).is_none());
        assert!(runs.get(AlgorithmId::Heap).is_none());
    }

    #[test]
    fn test_load_runs_from_file() {
        let path = temp_records("mixed", MIXED_RECORDS);
        let runs = load_runs(&path);
        fs::remove_file(&path).unwrap();

        let runs = runs.unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs.get(AlgorithmId::Quick).unwrap().swaps(), 12);
    }

    #[test]
    fn test_missing_file_is_invalid_input() {
        let path = std::env::temp_dir().join("sortrank-does-not-exist.json");
        let err = load_runs(&path).unwrap_err();
        assert!(matches!(err, RecordsFileError::NotFound(_)));
        assert_eq!(exit_code_for(&err.into()), EXIT_INVALID_INPUT);

        let err = handle_compare(&path, "quick", "merge").unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn test_unreadable_and_malformed_files_are_invalid_input() {
        let dir = std::env::temp_dir();
        let err = load_runs(&dir).unwrap_err();
        assert!(matches!(err, RecordsFileError::Read { .. }));
        assert_eq!(exit_code_for(&err.into()), EXIT_INVALID_INPUT);

        let path = temp_records("malformed", "{\"algorithm\": ");
        let err = load_runs(&path);
        fs::remove_file(&path).unwrap();
        let err = err.unwrap_err();
        assert!(matches!(err, RecordsFileError::Parse { .. }));
        assert_eq!(exit_code_for(&err.into()), EXIT_INVALID_INPUT);
    }

    #[test]
    fn test_bad_flag_values_are_general_errors() {
        let err = anyhow::Error::from("bogo".parse::<AlgorithmId>().unwrap_err());
        assert_eq!(exit_code_for(&err), EXIT_ERROR);

        let path = temp_records("flags", MIXED_RECORDS);
        let err = handle_compare(&path, "bogo", "quick").unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(exit_code_for(&err), EXIT_ERROR);

        let err = handle_run(None, None, Some("zigzag".to_string()), None, None, true).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_ERROR);
    }
}
