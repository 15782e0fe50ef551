//! Basic usage example for sortrank.

use sortrank::{
    AlgorithmId, InputPattern, MetricsRecord, PlaygroundConfig, RunSet, Scoreboard, compare, rank,
    run_playground,
};

fn main() {
    // Example 1: Ranking recorded runs
    println!("=== Example 1: Ranking Recorded Runs ===");
    let runs = RunSet::from_records([
        MetricsRecord::new(AlgorithmId::Quick, 2_310, 5_120, 120.0),
        MetricsRecord::new(AlgorithmId::Bubble, 249_000, 499_500, 980.0),
        MetricsRecord::new(AlgorithmId::Merge, 9_976, 8_700, 140.0),
        MetricsRecord::unmeasured(AlgorithmId::Heap),
    ]);

    match runs {
        Ok(runs) => {
            for entry in rank(&runs) {
                println!(
                    "#{} {:<8} {:>8.1}ms",
                    entry.rank,
                    entry.record.algorithm(),
                    entry.record.time_ms()
                );
            }

            if let (Some(merge), Some(quick)) =
                (runs.get(AlgorithmId::Merge), runs.get(AlgorithmId::Quick))
            {
                match compare(merge, quick) {
                    Some(result) => println!("merge vs quick: {}", result),
                    None => println!("merge vs quick: no comparison"),
                }
            }
        }
        Err(e) => eprintln!("Invalid runs: {}", e),
    }

    println!();

    // Example 2: Measuring live runs
    println!("=== Example 2: Measuring Live Runs ===");
    let config = PlaygroundConfig {
        size: 2_000,
        pattern: InputPattern::NearlySorted,
        algorithms: Some(vec![
            AlgorithmId::Insertion,
            AlgorithmId::Shell,
            AlgorithmId::Quick,
            AlgorithmId::Heap,
        ]),
        current: Some(AlgorithmId::Quick),
        ..PlaygroundConfig::quick()
    };

    match run_playground(&config) {
        Ok(runs) => {
            let board = Scoreboard::build(&runs, config.current);
            for row in &board.rows {
                let versus = row
                    .comparison
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "#{} {:<10} swaps={:<8} comparisons={:<8} {:.3}ms ({})",
                    row.rank, row.algorithm, row.swaps, row.comparisons, row.time_ms, versus
                );
            }
        }
        Err(e) => eprintln!("Run failed: {}", e),
    }

    println!();
    println!("=== All Examples Completed ===");
}
