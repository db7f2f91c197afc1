use crate::reports;
use clap::Args;
use lexichain::config::Calibration;
use lexichain::loader::load_boards;
use lexichain::{BenchmarkCalculator, Benchmarks, LxResult};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub tuning: Calibration,

    /// CSV with columns label,word_count,min_expected and optionally
    /// rarity_score_potential,avg_word_length,connectivity_score,max_score_potential
    #[arg(short, long)]
    pub input: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchRow {
    label: String,
    enhanced: bool,
    benchmarks: Benchmarks,
}

pub fn run(args: BatchArgs, calculator: &BenchmarkCalculator) -> LxResult<()> {
    info!("📂 Loading Boards: {}", args.input);
    let batch = load_boards(&args.input)?;

    if batch.records.is_empty() {
        warn!("⚠️  No valid boards in '{}'.", args.input);
    }

    let rows: Vec<BatchRow> = batch
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let analysis = record.analysis();
            BatchRow {
                label: record
                    .label
                    .clone()
                    .unwrap_or_else(|| format!("#{}", i + 1)),
                enhanced: analysis.is_some(),
                benchmarks: calculator.compute(&record.stats(), analysis.as_ref()),
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let table_rows: Vec<(String, Benchmarks)> = rows
        .into_iter()
        .map(|r| {
            let tag = if r.enhanced { "E" } else { "B" };
            (format!("{} [{}]", r.label, tag), r.benchmarks)
        })
        .collect();
    reports::print_benchmarks(&table_rows);

    info!(
        "🏁 {} boards computed, {} rows skipped, {} with incomplete analysis",
        table_rows.len(),
        batch.skipped,
        batch.partial
    );
    Ok(())
}
