use crate::reports::{self, SweepRow};
use clap::Args;
use lexichain::config::Calibration;
use lexichain::{BenchmarkCalculator, LexiError, LxResult};
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub tuning: Calibration,

    #[arg(short, long)]
    pub min_expected: u32,

    #[arg(long, default_value_t = 0)]
    pub from: u32,

    /// Defaults to three times the expected word count.
    #[arg(long)]
    pub to: Option<u32>,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub step: u32,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SweepReport {
    min_expected: u32,
    grid_scale: f64,
    rows: Vec<SweepRow>,
}

pub fn run(args: SweepArgs, calculator: &BenchmarkCalculator) -> LxResult<()> {
    let to = args
        .to
        .unwrap_or_else(|| args.min_expected.max(1).saturating_mul(3));
    if args.from > to {
        return Err(LexiError::Validation(format!(
            "--from {} is past --to {}",
            args.from, to
        )));
    }

    let rows: Vec<SweepRow> = (args.from..=to)
        .step_by(args.step as usize)
        .map(|words| SweepRow {
            word_count: words,
            ratio: calculator.richness_ratio(words, args.min_expected),
            richness: calculator.richness_scale(words, args.min_expected),
            benchmarks: calculator.basic(words, args.min_expected),
        })
        .collect();

    let grid_scale = calculator.grid_scale(args.min_expected);

    if args.json {
        let report = SweepReport {
            min_expected: args.min_expected,
            grid_scale,
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "\nSweep: expected={} grid scale={:.2}",
        args.min_expected, grid_scale
    );
    reports::print_sweep(&rows);
    Ok(())
}
