use crate::reports;
use clap::Args;
use lexichain::config::Calibration;
use lexichain::{
    BenchmarkCalculator, Benchmarks, BoardAnalysis, BoardModifiers, BoardWordStats, LexiError,
    LxResult, Tier,
};
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub tuning: Calibration,

    #[arg(short, long)]
    pub word_count: u32,

    #[arg(short, long)]
    pub min_expected: u32,

    // Board analysis: all four or none
    #[arg(long)]
    pub rarity: Option<f64>,
    #[arg(long)]
    pub avg_word_length: Option<f64>,
    #[arg(long)]
    pub connectivity: Option<f64>,
    #[arg(long)]
    pub max_potential: Option<f64>,

    /// Also report which tier this score reaches.
    #[arg(long)]
    pub score: Option<u32>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl ComputeArgs {
    fn analysis(&self) -> LxResult<Option<BoardAnalysis>> {
        match (
            self.rarity,
            self.avg_word_length,
            self.connectivity,
            self.max_potential,
        ) {
            (None, None, None, None) => Ok(None),
            (Some(rarity), Some(length), Some(connectivity), Some(potential)) => {
                Ok(Some(BoardAnalysis {
                    rarity_score_potential: rarity,
                    avg_word_length: length,
                    connectivity_score: connectivity,
                    max_score_potential: potential,
                    ..Default::default()
                }))
            }
            _ => Err(LexiError::Validation(
                "board analysis needs all of --rarity, --avg-word-length, --connectivity and --max-potential"
                    .into(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub score: u32,
    pub tier: Option<Tier>,
    pub next_tier: Option<Tier>,
    pub points_to_next: Option<u32>,
}

impl ScoreReport {
    pub fn new(benchmarks: &Benchmarks, score: u32) -> Self {
        let next = benchmarks.next_tier(score);
        Self {
            score,
            tier: benchmarks.tier_for_score(score),
            next_tier: next.map(|(tier, _)| tier),
            points_to_next: next.map(|(_, missing)| missing),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComputeReport {
    stats: BoardWordStats,
    richness_ratio: f64,
    grid_scale: f64,
    modifiers: Option<BoardModifiers>,
    benchmarks: Benchmarks,
    score: Option<ScoreReport>,
}

pub fn run(args: ComputeArgs, calculator: &BenchmarkCalculator) -> LxResult<()> {
    let stats = BoardWordStats::new(args.word_count, args.min_expected);
    let analysis = args.analysis()?;

    let benchmarks = calculator.compute(&stats, analysis.as_ref());
    let report = ComputeReport {
        stats,
        richness_ratio: calculator.richness_ratio(stats.word_count, stats.min_expected_word_count),
        grid_scale: calculator.grid_scale(stats.min_expected_word_count),
        modifiers: analysis.as_ref().map(|a| calculator.board_modifiers(a)),
        benchmarks,
        score: args.score.map(|s| ScoreReport::new(&benchmarks, s)),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let path = if analysis.is_some() { "enhanced" } else { "basic" };
    reports::print_benchmarks(&[(format!("board ({})", path), benchmarks)]);
    if let Some(m) = &report.modifiers {
        reports::print_modifiers(m);
    }
    if let Some(s) = &report.score {
        reports::print_score(s);
    }
    Ok(())
}
