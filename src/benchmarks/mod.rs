pub mod modifiers;
pub mod types;

pub use self::types::{BoardAnalysis, BoardModifiers, BoardWordStats, Benchmarks, Rating, Tier};
use crate::config::Calibration;
use tracing::debug;

/// Turns board word facts into tier thresholds and a difficulty rating.
///
/// Stateless apart from its calibration, so one instance can serve any
/// number of sessions. Every method is total: degenerate or non-finite
/// inputs are clamped, never rejected.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkCalculator {
    calibration: Calibration,
}

impl BenchmarkCalculator {
    pub fn new(calibration: Calibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    #[inline(always)]
    pub fn richness_ratio(&self, word_count: u32, min_expected: u32) -> f64 {
        modifiers::richness_ratio(word_count, min_expected)
    }

    pub fn richness_scale(&self, word_count: u32, min_expected: u32) -> f64 {
        let ratio = self.richness_ratio(word_count, min_expected);
        modifiers::richness_scale(ratio, &self.calibration.richness)
    }

    pub fn grid_scale(&self, min_expected: u32) -> f64 {
        modifiers::grid_scale(min_expected, &self.calibration.grid)
    }

    pub fn board_modifiers(&self, analysis: &BoardAnalysis) -> BoardModifiers {
        modifiers::board_modifiers(analysis, &self.calibration.board)
    }

    /// Thresholds from the word count alone.
    pub fn basic(&self, word_count: u32, min_expected: u32) -> Benchmarks {
        let min_expected = min_expected.max(1);
        let richness = self.richness_scale(word_count, min_expected);
        let grid = self.grid_scale(min_expected);
        let [bronze, silver, gold, platinum] =
            modifiers::scale_thresholds(self.calibration.tiers.as_array(), richness * grid);
        let rating = self.richness_rating(word_count, min_expected);

        debug!(
            "basic: words={} expected={} richness={:.3} grid={:.2} -> {}/{}/{}/{} {}",
            word_count, min_expected, richness, grid, bronze, silver, gold, platinum, rating
        );

        Benchmarks {
            bronze,
            silver,
            gold,
            platinum,
            rating,
            word_count,
        }
    }

    /// Thresholds adjusted by how hard this particular board is.
    pub fn enhanced(
        &self,
        word_count: u32,
        min_expected: u32,
        analysis: &BoardAnalysis,
    ) -> Benchmarks {
        let min_expected = min_expected.max(1);
        let grid = self.grid_scale(min_expected);
        let m = self.board_modifiers(analysis);
        let scale = m.difficulty_scale * grid * m.potential_scale;
        let [bronze, silver, gold, platinum] =
            modifiers::scale_thresholds(self.calibration.tiers.as_array(), scale);
        let rating = self.complexity_rating(m.complexity);

        debug!(
            "enhanced: words={} expected={} ratio={:.3} rarity={:.3} length={:.3} conn={:.3} potential={:.3} grid={:.2} -> {}/{}/{}/{} {}",
            word_count,
            min_expected,
            self.richness_ratio(word_count, min_expected),
            m.rarity,
            m.length,
            m.connectivity,
            m.potential_scale,
            grid,
            bronze,
            silver,
            gold,
            platinum,
            rating
        );

        Benchmarks {
            bronze,
            silver,
            gold,
            platinum,
            rating,
            word_count,
        }
    }

    /// Enhanced when an analysis is available, basic otherwise.
    pub fn compute(&self, stats: &BoardWordStats, analysis: Option<&BoardAnalysis>) -> Benchmarks {
        match analysis {
            Some(a) => self.enhanced(stats.word_count, stats.min_expected_word_count, a),
            None => self.basic(stats.word_count, stats.min_expected_word_count),
        }
    }

    fn richness_rating(&self, word_count: u32, min_expected: u32) -> Rating {
        let r = &self.calibration.rating;

        // The default board size is pinned to Medium once it has a playable word count.
        if min_expected == r.standard_min_expected && word_count >= r.standard_medium_floor {
            return Rating::Medium;
        }

        let words = word_count as f64;
        let expected = min_expected as f64;
        if words >= r.easy_richness * expected {
            Rating::Easy
        } else if words >= r.medium_richness * expected {
            Rating::Medium
        } else {
            Rating::Hard
        }
    }

    fn complexity_rating(&self, complexity: f64) -> Rating {
        let r = &self.calibration.rating;
        if complexity >= r.easy_complexity {
            Rating::Easy
        } else if complexity >= r.medium_complexity {
            Rating::Medium
        } else {
            Rating::Hard
        }
    }
}

/// [`BenchmarkCalculator::basic`] with the default calibration.
pub fn compute_basic_benchmarks(word_count: u32, min_expected_word_count: u32) -> Benchmarks {
    BenchmarkCalculator::default().basic(word_count, min_expected_word_count)
}

/// [`BenchmarkCalculator::enhanced`] with the default calibration.
pub fn compute_enhanced_benchmarks(
    word_count: u32,
    min_expected_word_count: u32,
    analysis: &BoardAnalysis,
) -> Benchmarks {
    BenchmarkCalculator::default().enhanced(word_count, min_expected_word_count, analysis)
}
