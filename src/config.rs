use crate::consts;
use crate::error::{LexiError, LxResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Every tunable constant of the benchmark engine.
///
/// Loadable from JSON (each section is optional) and overridable per flag on
/// the command line. Explicit flags win over file values, see
/// [`Calibration::merge_from_cli`].
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Calibration {
    #[command(flatten)]
    pub tiers: TierBases,
    #[command(flatten)]
    pub grid: GridScale,
    #[command(flatten)]
    pub richness: RichnessCurve,
    #[command(flatten)]
    pub board: BoardAnchors,
    #[command(flatten)]
    pub rating: RatingThresholds,
}

/// Threshold of each tier before any scaling, in points.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierBases {
    #[arg(long = "tier-bronze", id = "tier_bronze", default_value_t = consts::TIER_BRONZE)]
    pub bronze: u32,
    #[arg(long = "tier-silver", id = "tier_silver", default_value_t = consts::TIER_SILVER)]
    pub silver: u32,
    #[arg(long = "tier-gold", id = "tier_gold", default_value_t = consts::TIER_GOLD)]
    pub gold: u32,
    #[arg(long = "tier-platinum", id = "tier_platinum", default_value_t = consts::TIER_PLATINUM)]
    pub platinum: u32,
}

impl Default for TierBases {
    fn default() -> Self {
        Self {
            bronze: consts::TIER_BRONZE,
            silver: consts::TIER_SILVER,
            gold: consts::TIER_GOLD,
            platinum: consts::TIER_PLATINUM,
        }
    }
}

impl TierBases {
    #[inline(always)]
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.bronze as f64,
            self.silver as f64,
            self.gold as f64,
            self.platinum as f64,
        ]
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridScale {
    #[arg(
        long = "grid-small-max-expected",
        id = "grid_small_max_expected",
        default_value_t = consts::GRID_SMALL_MAX_EXPECTED
    )]
    pub small_max_expected: u32,
    #[arg(
        long = "grid-medium-max-expected",
        id = "grid_medium_max_expected",
        default_value_t = consts::GRID_MEDIUM_MAX_EXPECTED
    )]
    pub medium_max_expected: u32,
    #[arg(long = "grid-small-scale", id = "grid_small_scale", default_value_t = consts::GRID_SMALL_SCALE)]
    pub small_scale: f64,
    #[arg(long = "grid-medium-scale", id = "grid_medium_scale", default_value_t = consts::GRID_MEDIUM_SCALE)]
    pub medium_scale: f64,
    #[arg(long = "grid-large-scale", id = "grid_large_scale", default_value_t = consts::GRID_LARGE_SCALE)]
    pub large_scale: f64,
}

impl Default for GridScale {
    fn default() -> Self {
        Self {
            small_max_expected: consts::GRID_SMALL_MAX_EXPECTED,
            medium_max_expected: consts::GRID_MEDIUM_MAX_EXPECTED,
            small_scale: consts::GRID_SMALL_SCALE,
            medium_scale: consts::GRID_MEDIUM_SCALE,
            large_scale: consts::GRID_LARGE_SCALE,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichnessCurve {
    #[arg(long = "richness-base", id = "richness_base", default_value_t = consts::RICHNESS_BASE)]
    pub base: f64,
    #[arg(long = "richness-slope", id = "richness_slope", default_value_t = consts::RICHNESS_SLOPE)]
    pub slope: f64,
    #[arg(long = "richness-min", id = "richness_min", default_value_t = consts::RICHNESS_MIN)]
    pub min: f64,
    #[arg(long = "richness-max", id = "richness_max", default_value_t = consts::RICHNESS_MAX)]
    pub max: f64,
}

impl Default for RichnessCurve {
    fn default() -> Self {
        Self {
            base: consts::RICHNESS_BASE,
            slope: consts::RICHNESS_SLOPE,
            min: consts::RICHNESS_MIN,
            max: consts::RICHNESS_MAX,
        }
    }
}

/// Anchors ("typical board" values) and clamp ranges of the board modifiers.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardAnchors {
    #[arg(long, default_value_t = consts::RARITY_ANCHOR)]
    pub rarity_anchor: f64,
    #[arg(long, default_value_t = consts::RARITY_MIN)]
    pub rarity_min: f64,
    #[arg(long, default_value_t = consts::RARITY_MAX)]
    pub rarity_max: f64,

    #[arg(long, default_value_t = consts::LENGTH_ANCHOR)]
    pub length_anchor: f64,
    #[arg(long, default_value_t = consts::LENGTH_MIN)]
    pub length_min: f64,
    #[arg(long, default_value_t = consts::LENGTH_MAX)]
    pub length_max: f64,

    #[arg(long, default_value_t = consts::CONNECTIVITY_MIN)]
    pub connectivity_min: f64,
    #[arg(long, default_value_t = consts::CONNECTIVITY_MAX)]
    pub connectivity_max: f64,

    #[arg(long, default_value_t = consts::POTENTIAL_ANCHOR)]
    pub potential_anchor: f64,
    #[arg(long, default_value_t = consts::POTENTIAL_MIN)]
    pub potential_min: f64,
    #[arg(long, default_value_t = consts::POTENTIAL_MAX)]
    pub potential_max: f64,
}

impl Default for BoardAnchors {
    fn default() -> Self {
        Self {
            rarity_anchor: consts::RARITY_ANCHOR,
            rarity_min: consts::RARITY_MIN,
            rarity_max: consts::RARITY_MAX,
            length_anchor: consts::LENGTH_ANCHOR,
            length_min: consts::LENGTH_MIN,
            length_max: consts::LENGTH_MAX,
            connectivity_min: consts::CONNECTIVITY_MIN,
            connectivity_max: consts::CONNECTIVITY_MAX,
            potential_anchor: consts::POTENTIAL_ANCHOR,
            potential_min: consts::POTENTIAL_MIN,
            potential_max: consts::POTENTIAL_MAX,
        }
    }
}

impl BoardAnchors {
    /// Smallest and largest `difficulty_scale * potential_scale` these clamps allow.
    pub fn composite_envelope(&self) -> (f64, f64) {
        let lo = self.rarity_min * self.length_min * self.connectivity_min * self.potential_min;
        let hi = self.rarity_max * self.length_max * self.connectivity_max * self.potential_max;
        (lo, hi)
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingThresholds {
    #[arg(long, default_value_t = consts::STANDARD_MIN_EXPECTED)]
    pub standard_min_expected: u32,
    #[arg(long, default_value_t = consts::STANDARD_MEDIUM_FLOOR)]
    pub standard_medium_floor: u32,

    // Basic path: multiples of the expected word count
    #[arg(long, default_value_t = consts::EASY_RICHNESS)]
    pub easy_richness: f64,
    #[arg(long, default_value_t = consts::MEDIUM_RICHNESS)]
    pub medium_richness: f64,

    // Enhanced path: mean of the three board modifiers
    #[arg(long, default_value_t = consts::EASY_COMPLEXITY)]
    pub easy_complexity: f64,
    #[arg(long, default_value_t = consts::MEDIUM_COMPLEXITY)]
    pub medium_complexity: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            standard_min_expected: consts::STANDARD_MIN_EXPECTED,
            standard_medium_floor: consts::STANDARD_MEDIUM_FLOOR,
            easy_richness: consts::EASY_RICHNESS,
            medium_richness: consts::MEDIUM_RICHNESS,
            easy_complexity: consts::EASY_COMPLEXITY,
            medium_complexity: consts::MEDIUM_COMPLEXITY,
        }
    }
}

impl Calibration {
    /// The lower-scoring calibration (200/450/800/1400, grid 1.0/1.3/1.6).
    pub fn compact() -> Self {
        Self {
            tiers: TierBases {
                bronze: 200,
                silver: 450,
                gold: 800,
                platinum: 1400,
            },
            grid: GridScale {
                medium_scale: 1.3,
                large_scale: 1.6,
                ..GridScale::default()
            },
            ..Self::default()
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LxResult<Self> {
        let path = path.as_ref();
        debug!("Loading calibration from {:?}", path);

        let content = fs::read_to_string(path)?;
        let calibration: Self = serde_json::from_str(&content)?;
        calibration.validate()?;
        Ok(calibration)
    }

    pub fn validate(&self) -> LxResult<()> {
        let t = &self.tiers;
        if t.bronze == 0 {
            return Err(LexiError::Config("tier bronze must be positive".into()));
        }
        if !(t.bronze < t.silver && t.silver < t.gold && t.gold < t.platinum) {
            return Err(LexiError::Config(format!(
                "tier bases must be strictly increasing, got {}/{}/{}/{}",
                t.bronze, t.silver, t.gold, t.platinum
            )));
        }

        let g = &self.grid;
        if g.small_max_expected > g.medium_max_expected {
            return Err(LexiError::Config(format!(
                "grid breakpoints out of order: small {} > medium {}",
                g.small_max_expected, g.medium_max_expected
            )));
        }

        let b = &self.board;
        let positives = [
            ("grid_small_scale", g.small_scale),
            ("grid_medium_scale", g.medium_scale),
            ("grid_large_scale", g.large_scale),
            ("rarity_anchor", b.rarity_anchor),
            ("length_anchor", b.length_anchor),
            ("potential_anchor", b.potential_anchor),
            ("richness_min", self.richness.min),
            ("rarity_min", b.rarity_min),
            ("length_min", b.length_min),
            ("connectivity_min", b.connectivity_min),
            ("potential_min", b.potential_min),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(LexiError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let ranges = [
            ("richness", self.richness.min, self.richness.max),
            ("rarity", b.rarity_min, b.rarity_max),
            ("length", b.length_min, b.length_max),
            ("connectivity", b.connectivity_min, b.connectivity_max),
            ("potential", b.potential_min, b.potential_max),
        ];
        for (name, lo, hi) in ranges {
            if lo > hi || !hi.is_finite() {
                return Err(LexiError::Config(format!(
                    "{} clamp range is invalid: [{}, {}]",
                    name, lo, hi
                )));
            }
        }

        if !self.richness.base.is_finite() {
            return Err(LexiError::Config("richness curve must be finite".into()));
        }
        // A falling curve would lower the bar as boards get richer
        if !(self.richness.slope.is_finite() && self.richness.slope >= 0.0) {
            return Err(LexiError::Config(format!(
                "richness_slope must be a finite non-negative number, got {}",
                self.richness.slope
            )));
        }

        let peak_grid = g.small_scale.max(g.medium_scale).max(g.large_scale);
        let peak_scale = self.richness.max.max(b.composite_envelope().1) * peak_grid;
        let peak = t.platinum as f64 * peak_scale;
        if peak >= u32::MAX as f64 {
            return Err(LexiError::Config(format!(
                "platinum can reach {:.0} points, past the {} limit",
                peak,
                u32::MAX
            )));
        }

        let r = &self.rating;
        let rating_thresholds = [
            ("easy_richness", r.easy_richness),
            ("medium_richness", r.medium_richness),
            ("easy_complexity", r.easy_complexity),
            ("medium_complexity", r.medium_complexity),
        ];
        for (name, value) in rating_thresholds {
            if !(value.is_finite() && value > 0.0) {
                return Err(LexiError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if r.medium_richness > r.easy_richness || r.medium_complexity > r.easy_complexity {
            return Err(LexiError::Config(
                "medium rating threshold exceeds easy threshold".into(),
            ));
        }

        Ok(())
    }

    /// Copies every value the user passed explicitly on the command line
    /// from `cli` onto `self`. Defaults filled in by clap are ignored.
    pub fn merge_from_cli(&mut self, cli: &Calibration, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(tiers.bronze, "tier_bronze");
        update_if_present!(tiers.silver, "tier_silver");
        update_if_present!(tiers.gold, "tier_gold");
        update_if_present!(tiers.platinum, "tier_platinum");

        update_if_present!(grid.small_max_expected, "grid_small_max_expected");
        update_if_present!(grid.medium_max_expected, "grid_medium_max_expected");
        update_if_present!(grid.small_scale, "grid_small_scale");
        update_if_present!(grid.medium_scale, "grid_medium_scale");
        update_if_present!(grid.large_scale, "grid_large_scale");

        update_if_present!(richness.base, "richness_base");
        update_if_present!(richness.slope, "richness_slope");
        update_if_present!(richness.min, "richness_min");
        update_if_present!(richness.max, "richness_max");

        update_if_present!(board.rarity_anchor, "rarity_anchor");
        update_if_present!(board.rarity_min, "rarity_min");
        update_if_present!(board.rarity_max, "rarity_max");
        update_if_present!(board.length_anchor, "length_anchor");
        update_if_present!(board.length_min, "length_min");
        update_if_present!(board.length_max, "length_max");
        update_if_present!(board.connectivity_min, "connectivity_min");
        update_if_present!(board.connectivity_max, "connectivity_max");
        update_if_present!(board.potential_anchor, "potential_anchor");
        update_if_present!(board.potential_min, "potential_min");
        update_if_present!(board.potential_max, "potential_max");

        update_if_present!(rating.standard_min_expected, "standard_min_expected");
        update_if_present!(rating.standard_medium_floor, "standard_medium_floor");
        update_if_present!(rating.easy_richness, "easy_richness");
        update_if_present!(rating.medium_richness, "medium_richness");
        update_if_present!(rating.easy_complexity, "easy_complexity");
        update_if_present!(rating.medium_complexity, "medium_complexity");
    }
}
