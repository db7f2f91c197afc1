// ===== Tier Bases (points) =====

pub const TIER_BRONZE: u32 = 500;
pub const TIER_SILVER: u32 = 1200;
pub const TIER_GOLD: u32 = 2200;
pub const TIER_PLATINUM: u32 = 4000;

// ===== Grid Scale =====
// The expected word count stands in for grid size.

/// Largest expected word count still treated as a small grid.
pub const GRID_SMALL_MAX_EXPECTED: u32 = 12;
/// Largest expected word count still treated as a medium grid.
pub const GRID_MEDIUM_MAX_EXPECTED: u32 = 20;
pub const GRID_SMALL_SCALE: f64 = 1.0;
pub const GRID_MEDIUM_SCALE: f64 = 1.4;
pub const GRID_LARGE_SCALE: f64 = 2.0;

// ===== Richness Curve =====
// s = clamp(base + slope * (ratio - 1), min, max)

pub const RICHNESS_BASE: f64 = 0.8;
pub const RICHNESS_SLOPE: f64 = 0.2;
pub const RICHNESS_MIN: f64 = 0.7;
pub const RICHNESS_MAX: f64 = 1.5;

// ===== Board Modifiers =====

/// Rarity potential of a typical board (scoring weight units).
pub const RARITY_ANCHOR: f64 = 1000.0;
pub const RARITY_MIN: f64 = 0.7;
pub const RARITY_MAX: f64 = 1.5;

/// Typical average word length (letters).
pub const LENGTH_ANCHOR: f64 = 5.5;
pub const LENGTH_MIN: f64 = 0.8;
pub const LENGTH_MAX: f64 = 1.3;

/// Connectivity is already normalized around 1.0, so it has no anchor.
pub const CONNECTIVITY_MIN: f64 = 0.75;
pub const CONNECTIVITY_MAX: f64 = 1.4;

/// Max achievable score of a typical board (points).
pub const POTENTIAL_ANCHOR: f64 = 8000.0;
pub const POTENTIAL_MIN: f64 = 0.6;
pub const POTENTIAL_MAX: f64 = 2.0;

// ===== Rating =====

/// Expected word count of the default board size.
pub const STANDARD_MIN_EXPECTED: u32 = 12;
/// On the default board size, this many words or more is always rated Medium.
pub const STANDARD_MEDIUM_FLOOR: u32 = 10;
pub const EASY_RICHNESS: f64 = 2.0;
pub const MEDIUM_RICHNESS: f64 = 1.2;
pub const EASY_COMPLEXITY: f64 = 1.2;
pub const MEDIUM_COMPLEXITY: f64 = 0.95;
