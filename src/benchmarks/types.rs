use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Difficulty label of a board.
///
/// Variants are declared from hardest to easiest so the derived `Ord`
/// follows the difficulty rank: `Hard < Medium < Easy`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Rating {
    Hard,
    Medium,
    Easy,
}

impl Rating {
    #[inline(always)]
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Word facts every generated board carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardWordStats {
    pub word_count: u32,
    /// Baseline word count for this grid size. Zero is treated as one.
    pub min_expected_word_count: u32,
}

impl BoardWordStats {
    pub fn new(word_count: u32, min_expected_word_count: u32) -> Self {
        Self {
            word_count,
            min_expected_word_count,
        }
    }
}

/// Richer board facts produced by the board generator's word finder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardAnalysis {
    /// Aggregate scoring weight of rare letters on the board.
    pub rarity_score_potential: f64,
    /// Mean length of the discoverable words.
    pub avg_word_length: f64,
    /// How well tiles interconnect, normalized around 1.0.
    pub connectivity_score: f64,
    /// Tile counts per letter. Not read by any formula.
    #[serde(default)]
    pub letter_distribution: BTreeMap<char, u32>,
    /// Theoretical maximum score on this board.
    pub max_score_potential: f64,
}

/// Intermediate factors of the enhanced calculation, after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardModifiers {
    pub rarity: f64,
    pub length: f64,
    pub connectivity: f64,
    /// `rarity * length * connectivity`
    pub difficulty_scale: f64,
    pub potential_scale: f64,
    /// Mean of the three modifiers, drives the rating.
    pub complexity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmarks {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
    pub platinum: u32,
    pub rating: Rating,
    pub word_count: u32,
}

impl Benchmarks {
    pub fn thresholds(&self) -> [u32; 4] {
        [self.bronze, self.silver, self.gold, self.platinum]
    }

    pub fn threshold(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Bronze => self.bronze,
            Tier::Silver => self.silver,
            Tier::Gold => self.gold,
            Tier::Platinum => self.platinum,
        }
    }

    /// Highest tier reached by `score`, or `None` below bronze.
    pub fn tier_for_score(&self, score: u32) -> Option<Tier> {
        Tier::iter()
            .rev()
            .find(|&tier| score >= self.threshold(tier))
    }

    /// The next tier `score` has not reached yet and the points still missing.
    pub fn next_tier(&self, score: u32) -> Option<(Tier, u32)> {
        Tier::iter()
            .map(|tier| (tier, self.threshold(tier)))
            .find(|&(_, threshold)| score < threshold)
            .map(|(tier, threshold)| (tier, threshold - score))
    }
}
