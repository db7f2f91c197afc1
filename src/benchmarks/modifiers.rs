use super::types::{BoardAnalysis, BoardModifiers};
use crate::config::{BoardAnchors, GridScale, RichnessCurve};

/// Replaces NaN and negative inputs with zero. `+inf` is left for the clamp.
#[inline(always)]
pub fn sanitize(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// `f64::clamp` without the panic on an inverted range. `hi` wins then.
#[inline(always)]
fn bounded(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

#[inline(always)]
pub fn richness_ratio(word_count: u32, min_expected: u32) -> f64 {
    word_count.max(1) as f64 / min_expected.max(1) as f64
}

#[inline(always)]
pub fn richness_scale(ratio: f64, curve: &RichnessCurve) -> f64 {
    bounded(curve.base + curve.slope * (ratio - 1.0), curve.min, curve.max)
}

pub fn grid_scale(min_expected: u32, grid: &GridScale) -> f64 {
    let size = min_expected.max(1);
    if size <= grid.small_max_expected {
        grid.small_scale
    } else if size <= grid.medium_max_expected {
        grid.medium_scale
    } else {
        grid.large_scale
    }
}

pub fn board_modifiers(analysis: &BoardAnalysis, anchors: &BoardAnchors) -> BoardModifiers {
    let rarity = bounded(
        sanitize(analysis.rarity_score_potential) / anchors.rarity_anchor,
        anchors.rarity_min,
        anchors.rarity_max,
    );
    let length = bounded(
        sanitize(analysis.avg_word_length) / anchors.length_anchor,
        anchors.length_min,
        anchors.length_max,
    );
    let connectivity = bounded(
        sanitize(analysis.connectivity_score),
        anchors.connectivity_min,
        anchors.connectivity_max,
    );
    let potential_scale = bounded(
        sanitize(analysis.max_score_potential) / anchors.potential_anchor,
        anchors.potential_min,
        anchors.potential_max,
    );

    BoardModifiers {
        rarity,
        length,
        connectivity,
        difficulty_scale: rarity * length * connectivity,
        potential_scale,
        complexity: (rarity + length + connectivity) / 3.0,
    }
}

/// Scales the tier bases and rounds them.
///
/// Bronze is floored at 1 and every later tier at one point above its
/// predecessor. Each tier is also capped so the tiers above it still fit
/// in `u32`, so the result is strictly increasing whatever the scale.
pub fn scale_thresholds(bases: [f64; 4], scale: f64) -> [u32; 4] {
    let mut out = [0u32; 4];
    let mut floor = 1u32;
    for (i, (slot, base)) in out.iter_mut().zip(bases).enumerate() {
        let ceiling = u32::MAX - (3 - i as u32);
        // `as` saturates: NaN -> 0, overflow -> u32::MAX
        let raw = ((base * scale).round() as u32).min(ceiling);
        // floor <= previous ceiling + 1 == ceiling
        *slot = raw.max(floor);
        floor = *slot + 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_analysis() -> BoardAnalysis {
        BoardAnalysis {
            rarity_score_potential: 1000.0,
            avg_word_length: 5.5,
            connectivity_score: 1.0,
            max_score_potential: 8000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_richness_ratio_floors_both_sides() {
        assert_eq!(richness_ratio(0, 0), 1.0);
        assert_eq!(richness_ratio(0, 12), 1.0 / 12.0);
        assert_eq!(richness_ratio(24, 12), 2.0);
        assert_eq!(richness_ratio(24, 0), 24.0);
    }

    #[test]
    fn test_richness_scale_clamps() {
        let curve = RichnessCurve::default();
        assert_eq!(richness_scale(0.0, &curve), 0.7);
        assert!((richness_scale(1.0, &curve) - 0.8).abs() < 1e-12);
        assert!((richness_scale(2.0, &curve) - 1.0).abs() < 1e-12);
        assert_eq!(richness_scale(100.0, &curve), 1.5);
    }

    #[test]
    fn test_grid_scale_breakpoints() {
        let grid = GridScale::default();
        assert_eq!(grid_scale(0, &grid), 1.0);
        assert_eq!(grid_scale(12, &grid), 1.0);
        assert_eq!(grid_scale(13, &grid), 1.4);
        assert_eq!(grid_scale(20, &grid), 1.4);
        assert_eq!(grid_scale(21, &grid), 2.0);
    }

    #[test]
    fn test_neutral_analysis_is_identity() {
        let m = board_modifiers(&neutral_analysis(), &BoardAnchors::default());
        assert_eq!(m.rarity, 1.0);
        assert_eq!(m.length, 1.0);
        assert_eq!(m.connectivity, 1.0);
        assert_eq!(m.difficulty_scale, 1.0);
        assert_eq!(m.potential_scale, 1.0);
        assert_eq!(m.complexity, 1.0);
    }

    #[test]
    fn test_non_finite_inputs_hit_the_clamps() {
        let analysis = BoardAnalysis {
            rarity_score_potential: f64::NAN,
            avg_word_length: -3.0,
            connectivity_score: f64::INFINITY,
            max_score_potential: f64::NEG_INFINITY,
            ..Default::default()
        };
        let m = board_modifiers(&analysis, &BoardAnchors::default());
        assert_eq!(m.rarity, 0.7);
        assert_eq!(m.length, 0.8);
        assert_eq!(m.connectivity, 1.4);
        assert_eq!(m.potential_scale, 0.6);
    }

    #[test]
    fn test_inverted_range_does_not_panic() {
        let curve = RichnessCurve {
            min: 2.0,
            max: 1.0,
            ..Default::default()
        };
        assert_eq!(richness_scale(1.0, &curve), 1.0);
    }

    #[test]
    fn test_scale_thresholds_keeps_order_on_collisions() {
        assert_eq!(scale_thresholds([10.0, 11.0, 12.0, 13.0], 0.01), [1, 2, 3, 4]);
        assert_eq!(scale_thresholds([500.0, 1200.0, 2200.0, 4000.0], f64::NAN), [1, 2, 3, 4]);
        assert_eq!(
            scale_thresholds([500.0, 1200.0, 2200.0, 4000.0], 1.4),
            [700, 1680, 3080, 5600]
        );
    }

    #[test]
    fn test_scale_thresholds_steps_down_from_u32_max() {
        let top = u32::MAX;
        let expected = [top - 3, top - 2, top - 1, top];
        assert_eq!(scale_thresholds([500.0, 1200.0, 2200.0, 4000.0], 1e10), expected);
        assert_eq!(scale_thresholds([500.0, 1200.0, 2200.0, 4000.0], f64::INFINITY), expected);
        // only platinum overflows
        let out = scale_thresholds([1.0, 2.0, 3.0, 1e12], 1.0);
        assert_eq!(out, [1, 2, 3, top]);
    }
}
