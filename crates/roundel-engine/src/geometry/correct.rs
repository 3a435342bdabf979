//! Radius feasibility correction.
//!
//! Two adjacent radii must fit along the edge they share:
//!
//! | pair                        | span   |
//! |-----------------------------|--------|
//! | top-left + top-right        | width  |
//! | top-right + bottom-right    | height |
//! | bottom-right + bottom-left  | width  |
//! | bottom-left + top-left      | height |
//!
//! [`CorrectionStrategy::GlobalRatio`] is the canonical strategy. It shrinks all four
//! radii by one shared factor, so the requested roundness ratios survive.

use crate::coords::CornerRadii;

/// Default pass budget for [`CorrectionStrategy::PairwiseRelaxation`].
pub const DEFAULT_MAX_PASSES: u32 = 64;

/// Slack allowed when deciding whether a pair still overflows its span.
const OVERFLOW_EPS: f64 = 1e-12;

/// How infeasible radii are brought back within their edges.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CorrectionStrategy {
    /// Single pass: scale all radii by the tightest `span / (r1 + r2)` ratio.
    #[default]
    GlobalRatio,
    /// Scale each overflowing pair to fit its span, pass after pass, until nothing
    /// changes or `max_passes` is spent. A global-ratio pass finishes the job if
    /// the budget runs out.
    PairwiseRelaxation { max_passes: u32 },
}

impl CorrectionStrategy {
    #[inline]
    pub const fn relaxation() -> Self {
        CorrectionStrategy::PairwiseRelaxation { max_passes: DEFAULT_MAX_PASSES }
    }
}

/// The four constrained pairs as `(index_a, index_b, uses_width)` into
/// `CornerRadii::to_array` order.
const PAIRS: [(usize, usize, bool); 4] = [
    (0, 1, true),
    (1, 2, false),
    (2, 3, true),
    (3, 0, false),
];

#[inline]
fn span(width: f64, height: f64, uses_width: bool) -> f64 {
    let s = if uses_width { width } else { height };
    if s > 0.0 { s } else { 0.0 }
}

#[inline]
fn overflows(sum: f64, span: f64) -> bool {
    sum > span + OVERFLOW_EPS * span.max(1.0)
}

/// Shared shrink factor in `[0, 1]` that makes `radii` fit a `width × height` box.
///
/// Pairs with a zero sum are unconstrained.
pub fn scale_factor(width: f64, height: f64, radii: CornerRadii) -> f64 {
    let r = radii.non_negative().to_array();
    PAIRS
        .iter()
        .filter_map(|&(a, b, uses_width)| {
            let sum = r[a] + r[b];
            (sum > 0.0).then(|| span(width, height, uses_width) / sum)
        })
        .fold(1.0, f64::min)
}

/// Returns true when every adjacent pair fits its span within `tol`.
pub fn is_feasible(width: f64, height: f64, radii: CornerRadii, tol: f64) -> bool {
    let r = radii.to_array();
    PAIRS
        .iter()
        .all(|&(a, b, uses_width)| r[a] + r[b] <= span(width, height, uses_width) + tol)
}

/// Corrects `radii` for a `width × height` rectangle with the global-ratio strategy.
///
/// Negative radii are clamped to zero first. Already-feasible radii are returned
/// unchanged.
pub fn correct(width: f64, height: f64, radii: CornerRadii) -> CornerRadii {
    let radii = radii.non_negative();
    let s = scale_factor(width, height, radii);
    if s >= 1.0 {
        return radii;
    }
    log::trace!("scaling corner radii {radii:?} by {s} to fit {width}x{height}");
    radii.scaled(s)
}

/// Corrects `radii` with the given strategy.
pub fn correct_with(strategy: CorrectionStrategy, width: f64, height: f64, radii: CornerRadii) -> CornerRadii {
    match strategy {
        CorrectionStrategy::GlobalRatio => correct(width, height, radii),
        CorrectionStrategy::PairwiseRelaxation { max_passes } => relax(width, height, radii, max_passes),
    }
}

fn relax(width: f64, height: f64, radii: CornerRadii, max_passes: u32) -> CornerRadii {
    let mut r = radii.non_negative().to_array();

    for _ in 0..max_passes {
        let mut changed = false;
        for &(a, b, uses_width) in &PAIRS {
            let span = span(width, height, uses_width);
            let sum = r[a] + r[b];
            if overflows(sum, span) {
                let f = span / sum;
                r[a] *= f;
                r[b] *= f;
                changed = true;
            }
        }
        if !changed {
            return CornerRadii::from(r);
        }
    }

    log::debug!("pairwise radius relaxation spent {max_passes} passes; finishing with a global ratio pass");
    correct(width, height, CornerRadii::from(r))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_radii_eq(a: CornerRadii, b: CornerRadii) {
        for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-12);
        }
    }

    // ── worked examples ───────────────────────────────────────────────────

    #[test]
    fn unit_square_with_oversized_radii_shrinks_to_half() {
        let out = correct(1.0, 1.0, CornerRadii::all(0.6));
        assert_radii_eq(out, CornerRadii::all(0.5));
        assert_abs_diff_eq!(scale_factor(1.0, 1.0, CornerRadii::all(0.6)), 1.0 / 1.2, epsilon = 1e-12);
    }

    #[test]
    fn feasible_radii_are_unchanged() {
        let radii = CornerRadii::all(0.3);
        assert_eq!(correct(2.0, 1.0, radii), radii);
        assert_eq!(correct_with(CorrectionStrategy::relaxation(), 2.0, 1.0, radii), radii);
    }

    #[test]
    fn tightest_pair_decides_the_factor() {
        // Left side: bl + tl = 3 against height 1.
        let out = correct(10.0, 1.0, CornerRadii::new(2.0, 0.5, 0.5, 1.0));
        assert_radii_eq(out, CornerRadii::new(2.0 / 3.0, 0.5 / 3.0, 0.5 / 3.0, 1.0 / 3.0));
        assert!(is_feasible(10.0, 1.0, out, TOL));
    }

    // ── degenerate inputs ─────────────────────────────────────────────────

    #[test]
    fn zero_width_zeroes_every_radius() {
        let out = correct(0.0, 5.0, CornerRadii::new(1.0, 2.0, 0.5, 0.25));
        assert_eq!(out, CornerRadii::zero());
    }

    #[test]
    fn zero_height_zeroes_every_radius_with_relaxation() {
        let out = correct_with(CorrectionStrategy::relaxation(), 5.0, 0.0, CornerRadii::all(1.0));
        assert_eq!(out, CornerRadii::zero());
    }

    #[test]
    fn all_zero_radii_are_identity() {
        assert_eq!(correct(3.0, 2.0, CornerRadii::zero()), CornerRadii::zero());
        assert_eq!(correct(0.0, 0.0, CornerRadii::zero()), CornerRadii::zero());
    }

    #[test]
    fn negative_radii_count_as_zero() {
        let out = correct(1.0, 1.0, CornerRadii::new(-3.0, 0.4, 0.4, 0.4));
        assert_eq!(out, CornerRadii::new(0.0, 0.4, 0.4, 0.4));
    }

    // ── relaxation ────────────────────────────────────────────────────────

    #[test]
    fn relaxation_fits_each_pair() {
        let out = correct_with(CorrectionStrategy::relaxation(), 1.0, 1.0, CornerRadii::new(0.9, 0.3, 0.1, 0.1));
        assert!(is_feasible(1.0, 1.0, out, TOL));
        // Only the top pair overflowed; it is scaled to exactly fill the width.
        assert_abs_diff_eq!(out.top_left + out.top_right, 1.0, epsilon = 1e-12);
        assert_eq!(out.bottom_right, 0.1);
    }

    #[test]
    fn zero_pass_budget_falls_back_to_global_ratio() {
        let strategy = CorrectionStrategy::PairwiseRelaxation { max_passes: 0 };
        let radii = CornerRadii::new(0.9, 0.3, 0.1, 0.1);
        assert_eq!(correct_with(strategy, 1.0, 1.0, radii), correct(1.0, 1.0, radii));
    }

    // ── properties ────────────────────────────────────────────────────────

    fn radii_strategy() -> impl Strategy<Value = CornerRadii> {
        (0.0f64..100.0, 0.0f64..100.0, 0.0f64..100.0, 0.0f64..100.0)
            .prop_map(|(a, b, c, d)| CornerRadii::new(a, b, c, d))
    }

    proptest! {
        #[test]
        fn global_ratio_is_always_feasible(w in 0.0f64..100.0, h in 0.0f64..100.0, radii in radii_strategy()) {
            let out = correct(w, h, radii);
            prop_assert!(out.top_left + out.top_right <= w + TOL);
            prop_assert!(out.bottom_right + out.bottom_left <= w + TOL);
            prop_assert!(out.top_right + out.bottom_right <= h + TOL);
            prop_assert!(out.bottom_left + out.top_left <= h + TOL);
        }

        #[test]
        fn relaxation_is_always_feasible(w in 0.0f64..100.0, h in 0.0f64..100.0, radii in radii_strategy()) {
            let out = correct_with(CorrectionStrategy::relaxation(), w, h, radii);
            prop_assert!(is_feasible(w, h, out, TOL));
        }

        #[test]
        fn global_ratio_preserves_ratios(w in 0.01f64..100.0, h in 0.01f64..100.0, radii in radii_strategy()) {
            let s = scale_factor(w, h, radii);
            let out = correct(w, h, radii);
            prop_assert!(s > 0.0 && s <= 1.0);
            for (before, after) in radii.to_array().into_iter().zip(out.to_array()) {
                let expected = before * s;
                prop_assert!((after - expected).abs() <= 1e-9 * before.max(1.0));
            }
        }

        #[test]
        fn feasible_input_is_identity(w in 1.0f64..100.0, h in 1.0f64..100.0, f in 0.0f64..0.5) {
            let m = w.min(h) * f;
            let radii = CornerRadii::new(m, m * 0.5, m * 0.25, m);
            prop_assert_eq!(correct(w, h, radii), radii);
        }
    }
}
