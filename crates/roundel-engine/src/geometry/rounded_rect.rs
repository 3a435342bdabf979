use crate::coords::{Anchor, CornerRadii, Point, Rect, Size};

use super::builder::build_path;
use super::correct::{CorrectionStrategy, correct_with};
use super::path::Path;

/// A rectangle paired with corner radii that are feasible for it.
///
/// Radii are corrected on construction, so every `RoundedRect` can be turned into a
/// non-self-intersecting outline.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RoundedRect {
    rect: Rect,
    radii: CornerRadii,
}

impl RoundedRect {
    /// Normalizes `rect` and corrects `radii` against it.
    pub fn new(rect: Rect, radii: impl Into<CornerRadii>, strategy: CorrectionStrategy) -> Self {
        let rect = rect.normalized();
        let radii = correct_with(strategy, rect.width(), rect.height(), radii.into());
        Self { rect, radii }
    }

    /// Rounded rectangle whose `anchor` point sits at `position`.
    pub fn anchored(
        position: Point,
        size: Size,
        anchor: Anchor,
        radii: impl Into<CornerRadii>,
        strategy: CorrectionStrategy,
    ) -> Self {
        Self::new(Rect::from_anchor(position, size, anchor), radii, strategy)
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Corrected radii.
    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    /// Outline with `arc_points` samples per rounded corner.
    #[inline]
    pub fn to_path(&self, arc_points: usize) -> Path {
        build_path(self.rect, self.radii, arc_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_corrects_radii() {
        let rr = RoundedRect::new(Rect::new(0.0, 0.0, 1.0, 1.0), 0.6, CorrectionStrategy::GlobalRatio);
        for r in rr.radii().to_array() {
            assert!((r - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn negative_size_is_normalized_before_correction() {
        let rr = RoundedRect::new(Rect::new(2.0, 2.0, -2.0, -1.0), [0.4; 4], CorrectionStrategy::GlobalRatio);
        assert_eq!(rr.rect(), Rect::new(0.0, 1.0, 2.0, 1.0));
        assert_eq!(rr.radii(), CornerRadii::all(0.4));
    }

    #[test]
    fn anchored_resolves_position() {
        let rr = RoundedRect::anchored(
            Point::new(0.0, 0.0),
            Size::new(2.0, 2.0),
            Anchor::BottomLeft,
            CornerRadii::zero(),
            CorrectionStrategy::GlobalRatio,
        );
        assert_eq!(rr.to_path(4).bounds(), Some(Rect::new(0.0, 0.0, 2.0, 2.0)));
    }
}
