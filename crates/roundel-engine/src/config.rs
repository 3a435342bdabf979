use crate::geometry::CorrectionStrategy;

/// Samples per rounded corner used when no other value is configured.
pub const DEFAULT_ARC_POINTS: usize = 32;

/// Path construction parameters.
///
/// Keep this structure small; every field changes the produced geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PathConfig {
    /// Samples per rounded corner, endpoints included (at least 2).
    pub arc_points: usize,

    /// How infeasible radii are shrunk.
    pub strategy: CorrectionStrategy,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            arc_points: DEFAULT_ARC_POINTS,
            strategy: CorrectionStrategy::GlobalRatio,
        }
    }
}
