//! Coordinate and geometry value types shared by the geometry core and paint backends.
//!
//! Path space:
//! - one linear unit on both axes (see [`UnitSystem`])
//! - origin bottom-left
//! - +X right, +Y up
//!
//! Paint backends convert to device pixels through [`Viewport`], which flips Y.

mod anchor;
mod corner_radii;
mod point;
mod rect;
mod size;
mod viewport;

pub use anchor::Anchor;
pub use corner_radii::{Corner, CornerRadii};
pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use viewport::{UnitSystem, Viewport};
