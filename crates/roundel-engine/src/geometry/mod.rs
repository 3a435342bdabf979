//! Geometry core: arc sampling, radius correction and outline construction.
//!
//! Everything here is a pure function of its inputs. Paths are produced in the
//! y-up path frame described in [`crate::coords`].

pub mod arc;
pub mod builder;
pub mod correct;
mod path;
mod rounded_rect;

pub use arc::sample_arc;
pub use builder::{build_path, vertex_count};
pub use correct::{CorrectionStrategy, correct, correct_with};
pub use path::{FillRule, Path};
pub use rounded_rect::RoundedRect;
