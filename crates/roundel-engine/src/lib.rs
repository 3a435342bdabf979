//! Roundel engine crate.
//!
//! Builds closed outlines of rectangles whose four corners carry independent radii,
//! shrinking infeasible radii by one shared factor, and hands them to a paint step.
//!
//! ```
//! use roundel_engine::draw::{DrawOptions, draw_rounded_rect};
//! use roundel_engine::paint::{Color, Style};
//! use roundel_engine::scene::DrawList;
//!
//! let mut list = DrawList::new();
//! let path = draw_rounded_rect(
//!     &mut list,
//!     &[0.5, 0.5],
//!     &[1.0, 1.0],
//!     &[0.6, 0.6, 0.6, 0.6],
//!     &Style::filled(Color::black()),
//!     &DrawOptions::returning_path(),
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(path.len(), 4 * roundel_engine::config::DEFAULT_ARC_POINTS);
//! ```

pub mod chart;
pub mod config;
pub mod coords;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod scene;

pub use error::{Error, Result};
