//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - record painted paths with their style, renderer-agnostic
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod key;
mod list;

pub use cmd::{DrawCmd, PathCmd};
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
