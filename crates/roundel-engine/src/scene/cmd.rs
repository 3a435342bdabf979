use crate::geometry::Path;
use crate::paint::Style;

/// Closed path plus the style it is painted with.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub path: Path,
    pub style: Style,
    /// Caller-supplied label (e.g. `bar-3`), carried for hit-testing and debugging.
    pub name: Option<String>,
}

impl PathCmd {
    #[inline]
    pub fn new(path: Path, style: Style, name: Option<String>) -> Self {
        Self { path, style, name }
    }
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Path(PathCmd),
}
