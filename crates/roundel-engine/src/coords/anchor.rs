use core::str::FromStr;

use crate::error::Error;

/// Which point of a rectangle a caller-supplied position refers to.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// Fractions of the size that lie left of / below the anchored position.
    ///
    /// `(0, 0)` is the bottom-left corner, `(1, 1)` the top-right (y-up).
    #[inline]
    pub const fn fractions(self) -> (f64, f64) {
        match self {
            Anchor::TopLeft => (0.0, 1.0),
            Anchor::Top => (0.5, 1.0),
            Anchor::TopRight => (1.0, 1.0),
            Anchor::Left => (0.0, 0.5),
            Anchor::Center => (0.5, 0.5),
            Anchor::Right => (1.0, 0.5),
            Anchor::BottomLeft => (0.0, 0.0),
            Anchor::Bottom => (0.5, 0.0),
            Anchor::BottomRight => (1.0, 0.0),
        }
    }
}

impl FromStr for Anchor {
    type Err = Error;

    /// Accepts kebab/snake/space separated names and the two-letter short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let anchor = match key.as_str() {
            "topleft" | "tl" | "upperleft" => Anchor::TopLeft,
            "top" | "t" | "uppercenter" => Anchor::Top,
            "topright" | "tr" | "upperright" => Anchor::TopRight,
            "left" | "l" | "centerleft" => Anchor::Left,
            "center" | "c" | "middle" => Anchor::Center,
            "right" | "r" | "centerright" => Anchor::Right,
            "bottomleft" | "bl" | "lowerleft" => Anchor::BottomLeft,
            "bottom" | "b" | "lowercenter" => Anchor::Bottom,
            "bottomright" | "br" | "lowerright" => Anchor::BottomRight,
            _ => return Err(Error::unsupported("anchor", s)),
        };
        Ok(anchor)
    }
}
