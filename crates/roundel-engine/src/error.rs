use thiserror::Error;

/// Errors surfaced by the roundel entry points.
///
/// Validation is eager: no geometry is computed and nothing is painted once
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument had the wrong arity or a non-finite / out-of-range value.
    #[error("invalid `{param}`: expected {expected}, found {found}")]
    InvalidInput {
        param: &'static str,
        expected: &'static str,
        found: String,
    },

    /// A named option (anchor, stroke style, gradient kind, ...) is not recognized.
    #[error("unsupported {option}: `{value}`")]
    UnsupportedOption { option: &'static str, value: String },
}

impl Error {
    pub(crate) fn invalid(param: &'static str, expected: &'static str, found: impl Into<String>) -> Self {
        Error::InvalidInput { param, expected, found: found.into() }
    }

    pub(crate) fn unsupported(option: &'static str, value: impl Into<String>) -> Self {
        Error::UnsupportedOption { option, value: value.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
