//! Error types for match construction.
//!
//! Every checked entry point reports exactly one offending parameter, even when
//! several are out of range at once. Checks run in a fixed order: start range,
//! end/length range, start boundary, end/length boundary.

use std::fmt;
use thiserror::Error;

/// A named argument of a match constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Filter,
    OriginalText,
    StartIndex,
    EndIndex,
    Length,
}

impl Param {
    /// The argument name as it appears in the constructor signatures
    pub fn as_str(self) -> &'static str {
        match self {
            Param::Filter => "filter",
            Param::OriginalText => "original_text",
            Param::StartIndex => "start_index",
            Param::EndIndex => "end_index",
            Param::Length => "length",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure raised by the checked match constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A required argument was not supplied.
    #[error("missing required argument `{0}`")]
    MissingArgument(Param),

    /// An index or length falls outside the text, or contradicts another bound.
    #[error("`{param}` is out of range: {value} (text length {text_len})")]
    OutOfRange {
        param: Param,
        value: usize,
        text_len: usize,
    },

    /// An index lands inside a multi-byte UTF-8 character.
    #[error("`{param}` is not on a character boundary: byte {value}")]
    NotCharBoundary { param: Param, value: usize },
}

impl MatchError {
    /// The parameter this error is about
    pub fn param(&self) -> Param {
        match self {
            MatchError::MissingArgument(param) => *param,
            MatchError::OutOfRange { param, .. } => *param,
            MatchError::NotCharBoundary { param, .. } => *param,
        }
    }

    /// The rejected value, when the error is about a value rather than an absence
    pub fn value(&self) -> Option<usize> {
        match self {
            MatchError::MissingArgument(_) => None,
            MatchError::OutOfRange { value, .. } | MatchError::NotCharBoundary { value, .. } => {
                Some(*value)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_names() {
        assert_eq!(Param::StartIndex.to_string(), "start_index");
        assert_eq!(Param::EndIndex.to_string(), "end_index");
        assert_eq!(Param::OriginalText.to_string(), "original_text");
    }

    #[test]
    fn test_error_messages() {
        let err = MatchError::OutOfRange {
            param: Param::Length,
            value: 10,
            text_len: 5,
        };
        assert_eq!(err.to_string(), "`length` is out of range: 10 (text length 5)");
        assert_eq!(err.param(), Param::Length);
        assert_eq!(err.value(), Some(10));

        let err = MatchError::MissingArgument(Param::Filter);
        assert_eq!(err.to_string(), "missing required argument `filter`");
        assert_eq!(err.value(), None);
    }
}
