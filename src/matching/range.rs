//! Range normalization shared by every checked constructor
//!
//! Each public entry point describes a match range differently (whole text,
//! start to end, start plus length, start and end). They all compute the
//! missing piece here so the boundary checks exist exactly once.

use crate::error::{MatchError, Param, Result};

/// How the end of a range was supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extent {
    /// Runs to the end of the text
    ToEnd,
    /// A length counted from the start
    Length(usize),
    /// An exclusive end index
    End(usize),
}

/// A validated `[start, end)` range with its length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bounds {
    pub start: usize,
    pub end: usize,
    pub length: usize,
}

/// Validate `start` and `extent` against `text` and derive the full bounds.
pub(crate) fn normalize(text: &str, start: usize, extent: Extent) -> Result<Bounds> {
    let text_len = text.len();

    let out_of_range = |param: Param, value: usize| {
        tracing::trace!(%param, value, text_len, "rejected match range");
        MatchError::OutOfRange {
            param,
            value,
            text_len,
        }
    };

    // start_index is checked first; for explicit bounds it must also not pass the end
    let start_ok = match extent {
        Extent::End(end) => start <= text_len && start <= end,
        Extent::ToEnd | Extent::Length(_) => start <= text_len,
    };
    if !start_ok {
        return Err(out_of_range(Param::StartIndex, start));
    }

    let (end, end_param) = match extent {
        Extent::ToEnd => (text_len, Param::EndIndex),
        Extent::Length(length) => match start.checked_add(length) {
            Some(end) if end <= text_len => (end, Param::Length),
            _ => return Err(out_of_range(Param::Length, length)),
        },
        Extent::End(end) => {
            if end > text_len {
                return Err(out_of_range(Param::EndIndex, end));
            }
            (end, Param::EndIndex)
        }
    };

    check_boundary(text, Param::StartIndex, start, start)?;
    let end_value = match extent {
        Extent::Length(length) => length,
        Extent::ToEnd | Extent::End(_) => end,
    };
    check_boundary(text, end_param, end, end_value)?;

    Ok(Bounds {
        start,
        end,
        length: end - start,
    })
}

/// Re-check an already built range without deriving anything.
///
/// Used to audit instances that came through the unchecked path.
pub(crate) fn is_consistent(text: &str, start: usize, end: usize, length: usize) -> bool {
    start <= end
        && end <= text.len()
        && end - start == length
        && text.is_char_boundary(start)
        && text.is_char_boundary(end)
}

fn check_boundary(text: &str, param: Param, index: usize, value: usize) -> Result<()> {
    if text.is_char_boundary(index) {
        Ok(())
    } else {
        tracing::trace!(%param, index, "match bound splits a character");
        Err(MatchError::NotCharBoundary { param, value })
    }
}
