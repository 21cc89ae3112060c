//! Builder for matches assembled from optional parts

use super::range::Extent;
use super::result::MatchResult;
use crate::error::{MatchError, Param, Result};
use crate::filter::FilterRef;
use std::sync::Arc;

/// Assemble a [`MatchResult`] from pieces that may or may not be present.
///
/// Useful when the filter or text arrives from somewhere that can omit it
/// (deserialized input, plugin boundaries). `build` fails with
/// [`MatchError::MissingArgument`] when the filter or text was never set, then
/// validates the range like the other checked constructors.
#[derive(Default, Clone)]
pub struct MatchResultBuilder {
    filter: Option<FilterRef>,
    original_text: Option<Arc<str>>,
    start_index: Option<usize>,
    end_index: Option<usize>,
    length: Option<usize>,
}

impl MatchResultBuilder {
    pub fn filter(mut self, filter: FilterRef) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn original_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.original_text = Some(text.into());
        self
    }

    /// Inclusive start; defaults to 0
    pub fn start_index(mut self, start_index: usize) -> Self {
        self.start_index = Some(start_index);
        self
    }

    pub fn end_index(mut self, end_index: usize) -> Self {
        self.end_index = Some(end_index);
        self
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Validate and build the match.
    ///
    /// Without an end or a length the match runs to the end of the text. When
    /// both are given they must agree, otherwise `length` is reported.
    pub fn build(self) -> Result<MatchResult> {
        let filter = self
            .filter
            .ok_or(MatchError::MissingArgument(Param::Filter))?;
        let original_text = self
            .original_text
            .ok_or(MatchError::MissingArgument(Param::OriginalText))?;
        let start_index = self.start_index.unwrap_or(0);

        let extent = match (self.end_index, self.length) {
            (None, None) => Extent::ToEnd,
            (None, Some(length)) => Extent::Length(length),
            (Some(end_index), _) => Extent::End(end_index),
        };
        let text_len = original_text.len();
        let result = MatchResult::checked(filter, original_text, start_index, extent)?;

        match self.length {
            Some(length) if length != result.len() => Err(MatchError::OutOfRange {
                param: Param::Length,
                value: length,
                text_len,
            }),
            _ => Ok(result),
        }
    }
}
