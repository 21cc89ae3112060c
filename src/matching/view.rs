//! Borrowing match, for scanning without allocation
//!
//! Filters that walk a text can describe candidates as [`ViewMatchResult`]s,
//! which borrow the filter handle and the text, and only turn the ones they
//! keep into owning [`MatchResult`]s. The conversion trusts the view's own
//! validation and goes through the unchecked constructor; `into_shared` only
//! does so after confirming the shared text is the view's text.

use super::range::{self, Extent};
use super::result::MatchResult;
use crate::error::Result;
use crate::filter::FilterRef;
use std::ops::Range;
use std::sync::Arc;

/// A filter match that borrows its text
#[derive(Debug, Clone, Copy)]
pub struct ViewMatchResult<'t> {
    filter: &'t FilterRef,
    original_text: &'t str,
    start_index: usize,
    end_index: usize,
    length: usize,
}

impl<'t> ViewMatchResult<'t> {
    /// View spanning the whole of `original_text`
    pub fn whole(filter: &'t FilterRef, original_text: &'t str) -> Self {
        Self {
            filter,
            original_text,
            start_index: 0,
            end_index: original_text.len(),
            length: original_text.len(),
        }
    }

    /// View from `start_index` to the end of `original_text`
    ///
    /// # Errors
    /// `start_index` is past the end of the text or inside a character.
    pub fn from_start(
        filter: &'t FilterRef,
        original_text: &'t str,
        start_index: usize,
    ) -> Result<Self> {
        Self::checked(filter, original_text, start_index, Extent::ToEnd)
    }

    /// View of `length` bytes starting at `start_index`
    ///
    /// # Errors
    /// - `start_index` is past the end of the text
    /// - `start_index + length` is past the end of the text
    /// - either bound is inside a character
    pub fn with_length(
        filter: &'t FilterRef,
        original_text: &'t str,
        start_index: usize,
        length: usize,
    ) -> Result<Self> {
        Self::checked(filter, original_text, start_index, Extent::Length(length))
    }

    /// View covering `[start_index, end_index)`
    ///
    /// # Errors
    /// - `start_index` is past the end of the text or past `end_index`
    /// - `end_index` is past the end of the text
    /// - either bound is inside a character
    pub fn with_range(
        filter: &'t FilterRef,
        original_text: &'t str,
        start_index: usize,
        end_index: usize,
    ) -> Result<Self> {
        Self::checked(filter, original_text, start_index, Extent::End(end_index))
    }

    fn checked(
        filter: &'t FilterRef,
        original_text: &'t str,
        start_index: usize,
        extent: Extent,
    ) -> Result<Self> {
        let bounds = range::normalize(original_text, start_index, extent)?;
        Ok(Self {
            filter,
            original_text,
            start_index: bounds.start,
            end_index: bounds.end,
            length: bounds.length,
        })
    }

    /// The filter that produced this match
    pub fn filter(&self) -> &'t FilterRef {
        self.filter
    }

    /// The full text that was matched against
    pub fn original_text(&self) -> &'t str {
        self.original_text
    }

    /// Inclusive start byte offset
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Exclusive end byte offset
    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// Length of the match in bytes
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the match covers no bytes
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The matched range as `start_index..end_index`
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// The matched portion, borrowed for the lifetime of the original text
    pub fn slice(&self) -> &'t str {
        &self.original_text[self.start_index..self.end_index]
    }

    /// Convert into an owning match, sharing `text` when it holds the text this
    /// view was built over.
    ///
    /// When `text` differs, the view's own text is copied instead, exactly as
    /// [`MatchResult::from`] does, so the result is always valid.
    pub fn into_shared(self, text: &Arc<str>) -> MatchResult {
        if !self.is_over(text) {
            tracing::debug!(
                filter = self.filter.name(),
                "view shared against a different text; copying"
            );
            return MatchResult::from(self);
        }
        MatchResult::from_raw_parts(
            Arc::clone(self.filter),
            self.start_index,
            self.end_index,
            Arc::clone(text),
            self.length,
        )
    }

    /// Whether `text` holds the same contents as this view's original text
    fn is_over(&self, text: &str) -> bool {
        let same_allocation = std::ptr::eq(text.as_ptr(), self.original_text.as_ptr())
            && text.len() == self.original_text.len();
        same_allocation || text == self.original_text
    }
}

impl From<ViewMatchResult<'_>> for MatchResult {
    fn from(view: ViewMatchResult<'_>) -> Self {
        MatchResult::from_raw_parts(
            Arc::clone(view.filter),
            view.start_index,
            view.end_index,
            Arc::from(view.original_text),
            view.length,
        )
    }
}
