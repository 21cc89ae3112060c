//! Owning match value
//!
//! A [`MatchResult`] records which filter matched, the full text it matched
//! against and the matched byte range inside that text. It is immutable once
//! built. The checked constructors all guarantee
//! `start_index <= end_index <= original_text.len()`, `length == end_index -
//! start_index`, and that both bounds sit on character boundaries.
//!
//! [`MatchResult::from_raw_parts`] skips those checks for callers that already
//! hold a valid range (the view conversion is the main one). It is the only way
//! to build an instance that breaks the invariant.

use super::builder::MatchResultBuilder;
use super::range::{self, Extent};
use crate::error::Result;
use crate::filter::{FilterRef, same_filter};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::Arc;

/// A filter match inside a text
#[derive(Clone)]
pub struct MatchResult {
    filter: FilterRef,
    original_text: Arc<str>,
    start_index: usize,
    end_index: usize,
    length: usize,
}

impl MatchResult {
    /// Build a match with the given fields verbatim. **Does not check anything.**
    ///
    /// The resulting instance may violate the range invariant if the caller
    /// passes inconsistent values; [`MatchResult::slice`] then panics. Use
    /// [`MatchResult::is_valid`] or [`MatchResult::try_slice`] when handling
    /// values of unknown origin.
    #[doc(hidden)]
    #[inline]
    pub fn from_raw_parts(
        filter: FilterRef,
        start_index: usize,
        end_index: usize,
        original_text: Arc<str>,
        length: usize,
    ) -> Self {
        Self {
            filter,
            original_text,
            start_index,
            end_index,
            length,
        }
    }

    /// Match spanning the whole of `original_text`
    pub fn whole(filter: FilterRef, original_text: impl Into<Arc<str>>) -> Self {
        let original_text = original_text.into();
        let length = original_text.len();
        Self::from_raw_parts(filter, 0, length, original_text, length)
    }

    /// Match from `start_index` to the end of `original_text`
    ///
    /// # Errors
    /// `start_index` is past the end of the text or inside a character.
    pub fn from_start(
        filter: FilterRef,
        original_text: impl Into<Arc<str>>,
        start_index: usize,
    ) -> Result<Self> {
        Self::checked(filter, original_text.into(), start_index, Extent::ToEnd)
    }

    /// Match of `length` bytes starting at `start_index`
    ///
    /// # Errors
    /// - `start_index` is past the end of the text
    /// - `start_index + length` is past the end of the text
    /// - either bound is inside a character
    pub fn with_length(
        filter: FilterRef,
        original_text: impl Into<Arc<str>>,
        start_index: usize,
        length: usize,
    ) -> Result<Self> {
        Self::checked(filter, original_text.into(), start_index, Extent::Length(length))
    }

    /// Match covering `[start_index, end_index)`
    ///
    /// # Errors
    /// - `start_index` is past the end of the text or past `end_index`
    /// - `end_index` is past the end of the text
    /// - either bound is inside a character
    pub fn with_range(
        filter: FilterRef,
        original_text: impl Into<Arc<str>>,
        start_index: usize,
        end_index: usize,
    ) -> Result<Self> {
        Self::checked(filter, original_text.into(), start_index, Extent::End(end_index))
    }

    /// Start a builder for callers whose arguments may be missing
    pub fn builder() -> MatchResultBuilder {
        MatchResultBuilder::default()
    }

    pub(crate) fn checked(
        filter: FilterRef,
        original_text: Arc<str>,
        start_index: usize,
        extent: Extent,
    ) -> Result<Self> {
        let bounds = range::normalize(&original_text, start_index, extent)?;
        Ok(Self::from_raw_parts(
            filter,
            bounds.start,
            bounds.end,
            original_text,
            bounds.length,
        ))
    }

    /// The filter that produced this match
    pub fn filter(&self) -> &FilterRef {
        &self.filter
    }

    /// Name of the filter that produced this match
    pub fn filter_name(&self) -> &'static str {
        self.filter.name()
    }

    /// The full text that was matched against
    pub fn original_text(&self) -> &Arc<str> {
        &self.original_text
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

    /// The matched portion of the original text
    ///
    /// # Panics
    /// Only for instances built with [`MatchResult::from_raw_parts`] whose
    /// range is invalid for the text.
    pub fn slice(&self) -> &str {
        &self.original_text[self.start_index..self.start_index + self.length]
    }

    /// Alias of [`MatchResult::slice`]
    pub fn span(&self) -> &str {
        self.slice()
    }

    /// The matched portion, or `None` if the stored range is unusable
    pub fn try_slice(&self) -> Option<&str> {
        let end = self.start_index.checked_add(self.length)?;
        self.original_text.get(self.start_index..end)
    }

    /// Re-check the range invariant.
    ///
    /// Always true for values from the checked constructors.
    pub fn is_valid(&self) -> bool {
        range::is_consistent(
            &self.original_text,
            self.start_index,
            self.end_index,
            self.length,
        )
    }
}

impl PartialEq for MatchResult {
    fn eq(&self, other: &Self) -> bool {
        same_filter(&self.filter, &other.filter)
            && self.start_index == other.start_index
            && self.end_index == other.end_index
            && self.length == other.length
            && self.original_text == other.original_text
    }
}

impl Eq for MatchResult {}

impl Hash for MatchResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Identity of the filter, not its contents
        Arc::as_ptr(&self.filter).cast::<()>().hash(state);
        self.original_text.hash(state);
        self.start_index.hash(state);
        self.end_index.hash(state);
        self.length.hash(state);
    }
}

impl fmt::Debug for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchResult")
            .field("filter", &self.filter.name())
            .field("original_text", &self.original_text)
            .field("start_index", &self.start_index)
            .field("end_index", &self.end_index)
            .field("length", &self.length)
            .finish()
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}..{}]",
            self.filter.name(),
            self.start_index,
            self.end_index
        )?;
        match self.try_slice() {
            Some(text) => write!(f, " {:?}", text),
            None => f.write_str(" <invalid range>"),
        }
    }
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MatchResult", 5)?;
        state.serialize_field("filter", self.filter.name())?;
        state.serialize_field("start_index", &self.start_index)?;
        state.serialize_field("end_index", &self.end_index)?;
        state.serialize_field("length", &self.length)?;
        state.serialize_field("matched", &self.try_slice())?;
        state.end()
    }
}
