//! Filter contracts
//!
//! Every filter in the framework implements [`Filter`]. Filters that carry a
//! configuration additionally implement [`FilterWithOptions`], and stateless
//! filters can be shared process-wide through [`crate::Singleton`].

mod empty;
mod options;

pub use empty::EmptyFilter;
pub use options::{DescribeOptions, FilterWithOptions};

use crate::matching::MatchResult;
use crate::singleton::Singleton;
use std::sync::Arc;

/// Shared handle to any filter
pub type FilterRef = Arc<dyn Filter>;

/// Lazy sequence of matches returned by [`Filter::matches`]
pub type Matches = Box<dyn Iterator<Item = MatchResult> + Send>;

/// Base trait that all filters implement
///
/// All three operations are pure functions of the text. Implementations may
/// cache internally but must keep `count`, `is_match` and `matches` consistent
/// with each other for the same input.
pub trait Filter: Send + Sync + 'static {
    /// Get the name of this filter for debugging/logging
    fn name(&self) -> &'static str;

    /// Count the matches in `text`.
    ///
    /// Must equal the number of items [`Filter::matches`] yields for the same text.
    fn count(&self, text: &str) -> usize;

    /// Check whether `text` contains at least one match.
    ///
    /// Implementations should override this to stop at the first match.
    fn is_match(&self, text: &str) -> bool {
        self.count(text) > 0
    }

    /// Find every match in `text`.
    ///
    /// Each item carries this filter, `text` itself and a valid range into it.
    /// The sequence is finite and calling `matches` again with the same text
    /// yields the same matches in the same order.
    fn matches(self: Arc<Self>, text: Arc<str>) -> Matches;
}

impl std::fmt::Debug for dyn Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Filter").field(&self.name()).finish()
    }
}

/// Get a [`FilterRef`] to the shared instance of a singleton filter.
///
/// No allocation happens after the first call for a given type.
pub fn shared_filter<F>() -> FilterRef
where
    F: Filter + Singleton,
{
    F::instance().clone()
}

/// Whether two handles point at the same filter instance
pub fn same_filter(a: &FilterRef, b: &FilterRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
