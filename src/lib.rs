//! # Counterspam - match model and filter contracts
//!
//! Counterspam is the shared layer of an extensible text-filtering framework.
//! It does not detect anything by itself; it defines:
//!
//! - **[`Filter`]**: the contract every filter implements (`count`, `is_match`,
//!   `matches`)
//! - **[`FilterWithOptions`]**: filters that expose their configuration
//! - **[`Singleton`]**: one shared instance per stateless filter type
//! - **[`MatchResult`]**: the immutable, validated record of a single match
//! - **[`ViewMatchResult`]**: a borrowing match for allocation-free scanning
//!
//! ## Writing a filter
//!
//! ```rust
//! use counterspam::{Filter, FilterRef, MatchResult, Matches};
//! use std::sync::Arc;
//!
//! /// Flags every occurrence of "spam"
//! struct SpamWord;
//!
//! impl Filter for SpamWord {
//!     fn name(&self) -> &'static str {
//!         "SpamWord"
//!     }
//!
//!     fn count(&self, text: &str) -> usize {
//!         text.matches("spam").count()
//!     }
//!
//!     fn matches(self: Arc<Self>, text: Arc<str>) -> Matches {
//!         let filter: FilterRef = self;
//!         let starts: Vec<usize> = text.match_indices("spam").map(|(i, _)| i).collect();
//!         Box::new(starts.into_iter().filter_map(move |start| {
//!             MatchResult::with_length(filter.clone(), text.clone(), start, 4).ok()
//!         }))
//!     }
//! }
//!
//! let filter = Arc::new(SpamWord);
//! assert!(filter.is_match("no spam please"));
//!
//! let found: Vec<MatchResult> = filter.matches(Arc::from("spam, spam")).collect();
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[1].range(), 6..10);
//! ```
//!
//! ## Building matches
//!
//! ```rust
//! use counterspam::{EmptyFilter, MatchResult, Param, shared_filter};
//!
//! let filter = shared_filter::<EmptyFilter>();
//!
//! let m = MatchResult::with_range(filter.clone(), "12345", 1, 3)?;
//! assert_eq!(m.slice(), "23");
//!
//! let err = MatchResult::with_length(filter, "12345", 1, 10).unwrap_err();
//! assert_eq!(err.param(), Param::Length);
//! # Ok::<(), counterspam::MatchError>(())
//! ```
//!
//! Indices are byte offsets into the text and must fall on character
//! boundaries.

pub mod error;
pub mod filter;
pub mod matching;
pub mod singleton;

pub use error::{MatchError, Param, Result};
pub use filter::{
    DescribeOptions, EmptyFilter, Filter, FilterRef, FilterWithOptions, Matches, same_filter,
    shared_filter,
};
pub use matching::{MatchResult, MatchResultBuilder, ViewMatchResult};
pub use singleton::Singleton;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
