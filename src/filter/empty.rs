//! The no-op filter

use super::{Filter, Matches};
use std::sync::Arc;

/// Filter that never matches anything
///
/// Used wherever the framework needs a filter but no detection should happen.
/// Always reach it through [`crate::Singleton::instance`] or
/// [`super::shared_filter`]; it cannot be constructed directly.
#[derive(Debug)]
pub struct EmptyFilter {
    _private: (),
}

crate::impl_singleton!(EmptyFilter, EmptyFilter { _private: () });

impl Filter for EmptyFilter {
    fn name(&self) -> &'static str {
        "EmptyFilter"
    }

    fn count(&self, _text: &str) -> usize {
        0
    }

    fn is_match(&self, _text: &str) -> bool {
        false
    }

    fn matches(self: Arc<Self>, _text: Arc<str>) -> Matches {
        Box::new(std::iter::empty())
    }
}
