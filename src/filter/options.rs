//! Filters that carry a configuration

use super::Filter;
use serde::Serialize;

/// Filter that accepts options
///
/// The options are fixed when the filter is constructed and only ever exposed
/// read-only. Options types are expected to be plain serde structs with a
/// `Default` impl so hosts can load them from any config format.
pub trait FilterWithOptions: Filter {
    /// The filter's configuration type
    type Options;

    /// Get the filter's configuration
    fn options(&self) -> &Self::Options;
}

/// Type-erased view of a filter's options.
///
/// [`FilterWithOptions`] has an associated type and so cannot be used behind
/// `dyn`. Any filter whose options serialize gets this trait for free, which
/// lets callers display the active configuration without knowing the concrete
/// filter.
pub trait DescribeOptions: Filter {
    /// Render the active options as JSON
    fn describe_options(&self) -> serde_json::Result<serde_json::Value>;
}

impl<F> DescribeOptions for F
where
    F: FilterWithOptions,
    F::Options: Serialize,
{
    fn describe_options(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.options())
    }
}
