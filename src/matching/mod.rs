//! Match values produced by filters

mod builder;
mod range;
mod result;
mod view;

pub use builder::MatchResultBuilder;
pub use result::MatchResult;
pub use view::ViewMatchResult;
