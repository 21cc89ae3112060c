//! Process-wide single instances
//!
//! Stateless filters (the no-op filter being the obvious one) never need more
//! than one instance. A type implementing [`Singleton`] hands out the same
//! shared instance on every call; it is built lazily on first access and never
//! replaced.

use std::sync::Arc;

/// Type with a single shared instance
pub trait Singleton: Send + Sync + 'static {
    /// Get the one and only instance of this type
    fn instance() -> &'static Arc<Self>;
}

/// Implement [`Singleton`] for a type with a lazily built static instance.
///
/// ```
/// use counterspam::{Singleton, impl_singleton};
///
/// pub struct Blocklist {
///     words: Vec<&'static str>,
/// }
///
/// impl_singleton!(Blocklist, Blocklist { words: vec!["viagra", "casino"] });
///
/// assert!(std::sync::Arc::ptr_eq(Blocklist::instance(), Blocklist::instance()));
/// assert_eq!(Blocklist::instance().words.len(), 2);
/// ```
#[macro_export]
macro_rules! impl_singleton {
    ($ty:ty, $init:expr) => {
        impl $crate::Singleton for $ty {
            fn instance() -> &'static ::std::sync::Arc<Self> {
                static INSTANCE: ::std::sync::LazyLock<::std::sync::Arc<$ty>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::__private::tracing::debug!(
                            "Initializing singleton {}",
                            ::std::any::type_name::<$ty>()
                        );
                        ::std::sync::Arc::new($init)
                    });
                &INSTANCE
            }
        }
    };
}
