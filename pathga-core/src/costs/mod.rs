//! Contains travel cost lookup logic: external service abstraction and its memoizing wrapper.

/// A travel cost: duration or distance.
pub type Cost = f64;

mod cache;
pub use self::cache::CostCache;

mod oracle;
pub use self::oracle::*;

mod service;
pub use self::service::*;
