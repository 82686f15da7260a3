//! Contains command extensions.

pub mod solve;
