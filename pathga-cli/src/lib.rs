//! A command line interface library: readers and writers of the supported formats, solver
//! configuration and process interruption.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod extensions;
