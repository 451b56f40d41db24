//! Computation layer: configuration, descriptor tasks, sequence generators and
//! progress reporting.
//!
//! Everything here operates on the data types of [`crate::core`] and is driven by
//! the entry points in [`crate::workflows`].

pub mod config;
pub mod descriptors;
pub mod error;
pub mod generators;
pub mod progress;
pub mod utils;
