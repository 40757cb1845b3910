//! JSON configuration for the demo binaries.

pub mod demo;
pub mod sweep;
