//! Core types for dripfeed.

pub mod update;
pub mod usage;

pub use update::*;
pub use usage::*;
