//!
//! This crate defines general utility functions.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

pub mod test_utility;
pub mod timing;

pub use test_utility::*;
pub use timing::*;
