//!
//! A crate containing IO related functionality. This includes the structured
//! document used to exchange automata, reading and writing it as JSON, and
//! writing the Graphviz DOT format for rendering.
//!

#![forbid(unsafe_code)]

mod document;
mod error;

pub mod io_dot;
pub mod io_json;

pub use document::*;
pub use error::*;
