//!
//! A crate containing deterministic finite automata, their construction and
//! the simulation of input words.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod alphabet;
mod builder;
mod deterministic_finite_automaton;
mod error;
mod graph_view;
mod random_dfa;
mod reachability;

pub use alphabet::*;
pub use builder::*;
pub use deterministic_finite_automaton::*;
pub use error::*;
pub use graph_view::*;
pub use random_dfa::*;
pub use reachability::*;
