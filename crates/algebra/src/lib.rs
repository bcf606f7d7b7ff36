//!
//! A crate containing the algorithms that operate on deterministic finite
//! automata: minimization by signature refinement, the product construction
//! for intersection, union and difference, and language comparisons.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod equivalence;
mod indexed_partition;
mod minimize;
mod product;
mod quotient;
mod signature_refinement;
mod signatures;

pub use equivalence::*;
pub use indexed_partition::*;
pub use minimize::*;
pub use product::*;
pub use quotient::*;
pub use signature_refinement::*;
pub use signatures::*;
