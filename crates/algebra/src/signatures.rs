use dfarust_automaton::Dfa;
use dfarust_automaton::StateIndex;

use crate::Partition;

/// The builder used to construct the signature, reused to avoid reallocations.
pub type SignatureBuilder = Vec<usize>;

/// The type of a signature. For a deterministic automaton every state has
/// exactly one successor per symbol, so a signature is a fixed length vector.
pub type Signature = Vec<usize>;

/// Computes the signature of a state in an automaton
/// sig(s, pi) = (pi(s), pi(delta(s, a_1)), ..., pi(delta(s, a_n)))
///
/// Including pi(s) guarantees that the next partition refines pi.
pub fn dfa_signature(
    state_index: StateIndex,
    dfa: &Dfa,
    partition: &impl Partition,
    builder: &mut SignatureBuilder,
) {
    builder.clear();
    builder.push(partition.block_number(state_index));

    for (_, to) in dfa.outgoing_transitions(state_index) {
        builder.push(partition.block_number(to));
    }
}
