use std::mem::swap;

use log::debug;
use log::trace;
use rustc_hash::FxHashMap;

use dfarust_automaton::Dfa;
use dfarust_automaton::StateIndex;

use crate::dfa_signature;
use crate::IndexedPartition;
use crate::Partition;
use crate::Signature;
use crate::SignatureBuilder;

/// Computes the language equivalence partition of the states of an automaton
/// using signature refinement.
///
/// Starts from the partition that separates accepting and non-accepting
/// states, and splits blocks until all states in a block move to the same
/// blocks for every symbol. Block numbers are assigned in the order of the
/// states, so the block of state zero is always block zero.
pub fn language_equivalence_sigref(dfa: &Dfa) -> IndexedPartition {
    let initial = IndexedPartition::from_keys(dfa.states().iter().map(|state| state.is_accepting()));

    let partition = signature_refinement(dfa, initial, |state_index, partition, builder| {
        dfa_signature(state_index, dfa, partition, builder)
    });

    debug_assert!(
        is_valid_refinement(dfa, &partition),
        "The resulting partition is not a language equivalence partition for automaton {:?}",
        dfa
    );

    partition
}

/// General signature refinement algorithm that accepts an arbitrary
/// signature. The signature of a state must contain its current block, such
/// that every iteration refines the previous partition.
fn signature_refinement<F>(dfa: &Dfa, initial: IndexedPartition, mut signature: F) -> IndexedPartition
where
    F: FnMut(StateIndex, &IndexedPartition, &mut SignatureBuilder),
{
    let mut id: FxHashMap<Signature, usize> = FxHashMap::default();
    let mut builder = SignatureBuilder::new();

    let mut old_count = initial.num_of_blocks();
    let mut partition = initial;
    let mut next_partition = IndexedPartition::new(dfa.num_of_states());

    // Refine partitions until stable.
    let mut iteration = 0;
    loop {
        // Clear the current partition to start the next blocks.
        id.clear();

        for state_index in dfa.iter_states() {
            // Compute the signature of a single state
            signature(state_index, &partition, &mut builder);
            trace!("State {state_index} signature {:?}", builder);

            // Keep track of the index for every state.
            let new_id = match id.get(&builder) {
                Some(block) => *block,
                None => {
                    let block = id.len();
                    id.insert(builder.clone(), block);
                    block
                }
            };

            next_partition.set_block(state_index, new_id);
        }

        iteration += 1;
        debug!("Iteration {iteration}, found {} blocks", id.len());

        swap(&mut partition, &mut next_partition);
        if id.len() == old_count {
            break;
        }

        old_count = id.len();

        debug_assert!(
            iteration <= dfa.num_of_states(),
            "There can never be more splits than number of states"
        );
    }

    partition
}

/// Returns true iff the given partition is stable: all states in a block agree
/// on being accepting and move to the same blocks for every symbol.
pub fn is_valid_refinement(dfa: &Dfa, partition: &impl Partition) -> bool {
    let mut builder = SignatureBuilder::new();
    let mut representative_builder = SignatureBuilder::new();

    let mut representative: Vec<Option<StateIndex>> = vec![None; partition.num_of_blocks()];
    for state_index in dfa.iter_states() {
        let block = partition.block_number(state_index);
        let representative_index = *representative[block].get_or_insert(state_index);

        // Check that this block only contains states that are equivalent to the representative state.
        dfa_signature(state_index, dfa, partition, &mut builder);
        dfa_signature(representative_index, dfa, partition, &mut representative_builder);

        if builder != representative_builder
            || dfa.state(state_index).is_accepting() != dfa.state(representative_index).is_accepting()
        {
            debug!("State {state_index} differs from representative state {representative_index} in block {block}");
            return false;
        }
    }

    true
}
