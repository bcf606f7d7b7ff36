use dfarust_automaton::Dfa;
use dfarust_automaton::State;
use dfarust_automaton::StateIndex;

/// A trait for partition refinment algorithms that expose the block number for
/// every state. Can be used to compute the quotient automaton.
///
/// The invariants are that the union of all blocks is the original set, and
/// that each block contains distinct elements
pub trait Partition {
    /// Returns the block number for the given state.
    fn block_number(&self, state_index: usize) -> usize;

    /// Returns the number of blocks in the partition.
    fn num_of_blocks(&self) -> usize;
}

/// Returns a new automaton based on the given partition.
///
/// All states in a single block are replaced by a single state, named after
/// the lexicographically smallest name in the block. The partition must be
/// stable, see [crate::is_valid_refinement], and every block must be
/// non-empty.
pub fn quotient_dfa(dfa: &Dfa, partition: &impl Partition) -> Dfa {
    let num_of_blocks = partition.num_of_blocks();

    // The first state of every block determines its transitions.
    let mut representative: Vec<Option<StateIndex>> = vec![None; num_of_blocks];
    let mut names: Vec<Option<&str>> = vec![None; num_of_blocks];

    for state_index in dfa.iter_states() {
        let block = partition.block_number(state_index);
        debug_assert!(
            block < num_of_blocks,
            "Quotienting assumes that the block numbers do not exceed the number of blocks"
        );

        representative[block].get_or_insert(state_index);

        let name = dfa.state(state_index).name();
        let smallest = names[block].get_or_insert(name);
        if name < *smallest {
            *smallest = name;
        }
    }

    let mut states = Vec::with_capacity(num_of_blocks);
    let mut table = Vec::with_capacity(num_of_blocks * dfa.alphabet().len());
    for block in 0..num_of_blocks {
        let representative_index = representative[block].expect("Every block of the partition contains a state");

        states.push(State::new(
            names[block].unwrap_or_default(),
            dfa.state(representative_index).is_accepting(),
        ));

        table.extend(
            dfa.outgoing_transitions(representative_index)
                .map(|(_, to)| partition.block_number(to)),
        );
    }

    Dfa::from_table(
        partition.block_number(dfa.initial_state_index()),
        states,
        dfa.alphabet().clone(),
        table,
    )
    .expect("The quotient of a total automaton is a total automaton")
}

#[cfg(test)]
mod tests {
    use dfarust_automaton::Alphabet;
    use test_log::test;

    use crate::IndexedPartition;

    use super::*;

    #[test]
    fn test_quotient_dfa() {
        let dfa = Dfa::new(
            "c",
            [State::new("c", false), State::new("b", true), State::new("a", true)],
            Alphabet::from("x"),
            [("c", 'x', "b"), ("b", 'x', "a"), ("a", 'x', "b")],
        )
        .unwrap();

        let mut partition = IndexedPartition::new(3);
        partition.set_block(1, 1);
        partition.set_block(2, 1);

        let quotient = quotient_dfa(&dfa, &partition);

        assert_eq!(quotient.num_of_states(), 2);
        assert_eq!(quotient.initial_state().name(), "c");
        assert_eq!(quotient.state(1).name(), "a");
        assert!(quotient.state(1).is_accepting());
        assert_eq!(quotient.successor(1, 0), 1);
    }
}
