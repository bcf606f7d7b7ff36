use std::collections::VecDeque;

use log::debug;

use crate::Dfa;
use crate::StateIndex;

/// Returns the states reachable from the initial state in breadth first
/// order, where the successors of a state are visited in alphabet order.
pub fn breadth_first_order(dfa: &Dfa) -> Vec<StateIndex> {
    let mut visited = vec![false; dfa.num_of_states()];
    let mut order = Vec::new();

    let mut queue = VecDeque::from([dfa.initial_state_index()]);
    visited[dfa.initial_state_index()] = true;

    while let Some(state_index) = queue.pop_front() {
        order.push(state_index);

        for (_, to) in dfa.outgoing_transitions(state_index) {
            if !visited[to] {
                visited[to] = true;
                queue.push_back(to);
            }
        }
    }

    order
}

/// Returns for every state whether it is reachable from the initial state.
pub fn reachable_states(dfa: &Dfa) -> Vec<bool> {
    let mut reachable = vec![false; dfa.num_of_states()];
    for state_index in breadth_first_order(dfa) {
        reachable[state_index] = true;
    }

    reachable
}

/// Returns the automaton restricted to the states reachable from the initial
/// state. The remaining states are numbered in breadth first order, so the
/// initial state always has index zero.
pub fn restrict_to_reachable(dfa: &Dfa) -> Dfa {
    let order = breadth_first_order(dfa);

    let mut new_index = vec![0; dfa.num_of_states()];
    for (index, state_index) in order.iter().enumerate() {
        new_index[*state_index] = index;
    }

    let mut table = Vec::with_capacity(order.len() * dfa.alphabet().len());
    for state_index in &order {
        table.extend(dfa.outgoing_transitions(*state_index).map(|(_, to)| new_index[to]));
    }

    debug!(
        "Removed {} unreachable states",
        dfa.num_of_states() - order.len()
    );

    Dfa::from_table(
        0,
        order.iter().map(|state_index| dfa.state(*state_index).clone()).collect(),
        dfa.alphabet().clone(),
        table,
    )
    .expect("A restriction to the reachable states is a valid automaton")
}
