use dfarust_automaton::breadth_first_order;
use dfarust_automaton::Dfa;
use dfarust_automaton::DfaError;

use crate::minimize;

/// Returns true iff the automaton accepts no word at all, i.e., no accepting
/// state is reachable.
pub fn is_empty(dfa: &Dfa) -> bool {
    !breadth_first_order(dfa)
        .into_iter()
        .any(|state_index| dfa.state(state_index).is_accepting())
}

/// Returns true iff the reachable parts of both automata are equal up to the
/// names of the states.
///
/// Both automata are numbered canonically by a breadth first search from the
/// initial state, after which the transitions and accepting flags must match.
pub fn is_isomorphic(left: &Dfa, right: &Dfa) -> bool {
    if left.alphabet() != right.alphabet() {
        return false;
    }

    let left_order = breadth_first_order(left);
    let right_order = breadth_first_order(right);
    if left_order.len() != right_order.len() {
        return false;
    }

    let canonical = |dfa: &Dfa, order: &[usize]| {
        let mut index = vec![0; dfa.num_of_states()];
        for (position, state_index) in order.iter().enumerate() {
            index[*state_index] = position;
        }
        index
    };

    let left_index = canonical(left, &left_order);
    let right_index = canonical(right, &right_order);

    left_order.iter().zip(right_order.iter()).all(|(l, r)| {
        left.state(*l).is_accepting() == right.state(*r).is_accepting()
            && left
                .outgoing_transitions(*l)
                .zip(right.outgoing_transitions(*r))
                .all(|((_, left_to), (_, right_to))| left_index[left_to] == right_index[right_to])
    })
}

/// Returns true iff both automata accept the same language, by comparing
/// their minimal automata.
pub fn is_equivalent(left: &Dfa, right: &Dfa) -> Result<bool, DfaError> {
    if left.alphabet() != right.alphabet() {
        return Err(DfaError::AlphabetMismatch {
            left: left.alphabet().to_string(),
            right: right.alphabet().to_string(),
        });
    }

    Ok(is_isomorphic(&minimize(left), &minimize(right)))
}
