use std::time::Instant;

use log::debug;

use dfarust_automaton::restrict_to_reachable;
use dfarust_automaton::Dfa;

use crate::language_equivalence_sigref;
use crate::quotient_dfa;

/// Returns the minimal automaton that accepts the same language.
///
/// Unreachable states are removed first, after which the language equivalent
/// states are merged. The result is unique up to the naming of states, and
/// every state is named after the smallest original name that it represents.
/// The states are numbered in breadth first order from the initial state, so
/// the result only depends on the language and the original names.
pub fn minimize(dfa: &Dfa) -> Dfa {
    let start = Instant::now();

    let reachable = restrict_to_reachable(dfa);
    let partition = language_equivalence_sigref(&reachable);
    let quotient = quotient_dfa(&reachable, &partition);

    // Renumber such that the order does not depend on the original numbering.
    let result = restrict_to_reachable(&quotient);

    debug!(
        "Minimized {} states into {} states in {:.3}s",
        dfa.num_of_states(),
        result.num_of_states(),
        start.elapsed().as_secs_f64()
    );
    result
}
