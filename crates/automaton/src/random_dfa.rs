use rand::Rng;

use crate::Alphabet;
use crate::Dfa;
use crate::State;

/// Generates an automaton with the desired number of states over the given
/// alphabet, where every transition target is chosen uniformly and every state
/// is accepting with the given probability.
///
/// The states are named `s0, s1, ...` and `s0` is the initial state. Not all
/// states need to be reachable.
pub fn random_dfa(rng: &mut impl Rng, num_of_states: usize, alphabet: &Alphabet, accepting_probability: f64) -> Dfa {
    debug_assert!(num_of_states > 0, "An automaton requires at least one state");

    let states: Vec<State> = (0..num_of_states)
        .map(|index| State::new(format!("s{index}"), rng.random_bool(accepting_probability)))
        .collect();

    let table = (0..num_of_states * alphabet.len())
        .map(|_| rng.random_range(0..num_of_states))
        .collect();

    Dfa::from_table(0, states, alphabet.clone(), table).expect("A random automaton is a valid automaton")
}
