use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use log::debug;
use log::trace;
use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use dfarust_automaton::Dfa;
use dfarust_automaton::DfaError;
use dfarust_automaton::State;
use dfarust_automaton::StateIndex;

/// The rules to combine the accepting flags of paired states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AcceptRule {
    /// Accepting when both states are accepting.
    Intersection,
    /// Accepting when either state is accepting.
    Union,
    /// Accepting when only the left state is accepting.
    Difference,
}

impl AcceptRule {
    /// Returns whether the paired state is accepting.
    pub fn accepts(self, left: bool, right: bool) -> bool {
        match self {
            AcceptRule::Intersection => left && right,
            AcceptRule::Union => left || right,
            AcceptRule::Difference => left && !right,
        }
    }
}

impl fmt::Display for AcceptRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcceptRule::Intersection => write!(f, "intersection"),
            AcceptRule::Union => write!(f, "union"),
            AcceptRule::Difference => write!(f, "difference"),
        }
    }
}

/// Returns the automaton accepting the words accepted by both automata.
pub fn intersection(left: &Dfa, right: &Dfa) -> Result<Dfa, DfaError> {
    combine_with(left, right, AcceptRule::Intersection)
}

/// Returns the automaton accepting the words accepted by either automaton.
pub fn union(left: &Dfa, right: &Dfa) -> Result<Dfa, DfaError> {
    combine_with(left, right, AcceptRule::Union)
}

/// Returns the automaton accepting the words accepted by `left` but not by `right`.
pub fn difference(left: &Dfa, right: &Dfa) -> Result<Dfa, DfaError> {
    combine_with(left, right, AcceptRule::Difference)
}

/// Shorthand for [combine] with one of the predefined rules.
pub fn combine_with(left: &Dfa, right: &Dfa, rule: AcceptRule) -> Result<Dfa, DfaError> {
    combine(left, right, |left, right| rule.accepts(left, right))
}

/// Computes the product automaton of two automata over the same alphabet.
///
/// The states of the product are pairs of states, named `(left,right)`, that
/// move in lock step on every symbol. A pair is accepting iff `accept` holds
/// for the accepting flags of its components. Only the pairs reachable from
/// the pair of initial states are constructed, numbered in breadth first
/// order.
pub fn combine<F>(left: &Dfa, right: &Dfa, accept: F) -> Result<Dfa, DfaError>
where
    F: Fn(bool, bool) -> bool,
{
    if left.alphabet() != right.alphabet() {
        return Err(DfaError::AlphabetMismatch {
            left: left.alphabet().to_string(),
            right: right.alphabet().to_string(),
        });
    }

    let start = Instant::now();

    let mut pairs: FxHashMap<(StateIndex, StateIndex), StateIndex> = FxHashMap::default();
    let mut names: FxHashSet<String> = FxHashSet::default();
    let mut states: Vec<State> = Vec::new();
    let mut table: Vec<StateIndex> = Vec::new();
    let mut queue: VecDeque<(StateIndex, StateIndex)> = VecDeque::new();

    // Returns the index of the pair, introducing a new state when it has not been seen.
    let mut index_of = |pair: (StateIndex, StateIndex),
                        states: &mut Vec<State>,
                        queue: &mut VecDeque<(StateIndex, StateIndex)>| {
        *pairs.entry(pair).or_insert_with(|| {
            let (left_state, right_state) = (left.state(pair.0), right.state(pair.1));

            // Names can clash when the original names contain commas.
            let mut name = format!("({},{})", left_state.name(), right_state.name());
            while !names.insert(name.clone()) {
                name.push('\'');
            }

            trace!("Introduced pair {name}");
            states.push(State::new(
                name,
                accept(left_state.is_accepting(), right_state.is_accepting()),
            ));
            queue.push_back(pair);
            states.len() - 1
        })
    };

    index_of(
        (left.initial_state_index(), right.initial_state_index()),
        &mut states,
        &mut queue,
    );

    // Pairs are numbered in the order that they are queued, so the rows are
    // appended in order.
    while let Some((left_index, right_index)) = queue.pop_front() {
        for ((_, left_to), (_, right_to)) in left
            .outgoing_transitions(left_index)
            .zip(right.outgoing_transitions(right_index))
        {
            let to = index_of((left_to, right_to), &mut states, &mut queue);
            table.push(to);
        }
    }

    debug!(
        "Product of {} and {} states has {} reachable states, computed in {:.3}s",
        left.num_of_states(),
        right.num_of_states(),
        states.len(),
        start.elapsed().as_secs_f64()
    );

    Dfa::from_table(0, states, left.alphabet().clone(), table)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_case::test_case;
    use test_log::test;

    use dfarust_automaton::random_dfa;
    use dfarust_automaton::Alphabet;
    use dfarust_utilities::words_up_to;

    use super::*;

    /// Accepts the binary words that end in a zero.
    fn ends_in_zero() -> Dfa {
        Dfa::new(
            "other",
            [State::new("other", false), State::new("zero", true)],
            Alphabet::from("01"),
            [
                ("other", '0', "zero"),
                ("other", '1', "other"),
                ("zero", '0', "zero"),
                ("zero", '1', "other"),
            ],
        )
        .unwrap()
    }

    /// Accepts the binary words of even length.
    fn even_length() -> Dfa {
        Dfa::new(
            "even",
            [State::new("even", true), State::new("odd", false)],
            Alphabet::from("01"),
            [
                ("even", '0', "odd"),
                ("even", '1', "odd"),
                ("odd", '0', "even"),
                ("odd", '1', "even"),
            ],
        )
        .unwrap()
    }

    #[test_case("00", true ; "ends in zero with even length")]
    #[test_case("10", true ; "ends in zero after a one")]
    #[test_case("0", false ; "odd length")]
    #[test_case("01", false ; "ends in one")]
    #[test_case("", false ; "empty word")]
    fn test_intersection(word: &str, expected: bool) {
        let product = intersection(&ends_in_zero(), &even_length()).unwrap();

        assert_eq!(product.accepts(word), Ok(expected));
    }

    #[test]
    fn test_product_names() {
        let product = intersection(&ends_in_zero(), &even_length()).unwrap();

        assert_eq!(product.initial_state().name(), "(other,even)");
        assert_eq!(product.num_of_states(), 4);
    }

    #[test]
    fn test_alphabet_mismatch() {
        let other = Dfa::new(
            "p",
            [State::new("p", true)],
            Alphabet::from("ab"),
            [("p", 'a', "p"), ("p", 'b', "p")],
        )
        .unwrap();

        assert_eq!(
            union(&ends_in_zero(), &other).unwrap_err(),
            DfaError::AlphabetMismatch {
                left: "{0, 1}".to_string(),
                right: "{a, b}".to_string()
            }
        );
    }

    #[test]
    fn test_product_prunes_unreachable_pairs() {
        // Both automata count modulo two, so only the diagonal pairs are reachable.
        let product = union(&even_length(), &even_length()).unwrap();

        assert_eq!(product.num_of_states(), 2);
    }

    #[test]
    fn test_clashing_names() {
        let left = Dfa::new(
            "a,b",
            [State::new("a,b", true), State::new("a", false)],
            Alphabet::from("x"),
            [("a,b", 'x', "a"), ("a", 'x', "a,b")],
        )
        .unwrap();
        let right = Dfa::new(
            "c",
            [State::new("c", true), State::new("b,c", false)],
            Alphabet::from("x"),
            [("c", 'x', "b,c"), ("b,c", 'x', "c")],
        )
        .unwrap();

        // Both (a,b , c) and (a , b,c) are reachable and print as (a,b,c).
        let product = intersection(&left, &right).unwrap();
        assert_eq!(product.num_of_states(), 2);
        assert_eq!(product.state(0).name(), "(a,b,c)");
        assert_eq!(product.state(1).name(), "(a,b,c)'");
    }

    #[test]
    fn test_random_product_laws() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet = Alphabet::from("ab");

        for _ in 0..10 {
            let left = random_dfa(&mut rng, 6, &alphabet, 0.5);
            let right = random_dfa(&mut rng, 5, &alphabet, 0.5);

            let both = intersection(&left, &right).unwrap();
            let either = union(&left, &right).unwrap();
            let only_left = difference(&left, &right).unwrap();

            for word in words_up_to(alphabet.as_slice(), 6) {
                let in_left = left.accepts(&word).unwrap();
                let in_right = right.accepts(&word).unwrap();

                assert_eq!(both.accepts(&word), Ok(in_left && in_right), "Intersection differs on {word:?}");
                assert_eq!(either.accepts(&word), Ok(in_left || in_right), "Union differs on {word:?}");
                assert_eq!(only_left.accepts(&word), Ok(in_left && !in_right), "Difference differs on {word:?}");
            }
        }
    }
}
