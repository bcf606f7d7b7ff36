use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashMap;

use crate::Alphabet;
use crate::Dfa;
use crate::DfaError;
use crate::State;
use crate::StateIndex;

/// Incrementally collects the states and transitions of an automaton, and
/// validates determinism and totality before an automaton is constructed.
pub struct DfaBuilder {
    alphabet: Alphabet,
    states: Vec<State>,
    names: FxHashMap<String, StateIndex>,

    /// Row-major table of (state, symbol) destinations.
    table: Vec<Option<StateIndex>>,
}

impl DfaBuilder {
    pub fn new(alphabet: Alphabet) -> DfaBuilder {
        DfaBuilder {
            alphabet,
            states: Vec::new(),
            names: FxHashMap::default(),
            table: Vec::new(),
        }
    }

    /// Adds a new state and returns its index.
    pub fn add_state(&mut self, name: impl Into<String>, accepting: bool) -> Result<StateIndex, DfaError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(DfaError::DuplicateState { name });
        }

        let index = self.states.len();
        self.names.insert(name.clone(), index);
        self.states.push(State::new(name, accepting));
        self.table.resize(self.table.len() + self.alphabet.len(), None);

        Ok(index)
    }

    /// Adds the transition `from --[symbol]-> to`, there can be at most one
    /// transition for every state and symbol.
    pub fn add_transition(&mut self, from: &str, symbol: char, to: &str) -> Result<(), DfaError> {
        let from_index = self.lookup(from)?;
        let to_index = self.lookup(to)?;
        let symbol_index = self
            .alphabet
            .index_of(symbol)
            .ok_or(DfaError::InvalidSymbol { symbol })?;

        let entry = &mut self.table[from_index * self.alphabet.len() + symbol_index];
        if entry.is_some() {
            return Err(DfaError::NonDeterministic {
                state: from.to_string(),
                symbol,
            });
        }

        *entry = Some(to_index);
        Ok(())
    }

    /// Constructs the automaton with the given start state.
    ///
    /// Every state reachable from the start state must have a transition for
    /// every symbol. An unreachable state is kept iff it has a transition for
    /// every symbol and all its successors are kept, so exactly the unreachable
    /// states that lack a transition, or can move to such a state, are left
    /// out. The kept states retain their relative order.
    pub fn build(self, start: &str) -> Result<Dfa, DfaError> {
        if self.alphabet.is_empty() {
            return Err(DfaError::EmptyAlphabet);
        }

        let initial_state = self.lookup(start)?;
        let width = self.alphabet.len();
        let reachable = self.reachable_from(initial_state);

        for (state_index, state) in self.states.iter().enumerate() {
            if !reachable[state_index] {
                continue;
            }

            for symbol_index in 0..width {
                if self.table[state_index * width + symbol_index].is_none() {
                    return Err(DfaError::Incomplete {
                        state: state.name().to_string(),
                        symbol: self.alphabet.symbol(symbol_index),
                    });
                }
            }
        }

        let kept = self.complete_states();
        if kept.iter().all(|keep| *keep) {
            let table = self.table.into_iter().flatten().collect();
            return Dfa::from_table(initial_state, self.states, self.alphabet, table);
        }

        let mut new_index: Vec<Option<StateIndex>> = vec![None; self.states.len()];
        let mut states = Vec::new();
        for (state_index, state) in self.states.into_iter().enumerate() {
            if kept[state_index] {
                new_index[state_index] = Some(states.len());
                states.push(state);
            }
        }

        debug!(
            "Discarded {} unreachable states with missing transitions",
            new_index.len() - states.len()
        );

        let mut table = Vec::with_capacity(states.len() * width);
        for (state_index, row) in self.table.chunks(width).enumerate() {
            if kept[state_index] {
                // Rows of kept states are complete and only refer to kept states.
                table.extend(row.iter().flatten().filter_map(|to| new_index[*to]));
            }
        }

        Dfa::from_table(
            new_index[initial_state].unwrap_or_default(),
            states,
            self.alphabet,
            table,
        )
    }

    fn lookup(&self, name: &str) -> Result<StateIndex, DfaError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| DfaError::UnknownState { name: name.to_string() })
    }

    /// Marks the states from which only states with a transition for every
    /// symbol can be reached.
    fn complete_states(&self) -> Vec<bool> {
        let width = self.alphabet.len();
        let mut kept: Vec<bool> = self
            .table
            .chunks(width)
            .map(|row| row.iter().all(Option::is_some))
            .collect();

        // Remove states that move to a removed state until stable.
        let mut changed = true;
        while changed {
            changed = false;
            for (state_index, row) in self.table.chunks(width).enumerate() {
                if kept[state_index] && row.iter().flatten().any(|to| !kept[*to]) {
                    kept[state_index] = false;
                    changed = true;
                }
            }
        }

        kept
    }

    /// Marks the states reachable over the transitions defined so far.
    fn reachable_from(&self, initial_state: StateIndex) -> Vec<bool> {
        let width = self.alphabet.len();
        let mut reachable = vec![false; self.states.len()];
        let mut queue = VecDeque::from([initial_state]);
        reachable[initial_state] = true;

        while let Some(state_index) = queue.pop_front() {
            for to in self.table[state_index * width..(state_index + 1) * width].iter().flatten() {
                if !reachable[*to] {
                    reachable[*to] = true;
                    queue.push_back(*to);
                }
            }
        }

        reachable
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_builder() {
        let mut builder = DfaBuilder::new(Alphabet::from("ab"));
        builder.add_state("p", false).unwrap();
        builder.add_state("q", true).unwrap();
        builder.add_transition("p", 'a', "q").unwrap();
        builder.add_transition("p", 'b', "p").unwrap();
        builder.add_transition("q", 'a', "q").unwrap();
        builder.add_transition("q", 'b', "p").unwrap();

        let dfa = builder.build("p").unwrap();
        assert_eq!(dfa.num_of_states(), 2);
        assert_eq!(dfa.accepts("ba"), Ok(true));
        assert_eq!(dfa.accepts("ab"), Ok(false));
    }

    #[test]
    fn test_builder_errors() {
        let mut builder = DfaBuilder::new(Alphabet::from("ab"));
        builder.add_state("p", false).unwrap();

        assert_eq!(
            builder.add_state("p", true),
            Err(DfaError::DuplicateState { name: "p".to_string() })
        );
        assert_eq!(
            builder.add_transition("p", 'a', "r"),
            Err(DfaError::UnknownState { name: "r".to_string() })
        );
        assert_eq!(
            builder.add_transition("p", 'c', "p"),
            Err(DfaError::InvalidSymbol { symbol: 'c' })
        );

        builder.add_transition("p", 'a', "p").unwrap();
        assert_eq!(
            builder.add_transition("p", 'a', "p"),
            Err(DfaError::NonDeterministic {
                state: "p".to_string(),
                symbol: 'a'
            })
        );

        assert_eq!(
            builder.build("p").unwrap_err(),
            DfaError::Incomplete {
                state: "p".to_string(),
                symbol: 'b'
            }
        );
    }

    #[test]
    fn test_builder_discards_incomplete_unreachable_states() {
        let mut builder = DfaBuilder::new(Alphabet::from("a"));
        builder.add_state("dead", true).unwrap();
        builder.add_state("p", false).unwrap();
        builder.add_state("q", true).unwrap();
        builder.add_transition("p", 'a', "q").unwrap();
        builder.add_transition("q", 'a', "p").unwrap();

        let dfa = builder.build("p").unwrap();
        assert_eq!(dfa.num_of_states(), 2);
        assert_eq!(dfa.state_index("dead"), None);
        assert_eq!(dfa.initial_state().name(), "p");
        assert_eq!(dfa.accepts("aaa"), Ok(true));
    }

    #[test]
    fn test_builder_keeps_complete_unreachable_states() {
        let mut builder = DfaBuilder::new(Alphabet::from("a"));
        builder.add_state("p", true).unwrap();
        builder.add_state("dead", false).unwrap();
        builder.add_state("before_dead", false).unwrap();
        builder.add_state("island", false).unwrap();
        builder.add_transition("p", 'a', "p").unwrap();
        builder.add_transition("before_dead", 'a', "dead").unwrap();
        builder.add_transition("island", 'a', "p").unwrap();

        let dfa = builder.build("p").unwrap();

        // Only the incomplete state and the state leading to it are removed.
        assert_eq!(dfa.num_of_states(), 2);
        assert_eq!(dfa.state_index("dead"), None);
        assert_eq!(dfa.state_index("before_dead"), None);
        assert_eq!(dfa.state_index("island"), Some(1));
        assert_eq!(dfa.successor(1, 0), 0);
    }

    #[test]
    fn test_builder_empty_alphabet() {
        let mut builder = DfaBuilder::new(Alphabet::default());
        builder.add_state("p", true).unwrap();

        assert_eq!(builder.build("p").unwrap_err(), DfaError::EmptyAlphabet);
    }
}
