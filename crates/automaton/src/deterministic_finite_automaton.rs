use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use rustc_hash::FxHashMap;

use crate::Alphabet;
use crate::DfaBuilder;
use crate::DfaError;
use crate::GraphView;
use crate::SymbolIndex;

/// The index for a state.
pub type StateIndex = usize;

/// A named state of an automaton, states are identified by their name.
#[derive(Clone)]
pub struct State {
    name: String,
    accepting: bool,
}

impl State {
    pub fn new(name: impl Into<String>, accepting: bool) -> State {
        State {
            name: name.into(),
            accepting,
        }
    }

    /// Returns the name of the state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true iff this is an accepting state.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.accepting { '✓' } else { '✗' };
        write!(f, "{} ({mark})", self.name)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Represents a deterministic finite automaton with a total transition
/// function.
///
/// The transition function is stored as a dense table with one row per state
/// and one column per symbol of the alphabet. Every constructor validates that
/// this table is complete and only refers to states of the automaton, so all
/// the algorithms can rely on these invariants. An automaton is never changed
/// after construction.
#[derive(Clone)]
pub struct Dfa {
    states: Vec<State>,
    alphabet: Alphabet,
    transitions: Vec<StateIndex>,

    initial_state: StateIndex,

    /// Maps the name of a state to its index.
    names: FxHashMap<String, StateIndex>,
}

impl Dfa {
    /// Creates an automaton from its start state, states, alphabet and
    /// transitions given as `(from, symbol, to)` triples of state names.
    ///
    /// See [DfaBuilder] for the validation that takes place.
    pub fn new<S, T>(
        start: &str,
        states: impl IntoIterator<Item = State>,
        alphabet: Alphabet,
        transitions: T,
    ) -> Result<Dfa, DfaError>
    where
        S: AsRef<str>,
        T: IntoIterator<Item = (S, char, S)>,
    {
        let mut builder = DfaBuilder::new(alphabet);
        for state in states {
            builder.add_state(state.name, state.accepting)?;
        }

        for (from, symbol, to) in transitions {
            builder.add_transition(from.as_ref(), symbol, to.as_ref())?;
        }

        builder.build(start)
    }

    /// Creates an automaton from a dense transition table, where
    /// `table[state * alphabet.len() + symbol]` is the successor of `state`
    /// for the given symbol index.
    pub fn from_table(
        initial_state: StateIndex,
        states: Vec<State>,
        alphabet: Alphabet,
        table: Vec<StateIndex>,
    ) -> Result<Dfa, DfaError> {
        if alphabet.is_empty() {
            return Err(DfaError::EmptyAlphabet);
        }

        if initial_state >= states.len() {
            return Err(DfaError::UnknownState {
                name: format!("#{initial_state}"),
            });
        }

        let expected = states.len() * alphabet.len();
        if table.len() < expected {
            let missing = table.len();
            return Err(DfaError::Incomplete {
                state: states[missing / alphabet.len()].name.clone(),
                symbol: alphabet.symbol(missing % alphabet.len()),
            });
        } else if table.len() > expected {
            return Err(DfaError::TableSize {
                expected,
                found: table.len(),
            });
        }

        if let Some(to) = table.iter().find(|to| **to >= states.len()) {
            return Err(DfaError::UnknownState { name: format!("#{to}") });
        }

        let mut names = FxHashMap::default();
        for (index, state) in states.iter().enumerate() {
            if names.insert(state.name.clone(), index).is_some() {
                return Err(DfaError::DuplicateState {
                    name: state.name.clone(),
                });
            }
        }

        Ok(Dfa {
            states,
            alphabet,
            transitions: table,
            initial_state,
            names,
        })
    }

    /// Runs the automaton on the given word and returns true iff the word is
    /// accepted. Fails on the first symbol that is not part of the alphabet.
    pub fn run(&self, input: impl IntoIterator<Item = char>) -> Result<bool, DfaError> {
        let mut current = self.initial_state;

        for symbol in input {
            let symbol_index = self
                .alphabet
                .index_of(symbol)
                .ok_or(DfaError::InvalidSymbol { symbol })?;

            current = self.successor(current, symbol_index);
        }

        Ok(self.states[current].accepting)
    }

    /// Shorthand for [Dfa::run] on the characters of a string.
    pub fn accepts(&self, word: &str) -> Result<bool, DfaError> {
        self.run(word.chars())
    }

    /// Returns the index of the initial state
    pub fn initial_state_index(&self) -> StateIndex {
        self.initial_state
    }

    /// Returns a borrow of the initial state.
    pub fn initial_state(&self) -> &State {
        &self.states[self.initial_state]
    }

    /// Returns the state with the given index.
    pub fn state(&self, state_index: StateIndex) -> &State {
        &self.states[state_index]
    }

    /// Returns the index of the state with the given name.
    pub fn state_index(&self, name: &str) -> Option<StateIndex> {
        self.names.get(name).copied()
    }

    /// Returns all the states, ordered by their index.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Iterate over all state_index in the automaton
    pub fn iter_states(&self) -> impl Iterator<Item = StateIndex> {
        0..self.states.len()
    }

    /// Returns the indices of all accepting states.
    pub fn accepting_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.iter_states().filter(|index| self.states[*index].accepting)
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of transitions, which is always states times symbols.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// Returns the alphabet of the automaton.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the successor of the given state for the given symbol index.
    pub fn successor(&self, state_index: StateIndex, symbol_index: SymbolIndex) -> StateIndex {
        self.transitions[state_index * self.alphabet.len() + symbol_index]
    }

    /// Returns the outgoing transitions of a state as (symbol, to) pairs, in
    /// the order of the alphabet.
    pub fn outgoing_transitions(
        &self,
        state_index: StateIndex,
    ) -> impl Iterator<Item = (SymbolIndex, StateIndex)> + '_ {
        let width = self.alphabet.len();
        self.transitions[state_index * width..(state_index + 1) * width]
            .iter()
            .copied()
            .enumerate()
    }

    /// Returns a read-only structural view for renderers.
    pub fn graph_view(&self) -> GraphView<'_> {
        GraphView::new(self)
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Print some information about the automaton.
        writeln!(f, "Number of states: {}", self.states.len())?;
        writeln!(f, "Number of symbols: {}", self.alphabet.len())?;
        write!(f, "Number of transitions: {}", self.transitions.len())
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self)?;
        writeln!(f, "Initial state: {}", self.initial_state())?;
        writeln!(f, "Alphabet: {}", self.alphabet)?;

        for state_index in self.iter_states() {
            for (symbol_index, to) in self.outgoing_transitions(state_index) {
                writeln!(
                    f,
                    "{} --[{}]-> {}",
                    self.states[state_index],
                    self.alphabet.symbol(symbol_index),
                    self.states[to]
                )?;
            }
        }

        Ok(())
    }
}
