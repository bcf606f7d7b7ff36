use log::debug;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use serde::Serialize;

use dfarust_automaton::Alphabet;
use dfarust_automaton::Dfa;
use dfarust_automaton::DfaBuilder;
use dfarust_automaton::DfaError;

/// The structured representation of an automaton that is exchanged in files.
///
/// ```json
/// {
///   "start": "s0",
///   "states": [{"name": "s0", "accepting": true}, {"name": "s1", "accepting": false}],
///   "alphabet": ["0", "1"],
///   "transitions": [
///     {"from": "s0", "symbol": "0", "to": "s0"},
///     {"from": "s0", "symbol": "1", "to": "s1"},
///     {"from": "s1", "symbol": "0", "to": "s1"},
///     {"from": "s1", "symbol": "1", "to": "s0"}
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DfaDocument {
    pub start: String,
    pub states: Vec<StateEntry>,
    pub alphabet: Vec<String>,
    pub transitions: Vec<TransitionEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    pub name: String,
    pub accepting: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransitionEntry {
    pub from: String,
    pub symbol: String,
    pub to: String,
}

/// Returns the document describing the given automaton.
pub fn dump(dfa: &Dfa) -> DfaDocument {
    let view = dfa.graph_view();

    DfaDocument {
        start: view.start().to_string(),
        states: view
            .nodes()
            .map(|(name, accepting)| StateEntry {
                name: name.to_string(),
                accepting,
            })
            .collect(),
        alphabet: view.symbols().iter().map(|symbol| symbol.to_string()).collect(),
        transitions: view
            .edges()
            .map(|edge| TransitionEntry {
                from: edge.from.to_string(),
                symbol: edge.symbol.to_string(),
                to: edge.to.to_string(),
            })
            .collect(),
    }
}

/// Constructs the automaton described by the given document.
///
/// Structural problems, such as references to unknown states, are reported as
/// [DfaError::MalformedDocument]. Transitions on symbols outside the alphabet,
/// multiple transitions for the same state and symbol, and missing transitions
/// for reachable states are reported by their corresponding error.
pub fn load(document: &DfaDocument) -> Result<Dfa, DfaError> {
    if document.alphabet.is_empty() {
        return Err(malformed("the alphabet is empty".to_string()));
    }

    let mut symbols = Vec::with_capacity(document.alphabet.len());
    for symbol in &document.alphabet {
        let symbol = parse_symbol(symbol)?;
        if symbols.contains(&symbol) {
            return Err(malformed(format!("symbol '{symbol}' occurs more than once in the alphabet")));
        }

        symbols.push(symbol);
    }

    if document.states.is_empty() {
        return Err(malformed("there are no states".to_string()));
    }

    let mut names: FxHashSet<&str> = FxHashSet::default();
    for state in &document.states {
        if !names.insert(state.name.as_str()) {
            return Err(malformed(format!("state '{}' is defined more than once", state.name)));
        }
    }

    if !names.contains(document.start.as_str()) {
        return Err(malformed(format!("unknown start state '{}'", document.start)));
    }

    let mut builder = DfaBuilder::new(Alphabet::new(symbols));
    for state in &document.states {
        builder.add_state(state.name.as_str(), state.accepting)?;
    }

    for transition in &document.transitions {
        for endpoint in [&transition.from, &transition.to] {
            if !names.contains(endpoint.as_str()) {
                return Err(malformed(format!(
                    "transition {} --[{}]-> {} refers to unknown state '{endpoint}'",
                    transition.from, transition.symbol, transition.to
                )));
            }
        }

        builder.add_transition(&transition.from, parse_symbol(&transition.symbol)?, &transition.to)?;
    }

    let dfa = builder.build(&document.start)?;
    debug!("Loaded automaton with {} states", dfa.num_of_states());

    Ok(dfa)
}

/// Symbols are stored as strings that must consist of a single character.
fn parse_symbol(text: &str) -> Result<char, DfaError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(malformed(format!("symbol \"{text}\" is not a single character"))),
    }
}

fn malformed(reason: String) -> DfaError {
    DfaError::MalformedDocument(reason)
}
