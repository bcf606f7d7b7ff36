use thiserror::Error;

/// The errors that can occur when constructing, loading or operating on an
/// automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DfaError {
    #[error("symbol '{symbol}' is not in the alphabet")]
    InvalidSymbol { symbol: char },

    #[error("state '{state}' already has a transition for symbol '{symbol}'")]
    NonDeterministic { state: String, symbol: char },

    #[error("state '{state}' has no transition for symbol '{symbol}'")]
    Incomplete { state: String, symbol: char },

    #[error("the alphabets {left} and {right} are not the same")]
    AlphabetMismatch { left: String, right: String },

    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("state '{name}' is not a state of the automaton")]
    UnknownState { name: String },

    #[error("state '{name}' is defined more than once")]
    DuplicateState { name: String },

    #[error("transition table has {found} entries, expected {expected}")]
    TableSize { expected: usize, found: usize },

    /// Construction over an empty alphabet. Loading a document reports this
    /// case as [DfaError::MalformedDocument] instead.
    #[error("an automaton requires a non-empty alphabet")]
    EmptyAlphabet,
}
