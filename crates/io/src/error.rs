use thiserror::Error;

use dfarust_automaton::DfaError;

#[derive(Error, Debug)]
pub enum IOError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Automaton(#[from] DfaError),
}
