use crate::Dfa;

/// A read-only structural view of an automaton for renderers: the states with
/// their accepting markers, the labelled edges and the start state.
#[derive(Clone, Copy)]
pub struct GraphView<'a> {
    dfa: &'a Dfa,
}

/// A labelled edge of the structural view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<'a> {
    pub from: &'a str,
    pub symbol: char,
    pub to: &'a str,
}

impl<'a> GraphView<'a> {
    pub fn new(dfa: &'a Dfa) -> GraphView<'a> {
        GraphView { dfa }
    }

    /// Returns the name of the start state.
    pub fn start(&self) -> &'a str {
        self.dfa.initial_state().name()
    }

    /// Returns the (name, accepting) pairs of all states, ordered by index.
    pub fn nodes(&self) -> impl Iterator<Item = (&'a str, bool)> + 'a {
        self.dfa
            .states()
            .iter()
            .map(|state| (state.name(), state.is_accepting()))
    }

    /// Returns all edges, ordered by source state and then by symbol.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'a>> + 'a {
        let dfa = self.dfa;
        dfa.iter_states().flat_map(move |state_index| {
            dfa.outgoing_transitions(state_index)
                .map(move |(symbol_index, to)| Edge {
                    from: dfa.state(state_index).name(),
                    symbol: dfa.alphabet().symbol(symbol_index),
                    to: dfa.state(to).name(),
                })
        })
    }

    /// Returns the symbols of the alphabet in sorted order.
    pub fn symbols(&self) -> &'a [char] {
        self.dfa.alphabet().as_slice()
    }
}
