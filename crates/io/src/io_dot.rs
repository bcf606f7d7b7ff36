//! Conversion of automata to the Graphviz DOT format.
//!
//! The generated output follows these conventions:
//! - An invisible node with an edge points at the initial state.
//! - Accepting states are drawn as double circles, other states as circles.
//! - All transitions between the same pair of states are merged into a single
//!   edge labelled with the sorted, comma separated symbols.
//!
//! Rendering the output to an image is left to the Graphviz tools, e.g.,
//! `dot -Tpng output.dot -o output.png`.

use std::fmt;
use std::io::Write;

use rustc_hash::FxHashMap;

use dfarust_automaton::Dfa;
use dfarust_automaton::GraphView;

/// The direction in which the graph is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RankDir {
    #[default]
    LeftRight,
    TopBottom,
    RightLeft,
    BottomTop,
}

impl RankDir {
    pub fn as_str(self) -> &'static str {
        match self {
            RankDir::LeftRight => "LR",
            RankDir::TopBottom => "TB",
            RankDir::RightLeft => "RL",
            RankDir::BottomTop => "BT",
        }
    }
}

/// Configuration options for DOT output generation.
#[derive(Clone, Debug)]
pub struct DotConfig {
    /// Direction of the layout (default: left to right)
    pub rankdir: RankDir,
    /// Shape for non-accepting states (default: "circle")
    pub state_shape: &'static str,
    /// Shape for accepting states (default: "doublecircle")
    pub accepting_shape: &'static str,
    /// Font for states and edges (default: "Arial")
    pub font: &'static str,
    /// Whether the graph is labelled with its alphabet (default: true)
    pub show_alphabet: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        DotConfig {
            rankdir: RankDir::default(),
            state_shape: "circle",
            accepting_shape: "doublecircle",
            font: "Arial",
            show_alphabet: true,
        }
    }
}

/// Displays the structural view of an automaton in the DOT format.
pub struct Dot<'a> {
    view: GraphView<'a>,
    config: &'a DotConfig,
}

impl<'a> Dot<'a> {
    pub fn new(dfa: &'a Dfa, config: &'a DotConfig) -> Dot<'a> {
        Dot {
            view: dfa.graph_view(),
            config,
        }
    }
}

/// Returns the DOT representation of the automaton.
pub fn to_dot(dfa: &Dfa, config: &DotConfig) -> String {
    Dot::new(dfa, config).to_string()
}

/// Writes the DOT representation of the automaton to the given writer.
pub fn write_dot(writer: &mut impl Write, dfa: &Dfa, config: &DotConfig) -> std::io::Result<()> {
    write!(writer, "{}", Dot::new(dfa, config))
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;

        writeln!(f, "digraph dfa {{")?;
        writeln!(f, "  rankdir={};", config.rankdir.as_str())?;

        if config.show_alphabet {
            let symbols: Vec<String> = self.view.symbols().iter().map(|symbol| symbol.to_string()).collect();
            writeln!(f, "  label={};", quoted(&format!("DFA with alphabet {{{}}}", symbols.join(", "))))?;
            writeln!(f, "  fontsize=18;")?;
        }

        writeln!(
            f,
            "  node [shape={}, fontname={}, fontsize=12];",
            config.state_shape,
            quoted(config.font)
        )?;
        writeln!(f, "  edge [fontname={}, fontsize=10];", quoted(config.font))?;

        let marker = start_marker(&self.view);
        writeln!(f, "  {} [style=invis];", quoted(&marker))?;
        writeln!(f, "  {} -> {} [color=green];", quoted(&marker), quoted(self.view.start()))?;

        for (name, accepting) in self.view.nodes() {
            if accepting {
                writeln!(f, "  {} [shape={}];", quoted(name), config.accepting_shape)?;
            } else {
                writeln!(f, "  {};", quoted(name))?;
            }
        }

        // Group the symbols of all edges between the same pair of states.
        let mut groups: Vec<((&str, &str), Vec<char>)> = Vec::new();
        let mut group_index: FxHashMap<(&str, &str), usize> = FxHashMap::default();
        for edge in self.view.edges() {
            let index = *group_index.entry((edge.from, edge.to)).or_insert_with(|| {
                groups.push(((edge.from, edge.to), Vec::new()));
                groups.len() - 1
            });

            groups[index].1.push(edge.symbol);
        }

        for ((from, to), mut symbols) in groups {
            symbols.sort_unstable();
            let label: Vec<String> = symbols.iter().map(|symbol| symbol.to_string()).collect();

            writeln!(
                f,
                "  {} -> {} [label={}];",
                quoted(from),
                quoted(to),
                quoted(&label.join(", "))
            )?;
        }

        write!(f, "}}")
    }
}

/// Returns the identifier of the invisible start node, which differs from the
/// names of all states.
fn start_marker(view: &GraphView<'_>) -> String {
    let mut marker = String::from("__start");
    while view.nodes().any(|(name, _)| name == marker) {
        marker.push('_');
    }
    marker
}

/// Returns the text as a quoted DOT identifier.
fn quoted(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use dfarust_automaton::Alphabet;
    use dfarust_automaton::State;

    use super::*;

    fn three_states() -> Dfa {
        Dfa::new(
            "s0",
            [State::new("s0", false), State::new("s1", false), State::new("s2", true)],
            Alphabet::from("01"),
            [
                ("s0", '0', "s1"),
                ("s0", '1', "s0"),
                ("s1", '0', "s2"),
                ("s1", '1', "s0"),
                ("s2", '0', "s2"),
                ("s2", '1', "s2"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_to_dot() {
        let dot = to_dot(&three_states(), &DotConfig::default());

        assert!(dot.starts_with("digraph dfa {\n  rankdir=LR;\n"));
        assert!(dot.contains("label=\"DFA with alphabet {0, 1}\";"));
        assert!(dot.contains("\"__start\" -> \"s0\" [color=green];"));
        assert!(dot.contains("\"s2\" [shape=doublecircle];"));
        assert!(dot.contains("\"s0\" -> \"s1\" [label=\"0\"];"));
        assert!(dot.contains("\"s2\" -> \"s2\" [label=\"0, 1\"];"));
        assert!(dot.ends_with('}'));
    }

    #[test]
    fn test_write_dot_config() {
        let config = DotConfig {
            rankdir: RankDir::TopBottom,
            show_alphabet: false,
            ..DotConfig::default()
        };

        let mut output = Vec::new();
        write_dot(&mut output, &three_states(), &config).unwrap();
        let dot = String::from_utf8(output).unwrap();

        assert!(dot.contains("rankdir=TB;"));
        assert!(!dot.contains("DFA with alphabet"));
    }

    #[test]
    fn test_start_marker_differs_from_states() {
        let dfa = Dfa::new(
            "__start",
            [State::new("__start", true), State::new("__start_", false)],
            Alphabet::from("0"),
            [("__start", '0', "__start_"), ("__start_", '0', "__start")],
        )
        .unwrap();

        let dot = to_dot(&dfa, &DotConfig::default());

        assert!(dot.contains("\"__start__\" [style=invis];"));
        assert!(dot.contains("\"__start__\" -> \"__start\" [color=green];"));
        assert!(!dot.contains("\"__start\" [style=invis];"));
        assert!(!dot.contains("\"__start\" -> \"__start\""));
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
