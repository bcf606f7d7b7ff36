use std::fmt;

/// The index of a symbol within its alphabet.
pub type SymbolIndex = usize;

/// An immutable set of input symbols.
///
/// The symbols are kept sorted and free of duplicates, such that the index of
/// a symbol is stable for a given set of characters. This ordering is used
/// wherever a deterministic traversal over the symbols is required.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet containing the given symbols, duplicates are ignored.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Alphabet {
        let mut symbols: Vec<char> = symbols.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();

        Alphabet { symbols }
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true iff the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns true iff the given symbol is part of the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Returns the index of the given symbol, if it is part of the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<SymbolIndex> {
        self.symbols.binary_search(&symbol).ok()
    }

    /// Returns the symbol at the given index.
    pub fn symbol(&self, index: SymbolIndex) -> char {
        self.symbols[index]
    }

    /// Iterate over the symbols in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Returns the symbols as a sorted slice.
    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Alphabet::new(iter)
    }
}

impl From<&str> for Alphabet {
    fn from(symbols: &str) -> Self {
        Alphabet::new(symbols.chars())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;

        let mut first = true;
        for symbol in &self.symbols {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{symbol}")?;
            first = false;
        }

        write!(f, "}}")
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
