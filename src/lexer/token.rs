use std::collections::HashSet;
use std::ops::Index;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    ReservedWord,
    Identifier,
    Number,
    Symbol,
    Error,
}

impl TokenCategory {
    /// Scan order used by the lexer.
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::ReservedWord,
        TokenCategory::Identifier,
        TokenCategory::Number,
        TokenCategory::Symbol,
        TokenCategory::Error,
    ];

    pub fn index(self) -> usize {
        match self {
            TokenCategory::ReservedWord => 0,
            TokenCategory::Identifier => 1,
            TokenCategory::Number => 2,
            TokenCategory::Symbol => 3,
            TokenCategory::Error => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TokenCategory::ReservedWord => "P. Reservadas",
            TokenCategory::Identifier => "Identificadores",
            TokenCategory::Number => "Números",
            TokenCategory::Symbol => "Símbolos",
            TokenCategory::Error => "Errores",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineClassification {
    flags: [bool; 5],
}

impl LineClassification {
    pub fn has(&self, category: TokenCategory) -> bool {
        self.flags[category.index()]
    }

    pub(super) fn mark(&mut self, category: TokenCategory) {
        self.flags[category.index()] = true;
    }

    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|&f| f)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateCounts {
    counts: [usize; 5],
}

impl AggregateCounts {
    pub(super) fn add(&mut self, category: TokenCategory, n: usize) {
        self.counts[category.index()] += n;
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Index<TokenCategory> for AggregateCounts {
    type Output = usize;

    fn index(&self, category: TokenCategory) -> &usize {
        &self.counts[category.index()]
    }
}

pub type IdentifierSet = HashSet<String>;

#[derive(Clone, Debug, Default)]
pub struct LexicalReport {
    pub lines: Vec<LineClassification>,
    pub counts: AggregateCounts,
    pub identifiers: IdentifierSet,
}
