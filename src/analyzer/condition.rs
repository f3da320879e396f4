use crate::vocabulary::Vocabulary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand<'a> {
    /// A bare word: a variable name or a numeric literal.
    Word(&'a str),
    /// A double-quoted literal, quotes included.
    Quoted(&'a str),
}

impl<'a> Operand<'a> {
    fn new(s: &'a str) -> Self {
        if s.starts_with('"') {
            Operand::Quoted(s)
        } else {
            Operand::Word(s)
        }
    }

    pub fn as_word(&self) -> Option<&'a str> {
        match self {
            Operand::Word(w) => Some(w),
            Operand::Quoted(_) => None,
        }
    }
}

/// `<left> <op> <right>` found somewhere inside the text of a `si (...)` condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison<'a> {
    pub left: &'a str,
    pub right: Operand<'a>,
}

impl<'a> Comparison<'a> {
    pub fn parse(vocabulary: &Vocabulary, condition: &'a str) -> Option<Self> {
        let caps = vocabulary.comparison.captures(condition)?;
        let left = caps.get(1)?.as_str();
        let right = Operand::new(caps.get(3)?.as_str());

        Some(Self { left, right })
    }
}
