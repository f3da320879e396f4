//! Plain-text rendering of an [`Analysis`].

use std::fmt;

use crate::lexer::{LexicalReport, TokenCategory};
use crate::Analysis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Lexical,
    Syntax,
    Semantics,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Lexical, Section::Syntax, Section::Semantics];
}

pub struct Report<'a, 'src> {
    analysis: &'a Analysis<'src>,
    sections: Vec<Section>,
}

impl<'a, 'src> Report<'a, 'src> {
    pub fn new(analysis: &'a Analysis<'src>) -> Self {
        Self {
            analysis,
            sections: Section::ALL.to_vec(),
        }
    }

    pub fn sections(mut self, sections: &[Section]) -> Self {
        self.sections = sections.to_vec();
        self
    }
}

fn fmt_table(f: &mut fmt::Formatter<'_>, lexical: &LexicalReport) -> fmt::Result {
    let first = lexical.lines.len().to_string().len().max("Total".len());

    write!(f, "{:<first$}", "Línea")?;
    for category in TokenCategory::ALL {
        write!(f, "  {}", category.label())?;
    }
    writeln!(f)?;

    for (i, row) in lexical.lines.iter().enumerate() {
        write!(f, "{:<first$}", i + 1)?;
        for category in TokenCategory::ALL {
            let mark = if row.has(category) { "x" } else { "" };
            write!(f, "  {:<w$}", mark, w = category.label().chars().count())?;
        }
        writeln!(f)?;
    }

    write!(f, "{:<first$}", "Total")?;
    for category in TokenCategory::ALL {
        let w = category.label().chars().count();
        write!(f, "  {:<w$}", lexical.counts[category])?;
    }
    writeln!(f)
}

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            match section {
                Section::Lexical => fmt_table(f, &self.analysis.lexical)?,
                Section::Syntax => writeln!(f, "Sintáctico: {}", self.analysis.syntax.status())?,
                Section::Semantics => {
                    writeln!(f, "Semántico: {}", self.analysis.semantics.status())?
                }
            }
        }
        Ok(())
    }
}
