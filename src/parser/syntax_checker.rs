use thiserror::Error;

use crate::vocabulary::{
    Vocabulary, CONDITIONAL_OPENER, END_MARKER, PROCESS_MARKER, START_MARKER,
};

pub const SYNTAX_OK: &str = "Sintaxis correcta";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxViolation {
    #[error("El código debe comenzar con 'Inicio;'.")]
    MissingStart,
    #[error("El código debe terminar con 'Fin;'.")]
    MissingEnd,
    #[error("Falta la declaración de 'proceso;'.")]
    MissingProcess,
    #[error("Estructura incorrecta de 'si'. Debe ser 'si (condición) {{'.")]
    MalformedConditional,
    #[error("Falta cerrar un bloque con '}}'.")]
    UnclosedBlock,
    #[error("Falta abrir un bloque con '{{'.")]
    UnopenedBlock,
    #[error("Falta punto y coma al final de la línea {line}.")]
    MissingSemicolon { line: usize },
}

#[derive(Clone, Debug)]
pub struct SyntaxReport<'src> {
    pub violations: Vec<SyntaxViolation>,
    source: &'src str,
}

impl<'src> SyntaxReport<'src> {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn status(&self) -> String {
        if self.is_ok() {
            return SYNTAX_OK.to_string();
        }
        self.violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The checked text, untouched.
    pub fn passthrough(&self) -> &'src str {
        self.source
    }
}

pub struct SyntaxChecker<'v> {
    vocabulary: &'v Vocabulary,
    violations: Vec<SyntaxViolation>,
}

impl<'v> SyntaxChecker<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            violations: vec![],
        }
    }

    fn report(&mut self, violation: SyntaxViolation) {
        tracing::debug!(%violation, "syntax violation");
        self.violations.push(violation);
    }

    fn check_markers(&mut self, s: &str) {
        if !s.starts_with(START_MARKER) {
            self.report(SyntaxViolation::MissingStart);
        }
        if !s.ends_with(END_MARKER) {
            self.report(SyntaxViolation::MissingEnd);
        }
        if !s.contains(PROCESS_MARKER) {
            self.report(SyntaxViolation::MissingProcess);
        }
    }

    fn check_conditionals(&mut self, s: &str) {
        let malformed = s
            .match_indices(CONDITIONAL_OPENER)
            .any(|(i, _)| !self.vocabulary.conditional_block.is_match(&s[i..]));
        if malformed {
            self.report(SyntaxViolation::MalformedConditional);
        }
    }

    fn check_braces(&mut self, s: &str) {
        let opens = s.contains('{');
        let closes = s.contains('}');
        if opens && !closes {
            self.report(SyntaxViolation::UnclosedBlock);
        }
        if closes && !opens {
            self.report(SyntaxViolation::UnopenedBlock);
        }
    }

    fn check_terminators(&mut self, s: &str) {
        for (i, line) in s.split('\n').enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty()
                || trimmed.ends_with([';', '{', '}'])
                || line.contains(CONDITIONAL_OPENER)
            {
                continue;
            }
            self.report(SyntaxViolation::MissingSemicolon { line: i + 1 });
        }
    }

    #[tracing::instrument(skip_all, fields(source_len = s.len()))]
    pub fn check<'src>(mut self, s: &'src str) -> SyntaxReport<'src> {
        self.check_markers(s);
        self.check_conditionals(s);
        self.check_braces(s);
        self.check_terminators(s);

        SyntaxReport {
            violations: self.violations,
            source: s,
        }
    }
}
