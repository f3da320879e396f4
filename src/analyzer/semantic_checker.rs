use crate::lexer::{IdentifierSet, Lexer};
use crate::vocabulary::Vocabulary;

use super::{Comparison, Operand, SemanticDiagnostic, SymbolTable, Ty};

pub const SEMANTICS_OK: &str = "Uso correcto de las estructuras semánticas";

#[derive(Clone, Debug)]
pub struct SemanticReport<'src> {
    pub symbol_table: SymbolTable,
    pub diagnostics: Vec<SemanticDiagnostic>,
    source: &'src str,
}

impl<'src> SemanticReport<'src> {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn status(&self) -> String {
        if self.is_ok() {
            return SEMANTICS_OK.to_string();
        }
        self.diagnostics
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

pub struct SemanticChecker<'v> {
    vocabulary: &'v Vocabulary,
    symbol_table: SymbolTable,
    seen: IdentifierSet,
    diagnostics: Vec<SemanticDiagnostic>,
}

impl<'v> SemanticChecker<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            symbol_table: SymbolTable::new(),
            seen: IdentifierSet::new(),
            diagnostics: vec![],
        }
    }

    fn report(&mut self, diagnostic: SemanticDiagnostic) {
        tracing::debug!(%diagnostic, "semantic diagnostic");
        self.diagnostics.push(diagnostic);
    }

    fn visit_assignments(&mut self, s: &str) {
        let vocabulary = self.vocabulary;
        for caps in vocabulary.integer_assignment.captures_iter(s) {
            let (name, value) = (&caps[1], &caps[2]);
            if vocabulary.is_integer_literal(value) || vocabulary.is_non_variable(name) {
                continue;
            }
            self.report(SemanticDiagnostic::NonIntegerAssignment {
                name: name.to_string(),
            });
        }
    }

    fn visit_conditions(&mut self, s: &str) {
        let conditions: Vec<&str> = self
            .vocabulary
            .condition
            .captures_iter(s)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();

        for condition in conditions {
            self.visit_condition(condition);
        }
    }

    fn visit_condition(&mut self, condition: &str) {
        let Some(comparison) = Comparison::parse(self.vocabulary, condition) else {
            self.report(SemanticDiagnostic::MalformedCondition {
                condition: condition.to_string(),
            });
            return;
        };

        let left_ty = self.symbol_table.get_var_type(comparison.left);
        let right_ty = match comparison.right {
            Operand::Quoted(_) => Some(Ty::Cadena),
            Operand::Word(w) => self.symbol_table.get_var_type(w),
        };
        if let (Some(l), Some(r)) = (left_ty, right_ty) {
            if !l.is_compatible(&r) {
                let right = match comparison.right {
                    Operand::Word(w) | Operand::Quoted(w) => w,
                };
                self.report(SemanticDiagnostic::TypeMismatch {
                    condition: condition.to_string(),
                    left: comparison.left.to_string(),
                    right: right.to_string(),
                });
            }
        }

        let operands = [Some(comparison.left), comparison.right.as_word()];
        for name in operands.into_iter().flatten() {
            if self.seen.contains(name) || self.vocabulary.is_non_variable(name) {
                continue;
            }
            self.report(SemanticDiagnostic::UndeclaredVariable {
                name: name.to_string(),
                condition: condition.to_string(),
            });
        }
    }

    fn filter_keywords(&mut self) {
        let vocabulary = self.vocabulary;
        self.diagnostics.retain(|d| {
            let keep = !d.subjects().iter().any(|s| vocabulary.is_non_variable(s));
            if !keep {
                tracing::trace!(diagnostic = %d, "suppressed: names a keyword");
            }
            keep
        });
    }

    #[tracing::instrument(skip_all, fields(source_len = s.len()))]
    pub fn check<'src>(mut self, s: &'src str) -> SemanticReport<'src> {
        self.symbol_table = SymbolTable::from_declarations(self.vocabulary, s);
        self.seen = Lexer::identifiers(self.vocabulary, s);

        self.visit_assignments(s);
        self.visit_conditions(s);
        self.filter_keywords();

        SemanticReport {
            symbol_table: self.symbol_table,
            diagnostics: self.diagnostics,
            source: s,
        }
    }
}
