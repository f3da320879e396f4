pub mod analyzer;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod vocabulary;

use analyzer::{SemanticChecker, SemanticReport};
use lexer::{LexicalReport, Lexer};
use parser::{SyntaxChecker, SyntaxReport};

pub use error::AnalyzerError;
pub use vocabulary::Vocabulary;

#[derive(Clone, Debug)]
pub struct Analysis<'src> {
    pub lexical: LexicalReport,
    pub syntax: SyntaxReport<'src>,
    pub semantics: SemanticReport<'src>,
}

impl Analysis<'_> {
    pub fn has_diagnostics(&self) -> bool {
        !self.syntax.is_ok() || !self.semantics.is_ok()
    }
}

pub fn analyze<'src>(vocabulary: &Vocabulary, user_input: &'src str) -> Analysis<'src> {
    let lexical = Lexer::tokenize(vocabulary, user_input);

    let syntax = SyntaxChecker::new(vocabulary).check(user_input);
    let semantics = SemanticChecker::new(vocabulary).check(syntax.passthrough());

    Analysis {
        lexical,
        syntax,
        semantics,
    }
}
