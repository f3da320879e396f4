use crate::vocabulary::Vocabulary;

use super::{IdentifierSet, LexicalReport, LineClassification, TokenCategory};

#[derive(Debug)]
pub struct Lexer<'v> {
    vocabulary: &'v Vocabulary,
    report: LexicalReport,
}

impl<'v> Lexer<'v> {
    fn new(vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            report: LexicalReport::default(),
        }
    }

    fn classify_line(&mut self, line: &str) -> LineClassification {
        let mut row = LineClassification::default();

        for category in TokenCategory::ALL {
            let mut n = 0;
            for m in self.vocabulary.pattern(category).find_iter(line) {
                if category == TokenCategory::Identifier {
                    self.report.identifiers.insert(m.as_str().to_string());
                }
                n += 1;
            }
            if n > 0 {
                row.mark(category);
                self.report.counts.add(category, n);
            }
        }

        row
    }

    fn _tokenize(&mut self, s: &str) {
        for line in s.split('\n') {
            let row = self.classify_line(line);
            self.report.lines.push(row);
        }
    }

    #[tracing::instrument(skip_all, fields(source_len = s.len()))]
    pub fn tokenize(vocabulary: &Vocabulary, s: &str) -> LexicalReport {
        let mut lexer = Lexer::new(vocabulary);
        lexer._tokenize(s);

        tracing::debug!(
            lines = lexer.report.lines.len(),
            tokens = lexer.report.counts.total(),
            identifiers = lexer.report.identifiers.len(),
            "classified source"
        );
        lexer.report
    }

    /// Distinct identifier-shaped words of `s`, without per-line bookkeeping.
    pub fn identifiers(vocabulary: &Vocabulary, s: &str) -> IdentifierSet {
        vocabulary
            .pattern(TokenCategory::Identifier)
            .find_iter(s)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
