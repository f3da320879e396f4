use phf::{phf_map, phf_set};
use regex::Regex;

use crate::analyzer::Ty;
use crate::error::AnalyzerError;
use crate::lexer::TokenCategory;

pub static RESERVED_WORDS: phf::Set<&str> = phf_set! {
    "Inicio",
    "cadena",
    "proceso",
    "si",
    "ver",
    "Fin",
};

/// Words that can never name a variable in a condition or declaration.
/// `cadena` is a reserved word for the lexer but is not part of this set.
pub static NON_VARIABLE_WORDS: phf::Set<&str> = phf_set! {
    "Inicio",
    "Fin",
    "proceso",
    "si",
    "ver",
};

pub static TYPE_NAMES: phf::Map<&str, Ty> = phf_map! {
    "cadena" => Ty::Cadena,
    "entero" => Ty::Entero,
};

pub const START_MARKER: &str = "Inicio;";
pub const END_MARKER: &str = "Fin;";
pub const PROCESS_MARKER: &str = "proceso;";
pub const CONDITIONAL_OPENER: &str = "si (";

fn category_pattern(category: TokenCategory) -> String {
    match category {
        TokenCategory::ReservedWord => {
            let words: Vec<String> = RESERVED_WORDS.iter().map(|w| regex::escape(w)).collect();
            format!(r"\b({})\b", words.join("|"))
        }
        TokenCategory::Identifier => r"\b[a-zA-Z_][a-zA-Z_0-9]*\b".to_string(),
        TokenCategory::Number => r"\b\d+\b".to_string(),
        // `+-/` is a range: `,` and `.` are symbols as well
        TokenCategory::Symbol => r"[;{}()\[\]=<>!+-/*]".to_string(),
        TokenCategory::Error => r".".to_string(),
    }
}

/// Keyword tables and compiled patterns shared by every pass.
///
/// Built once by the caller and handed to each pass by reference.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    categories: [Regex; 5],
    pub(crate) conditional_block: Regex,
    pub(crate) declaration: Regex,
    pub(crate) integer_assignment: Regex,
    pub(crate) digits: Regex,
    pub(crate) condition: Regex,
    pub(crate) comparison: Regex,
}

impl Vocabulary {
    pub fn new() -> Result<Self, AnalyzerError> {
        let [pr, id, num, sym, err] = TokenCategory::ALL.map(category_pattern);

        Ok(Self {
            categories: [
                Regex::new(&pr)?,
                Regex::new(&id)?,
                Regex::new(&num)?,
                Regex::new(&sym)?,
                Regex::new(&err)?,
            ],
            conditional_block: Regex::new(r"^si\s*\(.+\)\s*\{")?,
            declaration: Regex::new(r"\b(cadena|entero)\s+(\w+)\s*=")?,
            integer_assignment: Regex::new(r"\bentero\s+(\w+)\s*=\s*(\w+);")?,
            digits: Regex::new(r"^\d+$")?,
            condition: Regex::new(r"si\s*\((.+)\)")?,
            comparison: Regex::new(r#"(\w+)\s*(==|!=|>|<|>=|<=)\s*(\w+|".*")"#)?,
        })
    }

    pub fn pattern(&self, category: TokenCategory) -> &Regex {
        &self.categories[category.index()]
    }

    pub fn is_non_variable(&self, word: &str) -> bool {
        NON_VARIABLE_WORDS.contains(word)
    }

    pub fn type_of(&self, type_name: &str) -> Option<Ty> {
        TYPE_NAMES.get(type_name).copied()
    }

    pub fn is_integer_literal(&self, value: &str) -> bool {
        self.digits.is_match(value)
    }
}
