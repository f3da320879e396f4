use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SemanticDiagnostic {
    #[error("Error semántico en la asignación de '{name}'. Debe ser un número entero.")]
    NonIntegerAssignment { name: String },
    #[error("Error semántico en la condición 'si ({condition})'. Las variables deben ser del mismo tipo.")]
    TypeMismatch {
        condition: String,
        left: String,
        right: String,
    },
    #[error("Error semántico en la condición 'si ({condition})'. Formato incorrecto de comparación.")]
    MalformedCondition { condition: String },
    #[error("Variable '{name}' utilizada pero no declarada en la condición 'si ({condition})'.")]
    UndeclaredVariable { name: String, condition: String },
}

/// Whitespace-separated words of a condition that stand on their own once
/// the condition is wrapped as `'si (<condition>)'.`. The first and last
/// words stay glued to the parentheses unless whitespace separates them.
pub fn standalone_words(condition: &str) -> Vec<&str> {
    let mut words: Vec<&str> = condition.split_whitespace().collect();
    if !condition.ends_with(char::is_whitespace) {
        words.pop();
    }
    if !condition.starts_with(char::is_whitespace) && !words.is_empty() {
        words.remove(0);
    }
    words
}

impl SemanticDiagnostic {
    /// Names the diagnostic is about.
    pub fn subjects(&self) -> Vec<&str> {
        match self {
            SemanticDiagnostic::NonIntegerAssignment { name } => vec![name.as_str()],
            SemanticDiagnostic::TypeMismatch {
                condition,
                left,
                right,
            } => {
                let mut subjects = vec![left.as_str(), right.as_str()];
                subjects.extend(standalone_words(condition));
                subjects
            }
            SemanticDiagnostic::MalformedCondition { condition } => standalone_words(condition),
            SemanticDiagnostic::UndeclaredVariable { name, condition } => {
                let mut subjects = vec![name.as_str()];
                subjects.extend(standalone_words(condition));
                subjects
            }
        }
    }
}
