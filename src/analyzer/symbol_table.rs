use std::collections::HashMap;

use crate::vocabulary::Vocabulary;

use super::Ty;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    table: HashMap<String, Ty>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every `<type> <name> =` declaration of `s`.
    pub fn from_declarations(vocabulary: &Vocabulary, s: &str) -> Self {
        let mut symbol_table = Self::new();

        for caps in vocabulary.declaration.captures_iter(s) {
            let Some(ty) = vocabulary.type_of(&caps[1]) else {
                continue;
            };
            let var_name = &caps[2];
            if vocabulary.is_non_variable(var_name) {
                continue;
            }
            symbol_table.declare_var(var_name, ty);
        }

        symbol_table
    }

    pub fn declare_var(&mut self, var_name: &str, ty: Ty) {
        tracing::trace!(var_name, %ty, "declared");
        self.table.insert(var_name.to_string(), ty);
    }

    pub fn get_var_type(&self, var_name: &str) -> Option<Ty> {
        self.table.get(var_name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
