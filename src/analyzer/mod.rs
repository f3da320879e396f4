mod condition;
mod diagnostic;
mod semantic_checker;
mod symbol_table;
mod ty;

pub use condition::*;
pub use diagnostic::*;
pub use semantic_checker::*;
pub use symbol_table::*;
pub use ty::*;
