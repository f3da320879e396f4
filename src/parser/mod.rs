mod syntax_checker;

pub use syntax_checker::*;
