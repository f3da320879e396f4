use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ty {
    Cadena,
    Entero,
}

impl Ty {
    pub fn is_compatible(&self, other: &Self) -> bool {
        self == other
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Cadena => write!(f, "cadena"),
            Ty::Entero => write!(f, "entero"),
        }
    }
}
