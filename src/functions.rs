//! Built-in unary functions callable from expressions.
//!
//! The table is fixed at compile time. Names are case-sensitive and angles are
//! in radians.

/// A named unary operation.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub apply: fn(f64) -> f64,
}

pub static FUNCTIONS: [Builtin; 3] = [
    Builtin {
        name: "sin",
        apply: f64::sin,
    },
    Builtin {
        name: "cos",
        apply: f64::cos,
    },
    Builtin {
        name: "tan",
        apply: f64::tan,
    },
];

pub fn lookup_function(name: &str) -> Option<&'static Builtin> {
    FUNCTIONS.iter().find(|f| f.name == name)
}

pub fn is_function(name: &str) -> bool {
    lookup_function(name).is_some()
}
