//! Structures which model abstract elements of a solve: variables, literals, assignments, formulas.

pub mod assignment;
pub mod formula;
pub mod literal;
pub mod variable;
