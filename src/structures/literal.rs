/*!
Literals are variables paired with a (boolean) polarity.

The representation is a non-zero signed integer: the absolute value is the variable, the sign is the
polarity.
This matches the DIMACS text form, keeps clause storage flat, and makes negation a single arithmetic
operation.
Operations on the encoding are gathered behind the [LiteralExt] trait so call sites read in terms of
variables and polarities rather than sign fiddling.
*/

use crate::structures::variable::Variable;

/// A literal: a non-zero signed integer whose absolute value is a variable and whose sign encodes
/// polarity.
pub type Literal = i32;

/// Operations on the signed-integer encoding of a literal.
pub trait LiteralExt {
    /// The variable of the literal.
    fn variable(self) -> Variable;

    /// The polarity of the literal: true for a positive occurrence of its variable.
    fn polarity(self) -> bool;

    /// The negation of the literal.
    fn negated(self) -> Self;
}

impl LiteralExt for Literal {
    fn variable(self) -> Variable {
        debug_assert!(self != 0, "the zero literal");
        self.unsigned_abs()
    }

    fn polarity(self) -> bool {
        self > 0
    }

    fn negated(self) -> Self {
        -self
    }
}

/// The literal form of `variable` with the given polarity.
pub fn literal_of(variable: Variable, polarity: bool) -> Literal {
    debug_assert!(variable != 0);
    if polarity {
        variable as Literal
    } else {
        -(variable as Literal)
    }
}
