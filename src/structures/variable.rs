/*!
(The representation of) a variable.

Each variable is a u32 in `[1, num_vars]` for the formula at hand.
Variables are 1-based so the signed-integer encoding of a [literal](crate::structures::literal) is
unambiguous: the absolute value of a literal is its variable, and zero terminates a clause in the DIMACS
text form.

The bound keeps variables usable as (near) indices of a structure: an assignment stores the value of
variable *v* at bit *v - 1*, and score vectors leave index 0 unused.
*/

/// A variable, aka. an 'atom'.
pub type Variable = u32;

/// The maximum instance of a variable, limited by the signed literal encoding.
pub const VARIABLE_MAX: Variable = i32::MAX.unsigned_abs();
