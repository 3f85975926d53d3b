/*!
A total function from the variables of a formula to truth values.

The canonical representation is a fixed-width bit vector: variable *v* is stored at bit *v - 1*, packed
into u64 blocks.
An assignment is total --- every variable has a value --- as local search always works on complete
assignments, in contrast to the partial valuations of complete procedures.

An assignment is mutated only through [flip](Assignment::flip).

# Hexadecimal form

Interpreting the bit vector as an unsigned integer, the text form of an assignment is the hexadecimal
literal of that integer (`0x…`, no leading zeros).
This is the form carried by the `c assgn` comment of the [DIMACS text form](crate::builder), which
designates the known satisfying assignment of a generated formula.
*/

use crate::structures::literal::{Literal, LiteralExt};
use crate::structures::variable::Variable;
use crate::types::err::ParseError;

const BLOCK_BITS: u32 = u64::BITS;

/// A total assignment over variables `1..=num_vars`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    blocks: Vec<u64>,
    num_vars: u32,
}

impl Assignment {
    /// The all-false assignment over `num_vars` variables.
    pub fn all_false(num_vars: u32) -> Self {
        let block_count = num_vars.div_ceil(BLOCK_BITS) as usize;
        Assignment {
            blocks: vec![0; block_count],
            num_vars,
        }
    }

    /// A uniformly random assignment over `num_vars` variables.
    pub fn random(num_vars: u32, rng: &mut impl rand::Rng) -> Self {
        let mut assignment = Assignment::all_false(num_vars);
        for block in assignment.blocks.iter_mut() {
            *block = rng.random();
        }
        assignment.mask_tail();
        assignment
    }

    /// An assignment from explicit values, `values[i]` being the value of variable `i + 1`.
    pub fn from_values(values: &[bool]) -> Self {
        let mut assignment = Assignment::all_false(values.len() as u32);
        for (index, &value) in values.iter().enumerate() {
            if value {
                assignment.blocks[index / BLOCK_BITS as usize] |= 1 << (index % BLOCK_BITS as usize);
            }
        }
        assignment
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    /// The value of `variable` under the assignment.
    pub fn value_of(&self, variable: Variable) -> bool {
        debug_assert!((1..=self.num_vars).contains(&variable));
        let bit = variable - 1;
        (self.blocks[(bit / BLOCK_BITS) as usize] >> (bit % BLOCK_BITS)) & 1 == 1
    }

    /// Toggles the value of `variable`, in place.
    pub fn flip(&mut self, variable: Variable) {
        debug_assert!((1..=self.num_vars).contains(&variable));
        let bit = variable - 1;
        self.blocks[(bit / BLOCK_BITS) as usize] ^= 1 << (bit % BLOCK_BITS);
    }

    /// Whether `literal` is true under the assignment.
    pub fn satisfies(&self, literal: Literal) -> bool {
        self.value_of(literal.variable()) == literal.polarity()
    }

    /// The number of variables on which the two assignments differ.
    pub fn hamming_distance(&self, other: &Assignment) -> u32 {
        debug_assert_eq!(self.num_vars, other.num_vars);
        self.blocks
            .iter()
            .zip(other.blocks.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }

    /// The variable-wise negation of the assignment.
    pub fn negated(&self) -> Assignment {
        let mut negation = self.clone();
        for block in negation.blocks.iter_mut() {
            *block = !*block;
        }
        negation.mask_tail();
        negation
    }

    /// An iterator over the values of variables `1..=num_vars`, in order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        (1..=self.num_vars).map(|variable| self.value_of(variable))
    }

    /// The hexadecimal literal of the assignment, as carried by the `c assgn` DIMACS comment.
    pub fn as_hex(&self) -> String {
        let mut significant = self
            .blocks
            .iter()
            .rev()
            .skip_while(|block| **block == 0)
            .copied();

        match significant.next() {
            None => "0x0".to_string(),
            Some(high) => {
                let mut hex = format!("{high:#x}");
                for block in significant {
                    hex.push_str(&format!("{block:016x}"));
                }
                hex
            }
        }
    }

    /// An assignment over `num_vars` variables from its hexadecimal literal.
    ///
    /// Fails if a digit is not hexadecimal or a set bit lies beyond `num_vars`.
    pub fn from_hex(hex: &str, num_vars: u32) -> Result<Self, ParseError> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        if digits.is_empty() {
            return Err(ParseError::AssignmentLiteral);
        }

        let mut assignment = Assignment::all_false(num_vars);
        for (place, digit) in digits.chars().rev().enumerate() {
            let value = digit.to_digit(16).ok_or(ParseError::AssignmentLiteral)? as u64;
            if value == 0 {
                continue;
            }

            let bit = place as u32 * 4;
            let block = (bit / BLOCK_BITS) as usize;
            if block >= assignment.blocks.len() {
                return Err(ParseError::AssignmentLiteral);
            }
            assignment.blocks[block] |= value << (bit % BLOCK_BITS);
        }

        // Reject bits beyond the variable count rather than silently masking them.
        let masked = {
            let mut copy = assignment.clone();
            copy.mask_tail();
            copy
        };
        if masked != assignment {
            return Err(ParseError::AssignmentLiteral);
        }

        Ok(assignment)
    }

    /// Clears the unused bits of the final block.
    fn mask_tail(&mut self) {
        let tail_bits = self.num_vars % BLOCK_BITS;
        if tail_bits != 0 {
            if let Some(last) = self.blocks.last_mut() {
                *last &= (1 << tail_bits) - 1;
            }
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

#[cfg(test)]
mod assignment_tests {
    use super::*;
    use crate::generic::pcg::Pcg32;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn flips_toggle_single_bits() {
        let mut rng = Pcg32::new(17);
        let mut assignment = Assignment::random(130, &mut rng);
        let before = assignment.clone();

        assignment.flip(1);
        assignment.flip(65);
        assignment.flip(130);

        assert_eq!(assignment.hamming_distance(&before), 3);
        assert_ne!(assignment.value_of(65), before.value_of(65));

        assignment.flip(65);
        assert_eq!(assignment.hamming_distance(&before), 2);
    }

    #[test]
    fn literal_satisfaction_follows_polarity() {
        let assignment = Assignment::from_values(&[true, false, true]);
        assert!(assignment.satisfies(1));
        assert!(assignment.satisfies(-2));
        assert!(assignment.satisfies(3));
        assert!(!assignment.satisfies(-1));
        assert!(!assignment.satisfies(2));
    }

    #[test]
    fn negation_is_at_full_distance() {
        let mut rng = Pcg32::new(29);
        let assignment = Assignment::random(77, &mut rng);
        assert_eq!(assignment.hamming_distance(&assignment.negated()), 77);
    }

    #[test]
    fn hex_of_known_values() {
        let assignment = Assignment::from_values(&[true, false, true, true]);
        assert_eq!(assignment.as_hex(), "0xd");
        assert_eq!(Assignment::from_hex("0xd", 4), Ok(assignment));

        assert_eq!(Assignment::all_false(9).as_hex(), "0x0");
    }

    #[test]
    fn overwide_hex_is_rejected() {
        assert!(Assignment::from_hex("0x10", 4).is_err());
        assert!(Assignment::from_hex("0xg", 4).is_err());
        assert!(Assignment::from_hex("", 4).is_err());
    }

    #[quickcheck]
    fn hex_round_trip(values: Vec<bool>) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }
        let assignment = Assignment::from_values(&values);
        let reparsed = Assignment::from_hex(&assignment.as_hex(), values.len() as u32);
        TestResult::from_bool(reparsed == Ok(assignment))
    }

    #[quickcheck]
    fn double_flip_is_identity(values: Vec<bool>, variable: u32) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }
        let variable = variable % values.len() as u32 + 1;
        let mut assignment = Assignment::from_values(&values);
        let before = assignment.clone();
        assignment.flip(variable);
        assignment.flip(variable);
        TestResult::from_bool(assignment == before)
    }
}
