/*!
Generation of random satisfiable 3-CNF formulas.

A hidden satisfying assignment is drawn uniformly, and every clause is built to be true under it: three
distinct variables are drawn, the eight sign patterns over them are enumerated, the patterns the hidden
assignment falsifies are discarded, and one of the rest is chosen with weight depending on how many of
its literals the assignment satisfies.
The weights (0.191, 0.118, 0.073 for one, two, three satisfied literals) counter the enumeration bias
toward patterns the assignment satisfies only barely, keeping generated formulas close to uniform over
satisfiable ones.

A formula of `⌊ratio · num_vars⌋ + 1` clauses is produced, so `|num_clauses − ratio · num_vars| < 2`.

The generated formula records the hidden assignment as its designated satisfying assignment, which the
[driver](crate::procedures::solve) uses for hamming-distance seeding.
*/

use crate::generic::sample_distinct;
use crate::misc::log::targets;
use crate::structures::assignment::Assignment;
use crate::structures::formula::Formula;
use crate::structures::literal::{literal_of, Literal};
use crate::types::err::ConfigError;

/// Weight of a sign pattern by its count of literals satisfied by the hidden assignment.
const PATTERN_WEIGHTS: [f64; 4] = [0.0, 0.191, 0.118, 0.073];

/// A random satisfiable 3-CNF formula over `num_vars` variables at clause-to-variable ratio `ratio`.
pub fn generate_satisfiable_3cnf(
    num_vars: u32,
    ratio: f64,
    rng: &mut impl rand::Rng,
) -> Result<Formula, ConfigError> {
    if num_vars < 3 {
        return Err(ConfigError::VariableCount(num_vars));
    }
    if !(ratio > 0.0) {
        return Err(ConfigError::ClauseRatio(ratio));
    }

    let satisfying_assignment = Assignment::random(num_vars, rng);
    let num_clauses = (ratio * num_vars as f64) as usize + 1;

    let mut clauses = Vec::with_capacity(num_clauses);
    for _ in 0..num_clauses {
        let variables = sample_distinct(num_vars, 3, rng);
        clauses.push(satisfiable_pattern(
            &variables,
            &satisfying_assignment,
            rng,
        ));
    }

    log::debug!(
        target: targets::GENERATOR,
        "generated {num_clauses} clauses over {num_vars} variables"
    );

    let formula = Formula::new(clauses, num_vars, satisfying_assignment)
        .expect("generated clauses are well-formed");
    debug_assert!(formula.is_satisfied_by(formula.satisfying_assignment()));

    Ok(formula)
}

/// A sign pattern over `variables`, drawn among those satisfied by `assignment` with
/// [PATTERN_WEIGHTS].
fn satisfiable_pattern(
    variables: &[u32],
    assignment: &Assignment,
    rng: &mut impl rand::Rng,
) -> Vec<Literal> {
    let mut patterns: Vec<(Vec<Literal>, usize)> = Vec::with_capacity(8);

    for signs in 0..1_u8 << variables.len() {
        let clause: Vec<Literal> = variables
            .iter()
            .enumerate()
            .map(|(position, &variable)| literal_of(variable, signs >> position & 1 == 0))
            .collect();

        let satisfied = clause
            .iter()
            .filter(|&&literal| assignment.satisfies(literal))
            .count();
        if satisfied > 0 {
            patterns.push((clause, satisfied));
        }
    }

    let total: f64 = patterns
        .iter()
        .map(|(_, satisfied)| PATTERN_WEIGHTS[*satisfied])
        .sum();
    let mut dice = rng.random::<f64>() * total;

    let mut chosen = patterns.len() - 1;
    for (index, (_, satisfied)) in patterns.iter().enumerate() {
        let weight = PATTERN_WEIGHTS[*satisfied];
        if dice < weight {
            chosen = index;
            break;
        }
        dice -= weight;
    }

    patterns.swap_remove(chosen).0
}
