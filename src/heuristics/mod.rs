/*!
Heuristics and their matching flip distributions.

Each heuristic supplies a pair of functions over a [context](crate::context):

- [choose](Heuristic::choose) samples the variable to flip next, drawing from a caller-supplied RNG.
- [distribution](Heuristic::distribution) enumerates every variable's probability of being that sample.

The pair is mechanically equivalent: `choose` is exactly the sampling procedure for the vector
`distribution` returns, a property the test suite checks statistically.
The distributions, not the samples, are what the surrounding entropy research consumes.

A distribution is a vector of length `num_vars + 1`.
Index 0 is reserved for 'no move' and carries the whole mass exactly when no clause is falsified;
otherwise entry *v* is the probability of flipping variable *v*.
Entries are non-negative and sum to 1, asserted fatally within tolerance.

Heuristic parameters are validated at construction, never mid-search:

- [Gsat](gsat::Gsat) is parameterless, selecting uniformly from the best make − break bucket.
- [WalkSat](walksat::WalkSat) takes a noise ρ ∈ [0, 1].
- [ProbSat](probsat::ProbSat) takes a break exponent c_b ≥ 0 and the formula it will weight, so its
  weighting table is owned by the instance and built once.
*/

pub mod gsat;
pub mod probsat;
pub mod walksat;

use crate::context::Context;
use crate::db::ScoreIndex;
use crate::structures::variable::Variable;

/// A strategy for choosing the next flip, with its exact sampling distribution.
pub trait Heuristic {
    /// The score-index variant the strategy reads.
    type Score: ScoreIndex;

    /// The variable to flip next.
    fn choose(&self, context: &Context<Self::Score>, rng: &mut impl rand::Rng) -> Variable;

    /// The probability of each variable being chosen by [choose](Heuristic::choose), indexed by
    /// variable, with index 0 reserved for 'no move'.
    fn distribution(&self, context: &Context<Self::Score>) -> Vec<f64>;
}

/// Asserts the sum-to-one invariant of a distribution.
///
/// A violation is a programming-logic failure: continuing would feed corrupt probabilities to every
/// entropy measurement downstream.
pub(crate) fn assert_distribution(distribution: &[f64]) {
    let total: f64 = distribution.iter().sum();
    assert!(
        (total - 1.0).abs() < 1e-3,
        "flip distribution sums to {total}"
    );
}
