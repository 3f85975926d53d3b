/*!
The mutable databases of a try: the falselist and the score indices.

Each try of a solve owns a fresh falselist and score index, created together with the try's starting
assignment and discarded when the try ends.
Within a try they are mutated in lockstep by every flip.

# Score indices

A score index keeps, per clause, the count of its currently true literals and --- when that count is one
--- the *critical* variable responsible for the single true literal.
Per variable it keeps a break score (the clauses the variable would falsify if flipped), bucketed by
score value so the best-scoring variables are available in constant time.

Two variants implement the [ScoreIndex] trait:

- [BreakScores](break_scores::BreakScores) tracks break scores alone, with the best bucket being the
  *lowest* populated.
  WalkSAT and ProbSAT read individual break scores from it.
- [DiffScores](diff_scores::DiffScores) additionally tracks make scores and buckets variables by
  make − break, with the best bucket being the *highest* populated.
  GSAT selects from its best bucket.

A flip costs time proportional to the occurrences of the flipped variable, not to the size of the
formula.
*/

pub mod break_scores;
pub mod diff_scores;
pub mod falselist;

pub use break_scores::BreakScores;
pub use diff_scores::DiffScores;
pub use falselist::Falselist;

use crate::structures::assignment::Assignment;
use crate::structures::formula::Formula;
use crate::structures::variable::Variable;

/// Incremental per-variable scoring over a formula and assignment.
///
/// Invariants, after construction and after any sequence of [flip](ScoreIndex::flip)s:
/// - each clause's true-literal count matches the paired assignment;
/// - each variable's break score equals the number of clauses it would falsify if flipped;
/// - the falselist holds exactly the clauses with no true literal;
/// - each variable sits in the bucket of its current score.
pub trait ScoreIndex {
    /// A fresh index over `formula` and `assignment`, populating `falselist` with the falsified
    /// clauses.
    fn new(formula: &Formula, assignment: &Assignment, falselist: &mut Falselist) -> Self;

    /// Applies the flip of `variable`: toggles the assignment bit and refreshes clause counts,
    /// scores, buckets, and the falselist.
    fn flip(
        &mut self,
        variable: Variable,
        formula: &Formula,
        assignment: &mut Assignment,
        falselist: &mut Falselist,
    );

    /// The break score of `variable`.
    fn break_score(&self, variable: Variable) -> u32;

    /// The best populated score bucket, as the score and the variables holding it.
    ///
    /// 'Best' is variant-specific: the lowest break score, or the highest make − break.
    /// Ties within the bucket are broken by the caller.
    fn best_bucket(&self) -> (i32, &[Variable]);
}
