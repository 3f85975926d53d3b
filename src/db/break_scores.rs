/*!
The break-only score index, read by WalkSAT and ProbSAT.

Buckets are keyed by break score and the best bucket is the lowest populated: flipping a variable from
it falsifies as few clauses as any flip can.

Between flips a break score is at most the occurrence count of the variable's currently true literal
form, and so at most [max_occurrences](crate::structures::formula::Formula::max_occurrences).
Mid-flip a score may overshoot that bound by the occurrences of the complementary literal, as increments
for newly critical clauses land before the matching decrements: buckets are sized for twice the bound to
absorb the transient.
*/

use crate::db::falselist::Falselist;
use crate::db::ScoreIndex;
use crate::generic::swap_set::SwapSet;
use crate::structures::assignment::Assignment;
use crate::structures::formula::Formula;
use crate::structures::literal::{literal_of, LiteralExt};
use crate::structures::variable::Variable;

/// A break-score index with constant-time access to the minimum-break variables.
#[derive(Clone, Debug)]
pub struct BreakScores {
    /// Per clause, the count of literals true under the paired assignment.
    true_literal_count: Vec<u32>,

    /// Per clause, the variable of its single true literal.
    /// Meaningful only while the clause's true-literal count is one.
    critical_variable: Vec<Variable>,

    /// Per variable, the number of clauses a flip would falsify. Index 0 is unused.
    break_score: Vec<u32>,

    /// Variables bucketed by break score.
    buckets: Vec<SwapSet>,

    /// The index of the lowest populated bucket.
    best_bucket: usize,
}

impl BreakScores {
    /// Moves `variable` between buckets, maintaining the best-bucket cursor.
    fn relocate(&mut self, variable: Variable, from: usize, to: usize) {
        self.buckets[from].remove(variable);
        self.buckets[to].insert(variable);

        if to < self.best_bucket {
            self.best_bucket = to;
        } else if from == self.best_bucket && self.buckets[from].is_empty() {
            // Every variable is in some bucket, so the scan terminates.
            while self.buckets[self.best_bucket].is_empty() {
                self.best_bucket += 1;
            }
        }
    }

    fn increment_break(&mut self, variable: Variable) {
        let score = self.break_score[variable as usize];
        self.break_score[variable as usize] = score + 1;
        self.relocate(variable, score as usize, score as usize + 1);
    }

    fn decrement_break(&mut self, variable: Variable) {
        let score = self.break_score[variable as usize];
        self.break_score[variable as usize] = score - 1;
        self.relocate(variable, score as usize, score as usize - 1);
    }
}

impl ScoreIndex for BreakScores {
    fn new(formula: &Formula, assignment: &Assignment, falselist: &mut Falselist) -> Self {
        let num_vars = formula.num_vars() as usize;
        let num_clauses = formula.num_clauses();
        let bucket_count = 2 * formula.max_occurrences() + 1;

        let mut scores = BreakScores {
            true_literal_count: vec![0; num_clauses],
            critical_variable: vec![0; num_clauses],
            break_score: vec![0; num_vars + 1],
            buckets: (0..bucket_count)
                .map(|_| SwapSet::new(num_vars + 1))
                .collect(),
            best_bucket: 0,
        };

        for variable in 1..=num_vars {
            scores.buckets[0].insert(variable as Variable);
        }

        for (clause_index, clause) in formula.clauses().enumerate() {
            let mut count = 0;
            let mut last_true = 0;
            for &literal in clause {
                if assignment.satisfies(literal) {
                    count += 1;
                    last_true = literal.variable();
                }
            }

            scores.true_literal_count[clause_index] = count;
            match count {
                0 => falselist.add(clause_index as u32),
                1 => {
                    scores.critical_variable[clause_index] = last_true;
                    scores.increment_break(last_true);
                }
                _ => {}
            }
        }

        log::trace!(
            target: crate::misc::log::targets::SCORES,
            "break index built: {} falsified clauses, best bucket {}",
            falselist.len(),
            scores.best_bucket
        );

        scores
    }

    fn flip(
        &mut self,
        variable: Variable,
        formula: &Formula,
        assignment: &mut Assignment,
        falselist: &mut Falselist,
    ) {
        // The literal forms of `variable` which the flip makes true and false, fixed before the
        // toggle.
        let satisfying = literal_of(variable, !assignment.value_of(variable));
        let falsifying = satisfying.negated();
        assignment.flip(variable);

        for &clause_index in formula.occurrences(satisfying) {
            let index = clause_index as usize;
            match self.true_literal_count[index] {
                0 => {
                    falselist.remove(clause_index);
                    self.increment_break(variable);
                    self.critical_variable[index] = variable;
                }
                1 => {
                    let previous = self.critical_variable[index];
                    self.decrement_break(previous);
                }
                _ => {}
            }
            self.true_literal_count[index] += 1;
        }

        for &clause_index in formula.occurrences(falsifying) {
            let index = clause_index as usize;
            match self.true_literal_count[index] {
                1 => {
                    falselist.add(clause_index);
                    self.decrement_break(variable);
                    self.critical_variable[index] = variable;
                }
                2 => {
                    // The clause keeps a single true literal: find it and mark it critical.
                    let mut remaining = 0;
                    for &literal in formula.clause(index) {
                        if assignment.satisfies(literal) {
                            remaining = literal.variable();
                            break;
                        }
                    }
                    self.increment_break(remaining);
                    self.critical_variable[index] = remaining;
                }
                _ => {}
            }
            self.true_literal_count[index] -= 1;
        }
    }

    fn break_score(&self, variable: Variable) -> u32 {
        self.break_score[variable as usize]
    }

    fn best_bucket(&self) -> (i32, &[Variable]) {
        (
            self.best_bucket as i32,
            self.buckets[self.best_bucket].as_slice(),
        )
    }
}
