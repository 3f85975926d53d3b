/*!
The make-minus-break score index, read by GSAT.

Clause bookkeeping matches the [break-only variant](crate::db::break_scores), with make scores tracked
in addition: a variable's make score is the number of falsified clauses a flip of it would satisfy.
Buckets are keyed by make − break over a signed range and the best bucket is the *highest* populated ---
greedy maximization.

The cursor to the best bucket moves upward immediately whenever a flip produces a strictly higher score,
and downward only when the best bucket empties, scanning toward lower scores.

Between flips a make or break score is at most
[max_occurrences](crate::structures::formula::Formula::max_occurrences), so make − break lies in
`[-max_occurrences, max_occurrences]`; buckets cover twice that range for the same mid-flip transient
noted for the break-only variant.
*/

use crate::db::falselist::Falselist;
use crate::db::ScoreIndex;
use crate::generic::swap_set::SwapSet;
use crate::structures::assignment::Assignment;
use crate::structures::formula::Formula;
use crate::structures::literal::{literal_of, LiteralExt};
use crate::structures::variable::Variable;

/// A make-minus-break index with constant-time access to the maximum-difference variables.
#[derive(Clone, Debug)]
pub struct DiffScores {
    /// Per clause, the count of literals true under the paired assignment.
    true_literal_count: Vec<u32>,

    /// Per clause, the variable of its single true literal.
    /// Meaningful only while the clause's true-literal count is one.
    critical_variable: Vec<Variable>,

    /// Per variable, the number of falsified clauses a flip would satisfy. Index 0 is unused.
    make_score: Vec<u32>,

    /// Per variable, the number of clauses a flip would falsify. Index 0 is unused.
    break_score: Vec<u32>,

    /// Variables bucketed by make − break, shifted by `offset`.
    buckets: Vec<SwapSet>,

    /// The bucket index of a zero score.
    offset: usize,

    /// The index of the highest populated bucket.
    best_bucket: usize,
}

impl DiffScores {
    /// The current bucket index of `variable`.
    fn bucket_of(&self, variable: Variable) -> usize {
        let difference = self.make_score[variable as usize] as isize
            - self.break_score[variable as usize] as isize;
        (self.offset as isize + difference) as usize
    }

    /// Moves `variable` between buckets, maintaining the best-bucket cursor.
    fn relocate(&mut self, variable: Variable, from: usize, to: usize) {
        self.buckets[from].remove(variable);
        self.buckets[to].insert(variable);

        if to > self.best_bucket {
            self.best_bucket = to;
        } else if from == self.best_bucket && self.buckets[from].is_empty() {
            // Every variable is in some bucket, so the scan terminates.
            while self.buckets[self.best_bucket].is_empty() {
                self.best_bucket -= 1;
            }
        }
    }

    fn increment_make(&mut self, variable: Variable) {
        let from = self.bucket_of(variable);
        self.make_score[variable as usize] += 1;
        self.relocate(variable, from, from + 1);
    }

    fn decrement_make(&mut self, variable: Variable) {
        let from = self.bucket_of(variable);
        self.make_score[variable as usize] -= 1;
        self.relocate(variable, from, from - 1);
    }

    fn increment_break(&mut self, variable: Variable) {
        let from = self.bucket_of(variable);
        self.break_score[variable as usize] += 1;
        self.relocate(variable, from, from - 1);
    }

    fn decrement_break(&mut self, variable: Variable) {
        let from = self.bucket_of(variable);
        self.break_score[variable as usize] -= 1;
        self.relocate(variable, from, from + 1);
    }

    /// The make score of `variable`.
    pub fn make_score(&self, variable: Variable) -> u32 {
        self.make_score[variable as usize]
    }
}

impl ScoreIndex for DiffScores {
    fn new(formula: &Formula, assignment: &Assignment, falselist: &mut Falselist) -> Self {
        let num_vars = formula.num_vars() as usize;
        let num_clauses = formula.num_clauses();
        let offset = 2 * formula.max_occurrences();

        let mut scores = DiffScores {
            true_literal_count: vec![0; num_clauses],
            critical_variable: vec![0; num_clauses],
            make_score: vec![0; num_vars + 1],
            break_score: vec![0; num_vars + 1],
            buckets: (0..2 * offset + 1)
                .map(|_| SwapSet::new(num_vars + 1))
                .collect(),
            offset,
            best_bucket: offset,
        };

        for variable in 1..=num_vars {
            scores.buckets[offset].insert(variable as Variable);
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
                0 => {
                    falselist.add(clause_index as u32);
                    for &literal in clause {
                        scores.increment_make(literal.variable());
                    }
                }
                1 => {
                    scores.critical_variable[clause_index] = last_true;
                    scores.increment_break(last_true);
                }
                _ => {}
            }
        }

        log::trace!(
            target: crate::misc::log::targets::SCORES,
            "diff index built: {} falsified clauses, best difference {}",
            falselist.len(),
            scores.best_bucket as isize - offset as isize
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
        let satisfying = literal_of(variable, !assignment.value_of(variable));
        let falsifying = satisfying.negated();
        assignment.flip(variable);

        for &clause_index in formula.occurrences(satisfying) {
            let index = clause_index as usize;
            match self.true_literal_count[index] {
                0 => {
                    falselist.remove(clause_index);
                    for &literal in formula.clause(index) {
                        self.decrement_make(literal.variable());
                    }
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
                    for &literal in formula.clause(index) {
                        self.increment_make(literal.variable());
                    }
                    self.decrement_break(variable);
                    self.critical_variable[index] = variable;
                }
                2 => {
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
            (self.best_bucket as isize - self.offset as isize) as i32,
            self.buckets[self.best_bucket].as_slice(),
        )
    }
}
