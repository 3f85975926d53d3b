/*!
The context of a try: a formula, an assignment, a falselist, and a score index, mutated in lockstep.

A context is generic over the [ScoreIndex] variant, as GSAT requires make − break buckets while WalkSAT
and ProbSAT require break scores alone; the [solve procedure](crate::procedures::solve) builds whichever
variant its heuristic names.

A context is created at the start of a try and discarded at its end.
No state is shared between tries.
*/

use crate::db::falselist::Falselist;
use crate::db::ScoreIndex;
use crate::structures::assignment::Assignment;
use crate::structures::formula::Formula;
use crate::structures::variable::Variable;

/// The coupled state of one try.
pub struct Context<'f, S: ScoreIndex> {
    formula: &'f Formula,
    assignment: Assignment,
    falselist: Falselist,
    scores: S,
}

impl<'f, S: ScoreIndex> Context<'f, S> {
    /// A context over `formula` starting from `assignment`.
    pub fn new(formula: &'f Formula, assignment: Assignment) -> Self {
        debug_assert_eq!(formula.num_vars(), assignment.num_vars());

        let mut falselist = Falselist::new(formula.num_clauses());
        let scores = S::new(formula, &assignment, &mut falselist);

        Context {
            formula,
            assignment,
            falselist,
            scores,
        }
    }

    /// Applies the flip of `variable`, refreshing the assignment, falselist, and score index.
    pub fn update(&mut self, variable: Variable) {
        self.scores.flip(
            variable,
            self.formula,
            &mut self.assignment,
            &mut self.falselist,
        );
    }

    /// Whether the current assignment satisfies the formula.
    pub fn is_satisfied(&self) -> bool {
        self.falselist.is_empty()
    }

    pub fn formula(&self) -> &Formula {
        self.formula
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn falselist(&self) -> &Falselist {
        &self.falselist
    }

    pub fn scores(&self) -> &S {
        &self.scores
    }

    /// Dissolves the context into its assignment, e.g. on success.
    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }
}
