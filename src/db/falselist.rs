/*!
The falselist: the set of clause indices currently falsified by the paired assignment.

An unordered collection with O(1) add, O(1) remove-by-index, O(1) size, and iteration, backed by a
[SwapSet](crate::generic::swap_set::SwapSet).
Heuristics read it every step: WalkSAT and ProbSAT pick a uniformly random falsified clause, and every
distribution weights per-clause mass by `1 / |falselist|`.

Removing a clause which is not present indicates the score-index invariants have been violated, and
panics.
*/

use crate::generic::swap_set::SwapSet;
use crate::structures::formula::ClauseIndex;

/// The set of currently falsified clauses.
#[derive(Clone, Debug)]
pub struct Falselist {
    clauses: SwapSet,
}

impl Falselist {
    /// An empty falselist for a formula of `num_clauses` clauses.
    pub fn new(num_clauses: usize) -> Self {
        Falselist {
            clauses: SwapSet::new(num_clauses),
        }
    }

    /// Notes `clause` as falsified.
    pub fn add(&mut self, clause: ClauseIndex) {
        self.clauses.insert(clause);
    }

    /// Notes `clause` as satisfied again.
    ///
    /// # Panics
    /// If `clause` is not present --- an internal consistency violation.
    pub fn remove(&mut self, clause: ClauseIndex) {
        self.clauses.remove(clause);
    }

    pub fn contains(&self, clause: ClauseIndex) -> bool {
        self.clauses.contains(clause)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The falsified clauses, in unspecified order.
    pub fn as_slice(&self) -> &[ClauseIndex] {
        self.clauses.as_slice()
    }

    /// An iterator over the falsified clauses, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = ClauseIndex> + '_ {
        self.clauses.iter()
    }
}
