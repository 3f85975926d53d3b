/*!
CNF formulas: an immutable clause arena with a literal occurrence index.

Clauses are stored flat --- one literal vector for the whole formula, with per-clause bounds --- rather
than as nested owned vectors, to avoid pointer-chasing in the hot flip loop.
The occurrence index is flat in the same way: for each literal, the indices of the clauses containing it,
in clause order.

A formula carries one designated satisfying assignment.
Generated formulas are built around it, and a search may be seeded at a chosen hamming distance from it
to study behavior near a solution.
It is metadata: nothing in the solve procedure requires it.

A formula is immutable after construction, and construction validates that every clause is non-empty and
every literal's variable lies in `[1, num_vars]`.
*/

use crate::structures::assignment::Assignment;
use crate::structures::literal::Literal;
use crate::structures::variable::VARIABLE_MAX;
use crate::types::err::BuildError;

/// The index of a clause within a formula.
pub type ClauseIndex = u32;

/// A CNF formula.
#[derive(Clone, Debug)]
pub struct Formula {
    num_vars: u32,

    /// The literals of every clause, clause by clause.
    literals: Vec<Literal>,

    /// The end offset of each clause in `literals`.
    clause_ends: Vec<u32>,

    /// The clauses containing each literal, literal by literal (see [Formula::literal_slot]).
    occurrences: Vec<ClauseIndex>,

    /// The end offset of each literal's occurrence list in `occurrences`.
    occurrence_ends: Vec<u32>,

    max_occurrences: usize,
    max_clause_length: usize,

    satisfying_assignment: Assignment,

    /// Comment lines carried through the DIMACS text form, sans the `c assgn` line.
    comments: Vec<String>,
}

impl Formula {
    /// A formula from clauses, a variable count, and its designated satisfying assignment.
    pub fn new(
        clauses: Vec<Vec<Literal>>,
        num_vars: u32,
        satisfying_assignment: Assignment,
    ) -> Result<Self, BuildError> {
        if num_vars == 0 || num_vars > VARIABLE_MAX {
            return Err(BuildError::NoVariables);
        }
        if satisfying_assignment.num_vars() != num_vars {
            return Err(BuildError::AssignmentMismatch);
        }

        let mut literals = Vec::new();
        let mut clause_ends = Vec::with_capacity(clauses.len());
        let mut max_clause_length = 0;

        for clause in &clauses {
            if clause.is_empty() {
                return Err(BuildError::EmptyClause);
            }
            for &literal in clause {
                if literal == 0 || literal.unsigned_abs() > num_vars {
                    return Err(BuildError::LiteralOutOfRange(literal));
                }
                literals.push(literal);
            }
            max_clause_length = max_clause_length.max(clause.len());
            clause_ends.push(literals.len() as u32);
        }

        let mut formula = Formula {
            num_vars,
            literals,
            clause_ends,
            occurrences: Vec::new(),
            occurrence_ends: Vec::new(),
            max_occurrences: 0,
            max_clause_length,
            satisfying_assignment,
            comments: Vec::new(),
        };
        formula.index_occurrences();

        Ok(formula)
    }

    /// Builds the flat occurrence index by counting then placing.
    fn index_occurrences(&mut self) {
        let slots = 2 * self.num_vars as usize + 1;
        let mut counts = vec![0_u32; slots];

        for clause_index in 0..self.num_clauses() {
            for &literal in self.clause(clause_index) {
                counts[self.literal_slot(literal)] += 1;
            }
        }

        self.max_occurrences = counts.iter().copied().max().unwrap_or(0) as usize;

        let mut ends = vec![0_u32; slots];
        let mut running = 0;
        for (slot, &count) in counts.iter().enumerate() {
            running += count;
            ends[slot] = running;
        }

        let mut cursors: Vec<u32> = ends
            .iter()
            .zip(counts.iter())
            .map(|(end, count)| end - count)
            .collect();
        let mut occurrences = vec![0 as ClauseIndex; running as usize];

        for clause_index in 0..self.num_clauses() {
            // Borrow the clause by offsets, as `cursors` is written below.
            let start = match clause_index {
                0 => 0,
                _ => self.clause_ends[clause_index - 1] as usize,
            };
            let end = self.clause_ends[clause_index] as usize;
            for literal_index in start..end {
                let slot = self.literal_slot(self.literals[literal_index]);
                occurrences[cursors[slot] as usize] = clause_index as ClauseIndex;
                cursors[slot] += 1;
            }
        }

        self.occurrences = occurrences;
        self.occurrence_ends = ends;
    }

    /// The slot of `literal` in the occurrence index: literals `-n..=n` map to `0..=2n`.
    fn literal_slot(&self, literal: Literal) -> usize {
        (self.num_vars as i64 + literal as i64) as usize
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.clause_ends.len()
    }

    /// The clause-to-variable ratio of the formula.
    pub fn ratio(&self) -> f64 {
        self.num_clauses() as f64 / self.num_vars as f64
    }

    /// The literals of the clause at `index`.
    pub fn clause(&self, index: usize) -> &[Literal] {
        let start = match index {
            0 => 0,
            _ => self.clause_ends[index - 1] as usize,
        };
        &self.literals[start..self.clause_ends[index] as usize]
    }

    /// An iterator over all clauses, in order.
    pub fn clauses(&self) -> impl Iterator<Item = &[Literal]> {
        (0..self.num_clauses()).map(|index| self.clause(index))
    }

    /// The indices of the clauses containing `literal`, in clause order.
    pub fn occurrences(&self, literal: Literal) -> &[ClauseIndex] {
        let slot = self.literal_slot(literal);
        let start = match slot {
            0 => 0,
            _ => self.occurrence_ends[slot - 1] as usize,
        };
        &self.occurrences[start..self.occurrence_ends[slot] as usize]
    }

    /// The maximum, over all literals, of the occurrence-list length.
    ///
    /// Bounds every achievable break and make score, and so sizes score buckets and the ProbSAT
    /// weighting table.
    pub fn max_occurrences(&self) -> usize {
        self.max_occurrences
    }

    pub fn max_clause_length(&self) -> usize {
        self.max_clause_length
    }

    /// The designated satisfying assignment.
    pub fn satisfying_assignment(&self) -> &Assignment {
        &self.satisfying_assignment
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub(crate) fn push_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }

    /// Whether every clause holds a literal true under `assignment`.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.clauses()
            .all(|clause| clause.iter().any(|&literal| assignment.satisfies(literal)))
    }
}

/// Equality over clause content, variable count, and the designated satisfying assignment.
/// Comments are excluded.
impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.num_vars == other.num_vars
            && self.literals == other.literals
            && self.clause_ends == other.clause_ends
            && self.satisfying_assignment == other.satisfying_assignment
    }
}

impl Eq for Formula {}
