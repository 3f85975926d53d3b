/*!
The ProbSAT heuristic: a uniformly random falsified clause, then a break-weighted pick within it.

Within the chosen clause each literal is sampled with probability proportional to `w(b)` where *b* is
the break score of its variable and `w(b) = 1 / (1 + b^c_b)` --- the polynomial weighting with break
exponent c_b.
The weighting is evaluated once per achievable break score at construction and memoized in a table owned
by the heuristic instance, sized by the formula's
[max_occurrences](crate::structures::formula::Formula::max_occurrences), so concurrent solves share no
mutable state.

The distribution applies the same per-clause weighting, normalized within each clause and averaged with
weight `1 / |falselist|` across the falsified clauses.
*/

use crate::context::Context;
use crate::db::{BreakScores, ScoreIndex};
use crate::heuristics::{assert_distribution, Heuristic};
use crate::structures::formula::Formula;
use crate::structures::literal::LiteralExt;
use crate::structures::variable::Variable;
use crate::types::err::ConfigError;

/// The ProbSAT heuristic with its memoized weighting table.
#[derive(Clone, Debug)]
pub struct ProbSat {
    break_exponent: f64,

    /// `weights[b]` is the weight of break score `b`, for every achievable break score.
    weights: Vec<f64>,
}

impl ProbSat {
    /// A ProbSAT heuristic over `formula` with break exponent `break_exponent`, rejected unless
    /// c_b ≥ 0.
    ///
    /// The instance is tied to `formula` only through the size of its weighting table: any formula
    /// with the same or a smaller maximum occurrence count may be solved with it.
    pub fn new(break_exponent: f64, formula: &Formula) -> Result<Self, ConfigError> {
        if !(break_exponent >= 0.0) {
            return Err(ConfigError::ProbSatExponent(break_exponent));
        }

        let weights = (0..=formula.max_occurrences())
            .map(|score| 1.0 / (1.0 + (score as f64).powf(break_exponent)))
            .collect();

        Ok(ProbSat {
            break_exponent,
            weights,
        })
    }

    pub fn break_exponent(&self) -> f64 {
        self.break_exponent
    }

    fn weight_of(&self, scores: &BreakScores, variable: Variable) -> f64 {
        self.weights[scores.break_score(variable) as usize]
    }
}

impl Heuristic for ProbSat {
    type Score = BreakScores;

    fn choose(&self, context: &Context<BreakScores>, rng: &mut impl rand::Rng) -> Variable {
        let falselist = context.falselist().as_slice();
        let clause_index = falselist[rng.random_range(0..falselist.len())];
        let clause = context.formula().clause(clause_index as usize);

        let total: f64 = clause
            .iter()
            .map(|&literal| self.weight_of(context.scores(), literal.variable()))
            .sum();

        let dice = rng.random::<f64>() * total;
        let mut accumulated = 0.0;
        for &literal in clause {
            accumulated += self.weight_of(context.scores(), literal.variable());
            if dice < accumulated {
                return literal.variable();
            }
        }

        // Weights are strictly positive and the draw is below their sum.
        panic!("no variable chosen from clause {clause_index}");
    }

    fn distribution(&self, context: &Context<BreakScores>) -> Vec<f64> {
        let mut distribution = vec![0.0; context.formula().num_vars() as usize + 1];

        let falsified = context.falselist().len();
        if falsified == 0 {
            distribution[0] = 1.0;
            assert_distribution(&distribution);
            return distribution;
        }
        let clause_weight = 1.0 / falsified as f64;

        for clause_index in context.falselist().iter() {
            let clause = context.formula().clause(clause_index as usize);
            let total: f64 = clause
                .iter()
                .map(|&literal| self.weight_of(context.scores(), literal.variable()))
                .sum();

            for &literal in clause {
                let share = self.weight_of(context.scores(), literal.variable()) / total;
                distribution[literal.variable() as usize] += share * clause_weight;
            }
        }

        assert_distribution(&distribution);
        distribution
    }
}
