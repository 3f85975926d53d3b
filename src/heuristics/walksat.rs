/*!
The WalkSAT heuristic: a uniformly random falsified clause, then a greedy or noisy pick within it.

Within the chosen clause, with probability 1 − ρ the pick is uniform among the literals of minimum break
score (the greedy step), and with probability ρ uniform among all literals of the clause (the noisy
step).
When the minimum break score in the clause is zero the greedy step is taken unconditionally: flipping
such a variable cannot falsify anything, and downstream entropy measurements are calibrated against this
collapse, so it is deliberately not smoothed into the usual split.

The distribution mirrors the sampling exactly: each falsified clause contributes mass
`1 / |falselist|`, split within the clause as `(1 − ρ) / |minimum-break set|` for minimum-break literals
plus `ρ / |clause|` for every literal, collapsing to the uniform-over-minimum term when the minimum is
zero.
*/

use crate::context::Context;
use crate::db::{BreakScores, ScoreIndex};
use crate::heuristics::{assert_distribution, Heuristic};
use crate::structures::literal::{Literal, LiteralExt};
use crate::structures::variable::Variable;
use crate::types::err::ConfigError;

/// The WalkSAT heuristic with noise ρ.
#[derive(Clone, Copy, Debug)]
pub struct WalkSat {
    noise: f64,
}

impl WalkSat {
    /// A WalkSAT heuristic with noise `noise`, rejected unless ρ ∈ [0, 1].
    pub fn new(noise: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&noise) {
            return Err(ConfigError::WalkSatNoise(noise));
        }
        Ok(WalkSat { noise })
    }

    pub fn noise(&self) -> f64 {
        self.noise
    }
}

/// The minimum break score within `clause` and the variables of the literals achieving it, one entry
/// per achieving literal occurrence.
fn minimum_break(scores: &BreakScores, clause: &[Literal]) -> (u32, Vec<Variable>) {
    let mut minimum = u32::MAX;
    let mut achievers = Vec::new();

    for &literal in clause {
        let score = scores.break_score(literal.variable());
        if score < minimum {
            minimum = score;
            achievers.clear();
            achievers.push(literal.variable());
        } else if score == minimum {
            achievers.push(literal.variable());
        }
    }

    (minimum, achievers)
}

impl Heuristic for WalkSat {
    type Score = BreakScores;

    fn choose(&self, context: &Context<BreakScores>, rng: &mut impl rand::Rng) -> Variable {
        let falselist = context.falselist().as_slice();
        let clause_index = falselist[rng.random_range(0..falselist.len())];
        let clause = context.formula().clause(clause_index as usize);

        let (minimum, achievers) = minimum_break(context.scores(), clause);

        let dice: f64 = rng.random();
        if minimum == 0 || dice > self.noise {
            // Greedy step.
            achievers[rng.random_range(0..achievers.len())]
        } else {
            // Noisy step.
            clause[rng.random_range(0..clause.len())].variable()
        }
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
            let (minimum, achievers) = minimum_break(context.scores(), clause);

            if minimum == 0 {
                let share = 1.0 / achievers.len() as f64;
                for &variable in &achievers {
                    distribution[variable as usize] += share * clause_weight;
                }
            } else {
                for &literal in clause {
                    let variable = literal.variable();
                    let greedy = match achievers.contains(&variable) {
                        true => (1.0 - self.noise) / achievers.len() as f64,
                        false => 0.0,
                    };
                    let noisy = self.noise / clause.len() as f64;
                    distribution[variable as usize] += (greedy + noisy) * clause_weight;
                }
            }
        }

        assert_distribution(&distribution);
        distribution
    }
}
