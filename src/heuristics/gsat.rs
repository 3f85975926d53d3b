/*!
The GSAT heuristic: select uniformly among the variables of greatest make − break difference.

The [DiffScores](crate::db::diff_scores) index keeps those variables in its best bucket, so a step is a
uniform draw from a slice.
The matching distribution is `1 / |best bucket|` for each member and zero elsewhere.

GSAT carries no noise parameter; escaping local minima is left to restarts.
*/

use crate::context::Context;
use crate::db::{DiffScores, ScoreIndex};
use crate::heuristics::{assert_distribution, Heuristic};
use crate::structures::variable::Variable;

/// The (parameterless) GSAT heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gsat;

impl Heuristic for Gsat {
    type Score = DiffScores;

    fn choose(&self, context: &Context<DiffScores>, rng: &mut impl rand::Rng) -> Variable {
        let (_, best) = context.scores().best_bucket();
        best[rng.random_range(0..best.len())]
    }

    fn distribution(&self, context: &Context<DiffScores>) -> Vec<f64> {
        let mut distribution = vec![0.0; context.formula().num_vars() as usize + 1];

        if context.is_satisfied() {
            distribution[0] = 1.0;
            assert_distribution(&distribution);
            return distribution;
        }

        let (_, best) = context.scores().best_bucket();
        let share = 1.0 / best.len() as f64;
        for &variable in best {
            distribution[variable as usize] = share;
        }

        assert_distribution(&distribution);
        distribution
    }
}
