/*!
The generic SLS driver: the try/flip loop, restart policy, and measurement hook invocation.

The driver is independent of the heuristic plugged in.
Its states are:

```none
new try ──> flipping ──> success           (a satisfying assignment is returned)
   ⌃            │
   │            └─────> try exhausted ──> new try, or overall failure
   └──────────────────────────────────────────┘
```

For up to `max_tries` tries: construct a fresh assignment --- uniformly random, or, when a hamming
distance *d* > 0 is configured, the designated satisfying assignment with *d* uniformly chosen bits
flipped --- build a context, and for up to `max_flips` steps check satisfaction, ask the heuristic for a
variable, apply the flip through the context, and notify the measurement hook.

Satisfaction is checked only at the top of a step, so a try whose final permitted flip satisfies the
formula still ends as a failed try; downstream measurement series are calibrated against this framing
and it is preserved deliberately.

Exhausting every try is an expected, informative outcome, returned as `None` rather than an error.
*/

use crate::config::SolveConfig;
use crate::context::Context;
use crate::generic::sample_distinct;
use crate::heuristics::Heuristic;
use crate::measurement::Measurement;
use crate::misc::log::targets;
use crate::structures::assignment::Assignment;
use crate::structures::formula::Formula;
use crate::types::err::{ConfigError, ErrorKind};

/// Searches for a satisfying assignment of `formula` with `heuristic`, under the budgets of `config`.
///
/// Every randomized decision draws from `rng`, so the solve is reproducible given a fixed seed.
/// `measurement` is notified synchronously of every try start, flip, and try end.
///
/// Returns:
/// - `Ok(Some(assignment))` with a satisfying assignment, when a try succeeds.
/// - `Ok(None)` when every try exhausts its flip budget.
/// - `Err(_)` only for configuration errors checkable against the formula, before any try starts.
pub fn solve<H: Heuristic>(
    formula: &Formula,
    heuristic: &H,
    config: &SolveConfig,
    rng: &mut impl rand::Rng,
    measurement: &mut impl Measurement,
) -> Result<Option<Assignment>, ErrorKind> {
    if config.hamming_dist > formula.num_vars() as usize {
        return Err(ConfigError::HammingDistance {
            requested: config.hamming_dist,
            num_vars: formula.num_vars(),
        }
        .into());
    }

    for try_index in 0..config.max_tries {
        let assignment = initial_assignment(formula, config.hamming_dist, rng);
        measurement.on_try_start(&assignment);

        let mut context: Context<H::Score> = Context::new(formula, assignment);
        log::trace!(
            target: targets::SOLVE,
            "try {try_index}: {} of {} clauses falsified",
            context.falselist().len(),
            formula.num_clauses()
        );

        for _ in 0..config.max_flips {
            if context.is_satisfied() {
                measurement.on_try_end(true);
                log::debug!(target: targets::SOLVE, "satisfied on try {try_index}");
                return Ok(Some(context.into_assignment()));
            }

            let variable = heuristic.choose(&context, rng);
            context.update(variable);
            measurement.on_flip(variable);
        }

        measurement.on_try_end(false);
        log::trace!(
            target: targets::SOLVE,
            "try {try_index} exhausted with {} clauses falsified",
            context.falselist().len()
        );
    }

    log::debug!(
        target: targets::SOLVE,
        "no assignment found within {} tries",
        config.max_tries
    );
    Ok(None)
}

/// The starting assignment of a try.
fn initial_assignment(
    formula: &Formula,
    hamming_dist: usize,
    rng: &mut impl rand::Rng,
) -> Assignment {
    if hamming_dist > 0 {
        let mut assignment = formula.satisfying_assignment().clone();
        for variable in sample_distinct(formula.num_vars(), hamming_dist, rng) {
            assignment.flip(variable);
        }
        assignment
    } else {
        Assignment::random(formula.num_vars(), rng)
    }
}
