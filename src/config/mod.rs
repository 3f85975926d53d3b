/*!
Configuration of a solve.

A [SolveConfig] bounds a solve up front: up to `max_tries` restarts of up to `max_flips` flips each.
There is no mid-try cancellation --- an orchestration layer enforces budgets by bounding these, not by
interrupting a running try.

`hamming_dist` seeds each try at a fixed hamming distance from the formula's designated satisfying
assignment instead of uniformly at random, which instrumentation uses to study search behavior near a
solution.

Budgets are validated when the configuration is built, never mid-search.
*/

pub mod defaults;

use crate::types::err::ConfigError;

/// Bounds and seeding policy for a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveConfig {
    /// The number of restarts before the solve concludes without an assignment.
    pub max_tries: usize,

    /// The number of flips within one try.
    pub max_flips: usize,

    /// When positive, each try starts this many uniformly chosen flips away from the designated
    /// satisfying assignment; when zero, tries start from uniformly random assignments.
    pub hamming_dist: usize,
}

impl SolveConfig {
    /// A configuration of `max_tries` tries of `max_flips` flips, starting from uniformly random
    /// assignments.
    pub fn new(max_tries: usize, max_flips: usize) -> Result<Self, ConfigError> {
        if max_tries == 0 {
            return Err(ConfigError::MaxTriesZero);
        }
        if max_flips == 0 {
            return Err(ConfigError::MaxFlipsZero);
        }

        Ok(SolveConfig {
            max_tries,
            max_flips,
            hamming_dist: 0,
        })
    }

    /// The same configuration with tries seeded `hamming_dist` flips from the designated satisfying
    /// assignment.
    ///
    /// Whether the distance fits the formula is checked by the solve procedure, which knows the
    /// variable count.
    pub fn with_hamming_dist(mut self, hamming_dist: usize) -> Self {
        self.hamming_dist = hamming_dist;
        self
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            max_tries: defaults::MAX_TRIES,
            max_flips: defaults::MAX_FLIPS,
            hamming_dist: 0,
        }
    }
}
