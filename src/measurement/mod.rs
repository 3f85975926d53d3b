/*!
The measurement hook: how external research code observes a search.

The [solve procedure](crate::procedures::solve) notifies the hook synchronously --- a try has started
from some assignment, a variable has been flipped, a try has ended --- and continues only once the hook
returns.
The hook observes and must not mutate the search: it receives the starting assignment and flipped
variables, nothing more.
Entropy instrumentation pairs these notifications with the exact flip
[distribution](crate::heuristics::Heuristic::distribution) of the active heuristic.

[Silent] ignores everything; [FlipTally] counts tries, flips, and successes.
*/

use crate::structures::assignment::Assignment;
use crate::structures::variable::Variable;

/// A synchronous observer of a solve.
pub trait Measurement {
    /// A try is starting from `assignment`.
    fn on_try_start(&mut self, assignment: &Assignment);

    /// The driver applied the flip of `variable`.
    fn on_flip(&mut self, variable: Variable);

    /// The try ended, with `success` indicating a satisfying assignment was reached.
    fn on_try_end(&mut self, success: bool);
}

/// The hook which observes nothing.
pub struct Silent;

impl Measurement for Silent {
    fn on_try_start(&mut self, _assignment: &Assignment) {}

    fn on_flip(&mut self, _variable: Variable) {}

    fn on_try_end(&mut self, _success: bool) {}
}

/// A hook counting tries, flips, and successful tries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipTally {
    pub tries: usize,
    pub flips: usize,
    pub successes: usize,
}

impl Measurement for FlipTally {
    fn on_try_start(&mut self, _assignment: &Assignment) {
        self.tries += 1;
    }

    fn on_flip(&mut self, _variable: Variable) {
        self.flips += 1;
    }

    fn on_try_end(&mut self, success: bool) {
        if success {
            self.successes += 1;
        }
    }
}
