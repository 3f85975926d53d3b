/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made at the milestones of a solve and when reading or generating formulas.
Note, no log implementation is provided.
For details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [solve procedure](crate::procedures::solve).
    pub const SOLVE: &str = "solve";

    /// Logs related to [score index](crate::db) construction.
    pub const SCORES: &str = "scores";

    /// Logs related to the [formula generator](crate::generator).
    pub const GENERATOR: &str = "generator";

    /// Logs related to [parsing](crate::builder) formulas.
    pub const PARSER: &str = "parser";
}
