//! Default configuration values.

/// The default try budget.
pub const MAX_TRIES: usize = 50;

/// The default flip budget per try.
pub const MAX_FLIPS: usize = 1_000;

/// The canonical WalkSAT noise ρ.
pub const WALKSAT_NOISE: f64 = 0.57;

/// The canonical ProbSAT break exponent c_b for the polynomial weighting.
pub const PROBSAT_BREAK_EXPONENT: f64 = 2.3;

/// The clause-to-variable ratio at which satisfiable 3-CNF formulas are generated for experiments.
pub const GENERATOR_RATIO: f64 = 4.2;

/// The clause length of generated formulas.
pub const GENERATOR_CLAUSE_LENGTH: usize = 3;
