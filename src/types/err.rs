//! Error types used in the library.
//!
//! - Configuration errors are rejected eagerly, when a heuristic or solve configuration is built, and are
//!   never surfaced mid-search.
//! - Parse and build errors cover reading a formula from its DIMACS-like text form and constructing a
//!   formula from clauses.
//! - Internal consistency violations --- removing a clause absent from the falselist, a distribution
//!   failing to sum to one --- are not represented here: they are programming-logic failures and panic,
//!   as continuing would corrupt all subsequent score-index state.

/// A general error, wrapping the specific errors of each subsystem.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Config(ConfigError),
    Parse(ParseError),
}

/// Noted errors when validating a heuristic or solve configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The WalkSAT noise parameter ρ was outside [0, 1].
    WalkSatNoise(f64),

    /// The ProbSAT break exponent c_b was negative (or not a number).
    ProbSatExponent(f64),

    /// A try budget of zero would never start a search.
    MaxTriesZero,

    /// A flip budget of zero would never flip.
    MaxFlipsZero,

    /// The requested hamming distance exceeds the variable count of the formula.
    HammingDistance { requested: usize, num_vars: u32 },

    /// The clause-to-variable ratio for the generator was not strictly positive.
    ClauseRatio(f64),

    /// Too few variables were requested to draw clauses of distinct variables.
    VariableCount(u32),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors when constructing a formula from clauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The empty clause is never satisfied.
    EmptyClause,

    /// A literal's variable was zero or above the variable count.
    LiteralOutOfRange(i32),

    /// The designated satisfying assignment is over a different variable count.
    AssignmentMismatch,

    /// A formula requires at least one variable.
    NoVariables,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors when parsing the DIMACS-like text form of a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A line could not be read, or held something other than literals.
    Line(usize),

    /// The problem specification (`p cnf <vars> <clauses>`) was malformed.
    ProblemSpecification,

    /// No problem specification line was found.
    MissingProblemLine,

    /// No `c assgn` comment was found, though the format designates a satisfying assignment.
    MissingAssignment,

    /// The hexadecimal satisfying assignment was malformed or wider than the variable count.
    AssignmentLiteral,

    /// A clause line held no literals before its terminating zero.
    EmptyClause(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
