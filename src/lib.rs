//! A library for searching for satisfying assignments of CNF formulas with stochastic local search.
//!
//! sls_sat implements the GSAT, WalkSAT and ProbSAT families of stochastic local search, and, for every
//! search state, exposes the exact probability distribution over next flips the active heuristic samples
//! from --- not just a sampled flip.
//! The distributions are the foundation of entropy measurements made by surrounding research code, which
//! observes a search through a synchronous [measurement] hook.
//!
//! # Orientation
//!
//! A solve is viewed in terms of a handful of structures, mutated in lockstep by every flip:
//!
//! - A [formula](crate::structures::formula) is an immutable clause arena together with a literal
//!   occurrence index and a designated satisfying assignment.
//! - An [assignment](crate::structures::assignment) is a bit vector over the variables of a formula.
//! - A [falselist](crate::db::falselist) holds the indices of the clauses falsified by the assignment.
//! - A [score index](crate::db) keeps, per clause, a count of true literals and the critical variable,
//!   and, per variable, break (and perhaps make) scores bucketed by value so the best-scoring variables
//!   are available in constant time.
//!
//! A [context](crate::context) couples these, the [solve procedure](crate::procedures::solve) drives the
//! try/flip loop, and each [heuristic](crate::heuristics) supplies a matched pair of a sampling procedure
//! and a distribution function of identical semantics.
//!
//! Every randomized decision draws from a caller-supplied [rand::Rng], so a run is reproducible given a
//! fixed seed.
//! The crate ships a small [PCG](crate::generic::pcg) for this purpose.
//!
//! # Example
//!
//! ```rust
//! use sls_sat::config::SolveConfig;
//! use sls_sat::generator::generate_satisfiable_3cnf;
//! use sls_sat::generic::pcg::Pcg32;
//! use sls_sat::heuristics::{walksat::WalkSat, Heuristic};
//! use sls_sat::measurement::Silent;
//! use sls_sat::procedures::solve::solve;
//!
//! let mut rng = Pcg32::new(7);
//!
//! let formula = generate_satisfiable_3cnf(24, 3.0, &mut rng).unwrap();
//! let heuristic = WalkSat::new(0.57).unwrap();
//! let config = SolveConfig::new(10, 2_400).unwrap();
//!
//! let result = solve(&formula, &heuristic, &config, &mut rng, &mut Silent).unwrap();
//!
//! if let Some(assignment) = result {
//!     assert!(formula.is_satisfied_by(&assignment));
//! }
//! ```
//!
//! # Scope
//!
//! The library performs no I/O beyond (de)serializing formulas from a DIMACS-like text form, and holds no
//! state across independent tries.
//! Orchestration of many (formula, try) pairs, persistence of results, and entropy post-processing belong
//! to external layers.
//! There is no clause learning and no complete (DPLL/CDCL-style) procedure: exhausting every try without
//! finding a satisfying assignment is an expected, informative outcome.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;
pub mod generator;
pub mod heuristics;
pub mod measurement;

pub mod misc;
