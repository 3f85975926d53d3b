//! End-to-end solves: found assignments satisfy, budgets bound the tally, seeding lands at the
//! requested distance, and bad configurations are rejected up front.

use sls_sat::config::SolveConfig;
use sls_sat::generator::generate_satisfiable_3cnf;
use sls_sat::generic::pcg::Pcg32;
use sls_sat::heuristics::gsat::Gsat;
use sls_sat::heuristics::probsat::ProbSat;
use sls_sat::heuristics::walksat::WalkSat;
use sls_sat::measurement::{FlipTally, Measurement, Silent};
use sls_sat::procedures::solve::solve;
use sls_sat::structures::assignment::Assignment;
use sls_sat::structures::formula::Formula;
use sls_sat::types::err::{ConfigError, ErrorKind};

#[test]
fn walksat_finds_a_satisfying_assignment() {
    let mut rng = Pcg32::new(2001);
    let formula = generate_satisfiable_3cnf(30, 3.5, &mut rng).unwrap();
    let config = SolveConfig::new(30, 20_000).unwrap();
    let walksat = WalkSat::new(0.57).unwrap();

    let result = solve(&formula, &walksat, &config, &mut rng, &mut Silent).unwrap();
    let assignment = result.expect("an easy formula within a generous budget");
    assert!(formula.is_satisfied_by(&assignment));
}

#[test]
fn probsat_finds_a_satisfying_assignment() {
    let mut rng = Pcg32::new(2002);
    let formula = generate_satisfiable_3cnf(30, 3.5, &mut rng).unwrap();
    let config = SolveConfig::new(30, 20_000).unwrap();
    let probsat = ProbSat::new(2.3, &formula).unwrap();

    let result = solve(&formula, &probsat, &config, &mut rng, &mut Silent).unwrap();
    let assignment = result.expect("an easy formula within a generous budget");
    assert!(formula.is_satisfied_by(&assignment));
}

#[test]
fn gsat_recovers_from_near_the_solution() {
    let mut rng = Pcg32::new(2003);
    let formula = generate_satisfiable_3cnf(20, 3.0, &mut rng).unwrap();
    let config = SolveConfig::new(20, 2_000).unwrap().with_hamming_dist(2);

    let result = solve(&formula, &Gsat, &config, &mut rng, &mut Silent).unwrap();
    let assignment = result.expect("two flips from a solution, many tries");
    assert!(formula.is_satisfied_by(&assignment));
}

#[test]
fn the_tally_respects_the_budgets() {
    let mut rng = Pcg32::new(2004);
    let formula = generate_satisfiable_3cnf(20, 4.2, &mut rng).unwrap();
    let config = SolveConfig::new(5, 50).unwrap();
    let walksat = WalkSat::new(0.57).unwrap();

    let mut tally = FlipTally::default();
    let result = solve(&formula, &walksat, &config, &mut rng, &mut tally).unwrap();

    assert!(tally.tries >= 1 && tally.tries <= 5);
    assert!(tally.flips <= tally.tries * 50);
    match result {
        Some(assignment) => {
            assert!(formula.is_satisfied_by(&assignment));
            assert_eq!(tally.successes, 1);
        }
        None => {
            assert_eq!(tally.successes, 0);
            assert_eq!(tally.tries, 5);
        }
    }
}

/// Satisfaction is checked only at the top of a step, so satisfying the formula on the final
/// permitted flip of a try does not count as a success.
#[test]
fn success_on_the_final_flip_counts_as_a_failed_try() {
    let formula = Formula::new(vec![vec![1]], 1, Assignment::from_values(&[true])).unwrap();
    let walksat = WalkSat::new(0.0).unwrap();
    let mut rng = Pcg32::new(2005);

    // One permitted flip: each try starts one flip from the solution, reaches it, and still fails.
    let config = SolveConfig::new(3, 1).unwrap().with_hamming_dist(1);
    let mut tally = FlipTally::default();
    let result = solve(&formula, &walksat, &config, &mut rng, &mut tally).unwrap();
    assert_eq!(result, None);
    assert_eq!(tally, FlipTally { tries: 3, flips: 3, successes: 0 });

    // A second permitted flip leaves room for the check, and the first try succeeds.
    let config = SolveConfig::new(3, 2).unwrap().with_hamming_dist(1);
    let mut tally = FlipTally::default();
    let result = solve(&formula, &walksat, &config, &mut rng, &mut tally).unwrap();
    assert_eq!(result, Some(Assignment::from_values(&[true])));
    assert_eq!(tally, FlipTally { tries: 1, flips: 1, successes: 1 });
}

/// Records the starting assignment of every try.
struct StartRecorder {
    starts: Vec<Assignment>,
}

impl Measurement for StartRecorder {
    fn on_try_start(&mut self, assignment: &Assignment) {
        self.starts.push(assignment.clone());
    }

    fn on_flip(&mut self, _variable: u32) {}

    fn on_try_end(&mut self, _success: bool) {}
}

#[test]
fn tries_start_at_the_configured_hamming_distance() {
    let mut rng = Pcg32::new(2006);
    let formula = generate_satisfiable_3cnf(24, 4.2, &mut rng).unwrap();
    let config = SolveConfig::new(4, 10).unwrap().with_hamming_dist(5);
    let walksat = WalkSat::new(0.57).unwrap();

    let mut recorder = StartRecorder { starts: Vec::new() };
    solve(&formula, &walksat, &config, &mut rng, &mut recorder).unwrap();

    assert!(!recorder.starts.is_empty());
    for start in &recorder.starts {
        assert_eq!(start.hamming_distance(formula.satisfying_assignment()), 5);
    }
}

#[test]
fn configurations_are_rejected_eagerly() {
    assert_eq!(SolveConfig::new(0, 10), Err(ConfigError::MaxTriesZero));
    assert_eq!(SolveConfig::new(10, 0), Err(ConfigError::MaxFlipsZero));

    assert_eq!(WalkSat::new(1.5).unwrap_err(), ConfigError::WalkSatNoise(1.5));
    assert_eq!(WalkSat::new(-0.1).unwrap_err(), ConfigError::WalkSatNoise(-0.1));

    let mut rng = Pcg32::new(2007);
    let formula = generate_satisfiable_3cnf(8, 4.2, &mut rng).unwrap();
    assert_eq!(
        ProbSat::new(-1.0, &formula).unwrap_err(),
        ConfigError::ProbSatExponent(-1.0)
    );
}

#[test]
fn an_oversized_hamming_distance_is_rejected_against_the_formula() {
    let mut rng = Pcg32::new(2008);
    let formula = generate_satisfiable_3cnf(8, 4.2, &mut rng).unwrap();
    let config = SolveConfig::new(2, 2).unwrap().with_hamming_dist(100);
    let walksat = WalkSat::new(0.57).unwrap();

    let result = solve(&formula, &walksat, &config, &mut rng, &mut Silent);
    assert_eq!(
        result,
        Err(ErrorKind::Config(ConfigError::HammingDistance {
            requested: 100,
            num_vars: 8,
        }))
    );
}
