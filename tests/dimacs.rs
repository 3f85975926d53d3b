//! The DIMACS-like text form: round trips, comment handling, and malformed input.

use sls_sat::builder::parse_dimacs;
use sls_sat::generator::generate_satisfiable_3cnf;
use sls_sat::generic::pcg::Pcg32;
use sls_sat::types::err::{ErrorKind, ParseError};

#[test]
fn generated_formulas_round_trip() {
    let mut rng = Pcg32::new(301);
    for _ in 0..5 {
        let formula = generate_satisfiable_3cnf(16, 4.2, &mut rng).unwrap();

        let text = formula.to_string();
        let reparsed = parse_dimacs(text.as_bytes()).unwrap();

        assert_eq!(reparsed, formula);
        assert_eq!(
            reparsed.satisfying_assignment(),
            formula.satisfying_assignment()
        );
        assert!(reparsed.is_satisfied_by(reparsed.satisfying_assignment()));
    }
}

#[test]
fn a_small_formula_parses_as_written() {
    let text = "\
c from a worked example
c assgn 0x7
p cnf 3 4
1 -2 0
-1 3 0
2 3 0
1 2 0
";
    let formula = parse_dimacs(text.as_bytes()).unwrap();

    assert_eq!(formula.num_vars(), 3);
    assert_eq!(formula.num_clauses(), 4);
    assert_eq!(formula.clause(0), &[1, -2]);
    assert_eq!(formula.clause(3), &[1, 2]);
    assert_eq!(formula.satisfying_assignment().as_hex(), "0x7");
    assert_eq!(formula.comments(), ["c from a worked example"]);
}

#[test]
fn comments_survive_a_round_trip() {
    let text = "\
c first note
c second note
c assgn 0x3
p cnf 2 1
1 2 0
";
    let formula = parse_dimacs(text.as_bytes()).unwrap();
    let reparsed = parse_dimacs(formula.to_string().as_bytes()).unwrap();

    assert_eq!(reparsed.comments(), ["c first note", "c second note"]);
}

#[test]
fn blank_lines_and_a_wrong_clause_count_are_tolerated() {
    let text = "
c assgn 0x1

p cnf 1 9

1 0
";
    let formula = parse_dimacs(text.as_bytes()).unwrap();
    assert_eq!(formula.num_clauses(), 1);
}

#[test]
fn a_missing_assignment_comment_is_rejected() {
    let text = "\
p cnf 2 1
1 2 0
";
    assert_eq!(
        parse_dimacs(text.as_bytes()),
        Err(ErrorKind::Parse(ParseError::MissingAssignment))
    );
}

#[test]
fn a_missing_problem_line_is_rejected() {
    let text = "\
c assgn 0x3
1 2 0
";
    assert_eq!(
        parse_dimacs(text.as_bytes()),
        Err(ErrorKind::Parse(ParseError::MissingProblemLine))
    );
}

#[test]
fn a_malformed_problem_line_is_rejected() {
    for text in [
        "p dnf 2 1\nc assgn 0x3\n1 2 0\n",
        "p cnf two 1\nc assgn 0x3\n1 2 0\n",
        "p cnf 2\nc assgn 0x3\n1 2 0\n",
    ] {
        assert_eq!(
            parse_dimacs(text.as_bytes()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }
}

#[test]
fn an_empty_clause_line_is_rejected() {
    let text = "\
c assgn 0x3
p cnf 2 1
0
";
    assert_eq!(
        parse_dimacs(text.as_bytes()),
        Err(ErrorKind::Parse(ParseError::EmptyClause(3)))
    );
}

#[test]
fn assignment_literals_must_fit_the_variable_count() {
    // 0x10 sets bit 5 of a 2-variable formula.
    let text = "\
c assgn 0x10
p cnf 2 1
1 2 0
";
    assert_eq!(
        parse_dimacs(text.as_bytes()),
        Err(ErrorKind::Parse(ParseError::AssignmentLiteral))
    );

    let text = "\
c assgn
p cnf 2 1
1 2 0
";
    assert_eq!(
        parse_dimacs(text.as_bytes()),
        Err(ErrorKind::Parse(ParseError::AssignmentLiteral))
    );
}

#[test]
fn unparseable_literals_name_their_line() {
    let text = "\
c assgn 0x3
p cnf 2 1
1 two 0
";
    assert_eq!(
        parse_dimacs(text.as_bytes()),
        Err(ErrorKind::Parse(ParseError::Line(3)))
    );
}
