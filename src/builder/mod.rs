/*!
Reading and writing the DIMACS-like text form of a formula.

The form is standard DIMACS CNF extended with one comment line carrying the designated satisfying
assignment as a hexadecimal literal:

```none
c any comment
c assgn 0x7
p cnf 3 4
1 -2 0
-1 3 0
2 3 0
1 2 0
```

The `c assgn` line is required: generated formulas always carry their satisfying assignment, and
round-trip fidelity over it is part of the format.
Parsing then serializing then reparsing yields an equal formula with respect to clause content, variable
count, and the recorded satisfying assignment.

Serialization is through [Display] on [Formula].
*/

use std::io::BufRead;

use crate::misc::log::targets;
use crate::structures::assignment::Assignment;
use crate::structures::formula::Formula;
use crate::structures::literal::Literal;
use crate::types::err::{ErrorKind, ParseError};

/// Reads a formula from its DIMACS-like text form.
///
/// ```rust
/// # use sls_sat::builder::parse_dimacs;
/// let dimacs = "\
/// c assgn 0x7
/// p cnf 3 4
/// 1 -2 0
/// -1 3 0
/// 2 3 0
/// 1 2 0
/// ";
///
/// let formula = parse_dimacs(dimacs.as_bytes()).unwrap();
/// assert_eq!(formula.num_vars(), 3);
/// assert!(formula.is_satisfied_by(formula.satisfying_assignment()));
/// ```
pub fn parse_dimacs(reader: impl BufRead) -> Result<Formula, ErrorKind> {
    let mut num_vars: Option<u32> = None;
    let mut expected_clauses: Option<usize> = None;
    let mut assignment_hex: Option<String> = None;
    let mut comments: Vec<String> = Vec::new();
    let mut clauses: Vec<Vec<Literal>> = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line_number = line_index + 1;
        let line = line.map_err(|_| ParseError::Line(line_number))?;
        let content = line.trim();

        match content.chars().next() {
            None => continue,

            Some('c') => {
                if let Some(rest) = content.strip_prefix("c assgn") {
                    match rest.split_whitespace().next() {
                        Some(hex) => assignment_hex = Some(hex.to_string()),
                        None => return Err(ParseError::AssignmentLiteral.into()),
                    }
                } else {
                    comments.push(content.to_string());
                }
            }

            Some('p') => {
                let mut details = content.split_whitespace();
                if details.next() != Some("p") || details.next() != Some("cnf") {
                    return Err(ParseError::ProblemSpecification.into());
                }

                let vars: u32 = details
                    .next()
                    .and_then(|token| token.parse().ok())
                    .ok_or(ParseError::ProblemSpecification)?;
                let clause_count: usize = details
                    .next()
                    .and_then(|token| token.parse().ok())
                    .ok_or(ParseError::ProblemSpecification)?;

                num_vars = Some(vars);
                expected_clauses = Some(clause_count);
            }

            Some(_) => {
                let mut clause = Vec::new();
                for token in content.split_whitespace() {
                    let literal: Literal =
                        token.parse().map_err(|_| ParseError::Line(line_number))?;
                    if literal == 0 {
                        break;
                    }
                    clause.push(literal);
                }

                if clause.is_empty() {
                    return Err(ParseError::EmptyClause(line_number).into());
                }
                clauses.push(clause);
            }
        }
    }

    let num_vars = num_vars.ok_or(ParseError::MissingProblemLine)?;
    let hex = assignment_hex.ok_or(ParseError::MissingAssignment)?;
    let satisfying_assignment =
        Assignment::from_hex(&hex, num_vars).map_err(ErrorKind::Parse)?;

    if let Some(expected) = expected_clauses {
        if expected != clauses.len() {
            log::warn!(
                target: targets::PARSER,
                "problem line promised {expected} clauses, read {}",
                clauses.len()
            );
        }
    }

    let mut formula = Formula::new(clauses, num_vars, satisfying_assignment)?;
    for comment in comments {
        formula.push_comment(comment);
    }

    Ok(formula)
}

/// The DIMACS-like text form: comments, the `c assgn` line, the problem line, then zero-terminated
/// clauses.
impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for comment in self.comments() {
            writeln!(f, "{comment}")?;
        }
        writeln!(f, "c assgn {}", self.satisfying_assignment().as_hex())?;
        writeln!(f, "p cnf {} {}", self.num_vars(), self.num_clauses())?;

        for clause in self.clauses() {
            for literal in clause {
                write!(f, "{literal} ")?;
            }
            writeln!(f, "0")?;
        }

        Ok(())
    }
}
