use std::io::BufRead;

use crate::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    misc::log::targets::{self},
    procedures::query::Query,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::CLiteral,
    },
    types::err::{self},
};

/// The kinds of query directive which may appear in a comment line.
enum Directive {
    Dead,
    Assignment,
}

/// Reads a query directive from the tokens of a comment line (after the initial `c`), if the line holds a directive.
///
/// A directive is `d` (dead atoms) or `v` (assignment literals), followed by a count and then that many integers.
/// A line which does not begin with a directive and count is an ordinary comment.
fn read_directive<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Option<(Directive, Vec<CLiteral>)>, err::ParseError> {
    let Some(first) = tokens.next() else {
        return Ok(None);
    };

    let (directive, rest) = if let Some(rest) = first.strip_prefix('d') {
        (Directive::Dead, rest)
    } else if let Some(rest) = first.strip_prefix('v') {
        (Directive::Assignment, rest)
    } else {
        return Ok(None);
    };

    let count_token = match rest {
        "" => match tokens.next() {
            Some(token) => token,
            None => return Ok(None),
        },
        rest => rest,
    };
    let Ok(count) = count_token.parse::<usize>() else {
        return Ok(None);
    };

    let mut items = Vec::with_capacity(count);
    for token in tokens.by_ref().take(count) {
        match token.parse::<CLiteral>() {
            Ok(0) | Err(_) => return Err(err::ParseError::Directive(line)),
            Ok(item) => items.push(item),
        }
    }
    if items.len() != count {
        return Err(err::ParseError::Directive(line));
    }

    Ok(Some((directive, items)))
}

impl Context {
    /// Reads a context from a DIMACS input, together with any query in the input.
    ///
    /// - Lines beginning `c` are comments, except for the query directives `c d <n> <atoms>` and `c v <n> <literals>`.
    ///   Only the first directive of each kind is read.
    /// - The problem line `p cnf <atoms> <clauses>` fixes the count of atoms, and precedes every clause.
    /// - Clauses are sequences of literals terminated by `0`, and may span lines.
    ///
    /// Reading ends at a line beginning `%`, and clauses past the declared count are ignored.
    ///
    /// ```rust
    /// # use stoat_sat::context::Context;
    /// # use stoat_sat::config::Config;
    /// # use stoat_sat::reports::Report;
    /// let dimacs = "
    /// c d 1 3
    /// p cnf 3 4
    ///  1  2    0
    ///  1 -2    0
    /// -1  2    0
    ///     2  3 0
    /// ";
    ///
    /// let (mut the_context, query) = Context::read_dimacs(Config::default(), dimacs.as_bytes()).unwrap();
    /// assert_eq!(query.dead, vec![3]);
    ///
    /// assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    /// ```
    pub fn read_dimacs(
        config: Config,
        mut reader: impl BufRead,
    ) -> Result<(Context, Query), err::ErrorKind> {
        let mut query = Query::default();
        let (mut dead_read, mut assignment_read) = (false, false);

        let mut context: Option<Context> = None;
        let mut clauses_expected = 0;
        let mut clauses_read = 0;
        let mut clause_buffer: CClause = Vec::default();

        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            let line = buffer.trim_start();
            match line.chars().next() {
                None => continue,

                Some('%') => break,

                Some('c') => {
                    let mut tokens = line.split_whitespace();
                    if tokens.next() != Some("c") {
                        continue;
                    }
                    match read_directive(tokens, line_counter)? {
                        Some((Directive::Dead, items)) if !dead_read => {
                            dead_read = true;
                            for item in items {
                                if item < 0 {
                                    return Err(err::ErrorKind::from(err::ParseError::Directive(
                                        line_counter,
                                    )));
                                }
                                query.dead.push(item as Atom);
                            }
                        }

                        Some((Directive::Assignment, items)) if !assignment_read => {
                            assignment_read = true;
                            query.assignment = items;
                        }

                        _ => {}
                    }
                }

                Some('p') => {
                    if context.is_some() {
                        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification(
                            line_counter,
                        )));
                    }

                    let details = line.split_whitespace().collect::<Vec<_>>();
                    let (atom_count, clause_count) = match details[..] {
                        ["p", "cnf", atoms, clauses] => {
                            match (atoms.parse::<usize>(), clauses.parse::<usize>()) {
                                (Ok(atoms), Ok(clauses)) => (atoms, clauses),
                                _ => {
                                    return Err(err::ErrorKind::from(
                                        err::ParseError::ProblemSpecification(line_counter),
                                    ))
                                }
                            }
                        }
                        _ => {
                            return Err(err::ErrorKind::from(
                                err::ParseError::ProblemSpecification(line_counter),
                            ))
                        }
                    };

                    log::info!(target: targets::BUILD, "Expecting {atom_count} atoms and {clause_count} clauses");
                    context = Some(Context::from_config(config.clone(), atom_count)?);
                    clauses_expected = clause_count;
                }

                Some(_) => {
                    let Some(the_context) = context.as_mut() else {
                        return Err(err::ErrorKind::from(err::ParseError::MissingProblem(
                            line_counter,
                        )));
                    };
                    if clauses_read == clauses_expected {
                        continue;
                    }

                    for token in line.split_whitespace() {
                        let literal = match token.parse::<CLiteral>() {
                            Ok(literal) => literal,
                            Err(_) => {
                                return Err(err::ErrorKind::from(err::ParseError::Token(
                                    line_counter,
                                )))
                            }
                        };

                        if literal != 0 {
                            clause_buffer.push(literal);
                            continue;
                        }

                        let the_clause = std::mem::take(&mut clause_buffer);
                        if the_context.add_clause(the_clause)? == ClauseOk::Unsatisfiable {
                            log::info!(target: targets::BUILD, "Unsatisfiable by clause {}", clauses_read + 1);
                        }
                        clauses_read += 1;
                        if clauses_read == clauses_expected {
                            continue 'line_loop;
                        }
                    }
                }
            }
        }

        let Some(mut the_context) = context else {
            return Err(err::ErrorKind::from(err::ParseError::MissingProblem(
                line_counter,
            )));
        };

        if !clause_buffer.is_empty() && clauses_read < clauses_expected {
            the_context.add_clause(clause_buffer)?;
        }

        Ok((the_context, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextState;

    #[test]
    fn directives_are_read() {
        let dimacs = "c an ordinary comment
c d 2 4 5
c v3 1 -2 3
c d 1 1
p cnf 5 1
1 2 3 4 5 0
";
        let (context, query) = Context::read_dimacs(Config::default(), dimacs.as_bytes()).unwrap();
        assert_eq!(context.atom_count(), 5);
        assert_eq!(query.dead, vec![4, 5]);
        assert_eq!(query.assignment, vec![1, -2, 3]);
    }

    #[test]
    fn ordinary_comments_resembling_directives() {
        let dimacs = "c derived from a puzzle
c v is for value
p cnf 1 1
1 0
";
        let (_, query) = Context::read_dimacs(Config::default(), dimacs.as_bytes()).unwrap();
        assert!(query.dead.is_empty());
        assert!(query.assignment.is_empty());
    }

    #[test]
    fn clauses_span_lines() {
        let dimacs = "p cnf 3 2
1 2
3 0 -1
-2 0
";
        let (context, _) = Context::read_dimacs(Config::default(), dimacs.as_bytes()).unwrap();
        assert_eq!(context.clause_db.watchers(1).len(), 1);
        assert_eq!(context.clause_db.watchers(-1).len(), 1);
        assert_eq!(context.clause_db.watchers(3).len(), 0);
    }

    #[test]
    fn malformed_inputs() {
        let missing = "1 2 0\n";
        assert_eq!(
            Context::read_dimacs(Config::default(), missing.as_bytes()).err(),
            Some(err::ErrorKind::Parse(err::ParseError::MissingProblem(1)))
        );

        let header = "p cnf x 2\n";
        assert_eq!(
            Context::read_dimacs(Config::default(), header.as_bytes()).err(),
            Some(err::ErrorKind::Parse(err::ParseError::ProblemSpecification(1)))
        );

        let token = "p cnf 2 1\n1 two 0\n";
        assert_eq!(
            Context::read_dimacs(Config::default(), token.as_bytes()).err(),
            Some(err::ErrorKind::Parse(err::ParseError::Token(2)))
        );

        let directive = "c d 2 1\np cnf 2 1\n1 0\n";
        assert_eq!(
            Context::read_dimacs(Config::default(), directive.as_bytes()).err(),
            Some(err::ErrorKind::Parse(err::ParseError::Directive(1)))
        );
    }

    #[test]
    fn contradiction_in_input() {
        let dimacs = "p cnf 1 2\n1 0\n-1 0\n";
        let (context, _) = Context::read_dimacs(Config::default(), dimacs.as_bytes()).unwrap();
        assert_eq!(context.state, ContextState::Unsatisfiable);
    }
}
