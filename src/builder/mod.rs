/*!
Tools for building a context.

# Basic methods

A context is created for a fixed count of atoms, with [from_config](crate::context::Context::from_config).
Clauses over those atoms are then added with [add_clause](crate::context::Context::add_clause), before any solve.

Alternatively, a context may be read from a DIMACS input with [read_dimacs](crate::context::Context::read_dimacs), which also reads any [query](crate::procedures::query::Query) in the input.

# Examples

```rust
# use stoat_sat::context::Context;
# use stoat_sat::config::Config;
# use stoat_sat::reports::Report;
# use stoat_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut the_context = Context::from_config(Config::default(), 2).unwrap();
let p = CLiteral::new(1, true);
let q = CLiteral::new(2, true);

let clause_a = CClause::from([p, -q]);
let clause_b = CClause::from([-p, q]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable)
```

Contradictions found while building are not errors, though the context is noted as unsatisfiable.

```rust
# use stoat_sat::context::Context;
# use stoat_sat::config::Config;
# use stoat_sat::builder::ClauseOk;
# use stoat_sat::reports::Report;
let mut the_context = Context::from_config(Config::default(), 1).unwrap();

assert_eq!(the_context.add_clause(1), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(-1), Ok(ClauseOk::Unsatisfiable));
assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
```
*/

mod dimacs;

use crate::{
    context::{Context, ContextState},
    db::{clause::ClauseSource, trail::Reason},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,

    /// The clause is empty, or a unit clause contradicting some other unit clause, and the formula is unsatisfiable.
    Unsatisfiable,
}

impl Context {
    /// Adds a clause to the context.
    ///
    /// Duplicate literals are removed, and the first occurrence of each literal is kept.
    /// A unit clause is immediately valued, at the top level.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::ErrorKind> {
        match self.state {
            ContextState::Input => {}
            ContextState::Unsatisfiable => return Ok(ClauseOk::Unsatisfiable),
            ContextState::Solving | ContextState::Satisfiable | ContextState::Exhausted => {
                return Err(err::ErrorKind::from(err::BuildError::SolveStarted));
            }
        }

        let mut literals: CClause = Vec::with_capacity(clause.size());
        for literal in clause.literals() {
            if literal == 0 {
                return Err(err::ErrorKind::from(err::BuildError::ZeroLiteral));
            }
            if literal.atom() > self.atom_count() {
                return Err(err::ErrorKind::from(err::BuildError::AtomOutOfRange {
                    literal,
                    atom_count: self.atom_count(),
                }));
            }
            if !literals.contains(&literal) {
                literals.push(literal);
            }
        }

        if literals.iter().any(|literal| literals.contains(&literal.negate())) {
            log::trace!(target: targets::BUILD, "Tautology: {}", literals.as_dimacs(false));
            return Ok(ClauseOk::Tautology);
        }

        match literals[..] {
            [] => {
                log::info!(target: targets::BUILD, "Empty clause");
                self.state = ContextState::Unsatisfiable;
                Ok(ClauseOk::Unsatisfiable)
            }

            [literal] => {
                if self.trail.is_false(literal) {
                    log::info!(target: targets::BUILD, "Unit {literal} contradicts a previous unit");
                    self.state = ContextState::Unsatisfiable;
                    return Ok(ClauseOk::Unsatisfiable);
                }

                let key = self.clause_db.store(&literals, ClauseSource::Original)?;
                if !self.trail.is_true(literal) {
                    self.trail.assign(literal, Reason::Clause(key), true);
                }
                Ok(ClauseOk::Added)
            }

            _ => {
                self.clause_db.store(&literals, ClauseSource::Original)?;
                Ok(ClauseOk::Added)
            }
        }
    }

    /// Adds each clause of `clauses` to the context, stopping early if the formula is found to be unsatisfiable.
    pub fn add_clauses<C: Clause>(
        &mut self,
        clauses: impl IntoIterator<Item = C>,
    ) -> Result<ClauseOk, err::ErrorKind> {
        for clause in clauses {
            if self.add_clause(clause)? == ClauseOk::Unsatisfiable {
                return Ok(ClauseOk::Unsatisfiable);
            }
        }
        Ok(ClauseOk::Added)
    }
}
