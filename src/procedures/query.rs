/*!
Queries about a (partial) assignment, relative to the formula of a context.

# Overview

A query is a collection of *dead* atoms, which must be false, together with an *assignment*, a sequence of literals which should be true.
Each query replays the dead atoms and then the assignment at the top level of the trail:

1. Any pending consequences of the unit clauses of the formula are propagated.
2. Each dead atom is valued false, and the consequences are propagated.
3. Each literal of the assignment is made true in turn, and the consequences are propagated.

The assignment is [Invalid](Status::Invalid) if some dead atom or literal of the assignment is already false when replayed, or if propagation conflicts.

A consistent assignment is then completed by a [solve](crate::procedures::solve).
As saved phases begin false, each atom without a value is first tried false.
The assignment is [Valid](Status::Valid) if the solve finds a model, and otherwise [Incomplete](Status::Incomplete).

Replay is at the top level, and so a query may only be made on a context in the [Input](ContextState::Input) state.
The facts of a query remain in the context, and an invalid or incomplete assignment leaves the context [Unsatisfiable](ContextState::Unsatisfiable).

```rust
# use stoat_sat::context::Context;
# use stoat_sat::config::Config;
# use stoat_sat::reports::Status;
let mut the_context = Context::from_config(Config::default(), 3).unwrap();
assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(vec![-2, 3]).is_ok());

assert_eq!(the_context.check_assignment(&[1], &[-3]), Ok(Status::Invalid));
```

# Implied literals

[propagate_only](Context::propagate_only) reports the consequences of the replay, without completing the assignment.
These are the literals made true as facts during the replay, excluding the literals of the assignment.
So, the negations of the dead atoms, and the unit clauses of the formula, are included.
If the replay ends in a conflict, the facts propagated before the conflict are included.
*/

use crate::{
    config::Mode,
    context::{Context, ContextState},
    db::trail::{Falsity, Reason},
    misc::log::targets::{self},
    procedures::bcp::PropagationOk,
    reports::{Report, Response, Status},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A query, as dead atoms and an assignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    /// Atoms which must be false.
    pub dead: Vec<Atom>,

    /// Literals which should be true, in order of replay.
    pub assignment: Vec<CLiteral>,
}

impl Context {
    /// Checks `literal` is a literal of some atom of the context.
    fn check_literal(&self, literal: CLiteral) -> Result<(), err::BuildError> {
        if literal == 0 {
            return Err(err::BuildError::ZeroLiteral);
        }
        if literal.atom() > self.atom_count() {
            return Err(err::BuildError::AtomOutOfRange {
                literal,
                atom_count: self.atom_count(),
            });
        }
        Ok(())
    }

    /// Propagates at the top level, and returns true if no conflict was found.
    fn propagate_facts(&mut self) -> Result<bool, err::ErrorKind> {
        match self.propagate()? {
            PropagationOk::Exhausted => Ok(true),
            PropagationOk::FundamentalConflict => Ok(false),
        }
    }

    /// Makes `literal` true as a fact, unless `literal` already has a value.
    ///
    /// Returns false if `literal` is already false.
    fn replay_literal(&mut self, literal: CLiteral) -> bool {
        if self.trail.is_false(literal) {
            log::debug!(target: targets::QUERY, "{literal} is already false");
            return false;
        }
        if !self.trail.is_true(literal) {
            self.trail.assign(literal, Reason::Fact, true);
        }
        true
    }

    /// Replays the dead atoms and then the assignment at the top level, and returns true if the assignment is consistent.
    fn replay(&mut self, dead: &[Atom], assignment: &[CLiteral]) -> Result<bool, err::ErrorKind> {
        match self.state {
            ContextState::Input => {}
            ContextState::Unsatisfiable => return Ok(false),
            ContextState::Solving | ContextState::Satisfiable | ContextState::Exhausted => {
                return Err(err::ErrorKind::from(err::QueryError::SearchStarted));
            }
        }

        for literal in dead.iter().map(|atom| CLiteral::new(*atom, false)) {
            self.check_literal(literal)?;
        }
        for literal in assignment {
            self.check_literal(*literal)?;
        }

        self.state = ContextState::Solving;
        let consistent = self.replay_facts(dead, assignment)?;
        if !consistent {
            self.state = ContextState::Unsatisfiable;
        }
        Ok(consistent)
    }

    fn replay_facts(&mut self, dead: &[Atom], assignment: &[CLiteral]) -> Result<bool, err::ErrorKind> {
        if !self.propagate_facts()? {
            log::debug!(target: targets::QUERY, "The formula conflicts by propagation");
            return Ok(false);
        }

        for atom in dead {
            if !self.replay_literal(CLiteral::new(*atom, false)) {
                return Ok(false);
            }
        }
        if !self.propagate_facts()? {
            log::debug!(target: targets::QUERY, "The dead atoms conflict by propagation");
            return Ok(false);
        }

        for literal in assignment {
            if !self.replay_literal(*literal) || !self.propagate_facts()? {
                log::debug!(target: targets::QUERY, "The assignment conflicts at {literal}");
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// The literals made true as facts, ordered by atom, excluding the literals of `assignment`.
    ///
    /// Facts propagated before a conflict are included, as a conflict ends propagation before the top level is extended.
    fn implied_literals(&self, assignment: &[CLiteral]) -> Vec<CLiteral> {
        let mut implied = self
            .trail
            .literals()
            .iter()
            .filter(|literal| self.trail.falsity(**literal) == Falsity::Forced)
            .map(|literal| literal.negate())
            .filter(|literal| !assignment.contains(literal))
            .collect::<Vec<_>>();
        implied.sort_unstable_by_key(|literal| literal.atom());
        implied
    }

    /// Completes a consistent assignment by a solve.
    fn complete(&mut self) -> Result<Status, err::ErrorKind> {
        match self.solve()? {
            Report::Satisfiable => Ok(Status::Valid),
            Report::Unsatisfiable => Ok(Status::Incomplete),
            Report::Unknown => Err(err::ErrorKind::from(err::QueryError::Interrupted)),
        }
    }

    /// The status of `assignment`, given the `dead` atoms.
    pub fn check_assignment(
        &mut self,
        dead: &[Atom],
        assignment: &[CLiteral],
    ) -> Result<Status, err::ErrorKind> {
        match self.replay(dead, assignment)? {
            true => self.complete(),
            false => Ok(Status::Invalid),
        }
    }

    /// The literals implied by `assignment` together with the `dead` atoms, ordered by atom.
    ///
    /// The context is left at the top level, with the consequences of the assignment.
    pub fn propagate_only(
        &mut self,
        dead: &[Atom],
        assignment: &[CLiteral],
    ) -> Result<Vec<CLiteral>, err::ErrorKind> {
        self.replay(dead, assignment)?;
        Ok(self.implied_literals(assignment))
    }

    /// The response of the context to `mode`, with `query` used by the status and propagate modes.
    pub fn respond(&mut self, mode: Mode, query: &Query) -> Result<Response, err::ErrorKind> {
        match mode {
            Mode::Solve => Ok(Response::Solve(self.solve()?)),

            Mode::Status => Ok(Response::Status(
                self.check_assignment(&query.dead, &query.assignment)?,
            )),

            Mode::Propagate => {
                let consistent = self.replay(&query.dead, &query.assignment)?;
                let implied = self.implied_literals(&query.assignment);
                let status = match consistent {
                    true => self.complete()?,
                    false => Status::Invalid,
                };
                Ok(Response::Propagate { implied, status })
            }
        }
    }
}
