/*!
The context, to which clauses are added and within which solves take place.

A context is built for a fixed count of atoms, and owns every database used during a solve.
Clauses are added to a context while it is in the [Input](ContextState::Input) state, after which the context may be [solved](Context::solve) or [queried](crate::procedures::query).

# Example
```rust
# use stoat_sat::context::Context;
# use stoat_sat::config::Config;
# use stoat_sat::reports::Report;
# use stoat_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default(), 2).unwrap();

let p_q_clause = vec![CLiteral::new(1, true), CLiteral::new(2, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(1, false);

assert!(the_context.add_clause(not_p).is_ok());
assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(1), Some(false));
assert_eq!(the_context.value_of(2), Some(true));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;

use callbacks::CallbackTerminate;

use crate::{
    config::Config,
    db::{clause::ClauseDB, order::DecisionOrder, trail::Trail},
    generic::ema::LbdAverages,
    reports::Report,
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve has begun, and the consistency of the database is unknown.
    Solving,

    /// The database is known to be consistent, with a complete valuation.
    Satisfiable,

    /// The database is known to be inconsistent.
    Unsatisfiable,

    /// The clause database was exhausted during a solve, and the context may not be solved further.
    Exhausted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}

/// The context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context/solve.
    pub counters: Counters,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The order in which atoms are decided on.
    pub order: DecisionOrder,

    /// Moving averages of the LBD of learned clauses.
    pub averages: LbdAverages,

    /// The status of the context.
    pub state: ContextState,

    /// The count of learned clauses tolerated before a reduction.
    pub(crate) lemma_budget: usize,

    /// Where the search for an atom to decide on resumes.
    pub(crate) decision_cursor: Atom,

    atom_count: Atom,

    /// Terminates procedures, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl Context {
    /// Creates a context for atoms `1..=atom_count` from some given configuration.
    ///
    /// A count of zero atoms is raised to one.
    pub fn from_config(config: Config, atom_count: usize) -> Result<Self, err::BuildError> {
        if atom_count > ATOM_MAX as usize {
            return Err(err::BuildError::AtomsExhausted(atom_count));
        }
        let atom_count = atom_count.max(1) as Atom;

        Ok(Context {
            clause_db: ClauseDB::new(atom_count, config.arena_capacity.value),
            trail: Trail::new(atom_count),
            order: DecisionOrder::new(atom_count),
            averages: LbdAverages::new(config.fast_window.value, config.slow_window.value),
            counters: Counters::default(),
            state: ContextState::Input,
            lemma_budget: config.lemma_budget.value,
            decision_cursor: atom_count,
            atom_count,
            callback_terminate: None,

            config,
        })
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The count of atoms in the context.
    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    /// The current value of `atom`, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.trail.value_of(atom)
    }

    /// The value of each atom, indexed by atom, with an unused entry for `0`.
    ///
    /// Atoms without a value take their saved phase.
    /// After a satisfiable solve, this is a model of the formula.
    pub fn model(&self) -> Vec<bool> {
        let mut model = vec![false; self.atom_count as usize + 1];
        for atom in 1..=self.atom_count {
            model[atom as usize] = self
                .trail
                .value_of(atom)
                .unwrap_or_else(|| self.trail.phase(atom));
        }
        model
    }

    /// The literals true on the current valuation, ordered by atom.
    pub fn valuation(&self) -> Vec<CLiteral> {
        (1..=self.atom_count)
            .filter_map(|atom| {
                self.trail
                    .value_of(atom)
                    .map(|value| CLiteral::new(atom, value))
            })
            .collect()
    }
}
