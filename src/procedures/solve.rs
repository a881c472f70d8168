//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! Each iteration of the solve loop:
//! - [Propagates](crate::procedures::bcp) every unprocessed entry on the trail.
//!   During propagation each conflict is [analysed](crate::procedures::analysis), a clause is learned, and propagation continues after a backjump.
//!   A conflict at the top level ends the solve, as the formula is unsatisfiable.
//! - If some clause was learned, the [decision cursor](crate::procedures::decision) is reset.
//!   And, a [restart](crate::procedures::restart) may be made, followed by a [reduction](crate::procedures::reduction) of the clause database.
//! - A [decision](crate::procedures::decision) is made.
//!   If every atom has a value, the valuation is a model and the formula is satisfiable.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!                 +---------------+
//!   +-------------| make_decision |-----> satisfiable, if every atom has a value
//!   |             +---------------+
//!   |                     ⌃
//!   |                     |
//!   ⌄   +-----------+     |
//! --+-->| propagate |-----+-----> unsatisfiable, on a conflict at the top level
//!       +-----------+     |
//!                         | if some clause was learned
//!                         ⌄
//!               +----------------------+
//!               | restart, and reduce  |-----> make_decision
//!               +----------------------+
//! ```
//!
//! # Interruptions
//!
//! Before each iteration the solve may be interrupted by:
//! - The [conflict limit](crate::config::Config::conflict_limit).
//! - The [time limit](crate::config::Config::time_limit), measured from the start of the current call.
//! - The [terminate callback](crate::context::Context::set_callback_terminate).
//!
//! An interrupted solve reports [Unknown](Report::Unknown), and a later call continues the solve.
//!
//! # Example
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default(), 2).unwrap();
//!
//! assert!(the_context.add_clause(vec![-1, 2]).is_ok());
//! assert!(the_context.add_clause(vec![1, -2]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(1), the_context.value_of(2));
//!
//! assert!(the_context.model().iter().skip(1).all(|value| !value));
//! ```

use std::time::Instant;

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    procedures::{bcp::PropagationOk, decision::DecisionOk},
    reports::Report,
    types::err::{self},
};

impl Context {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// An error is returned only if the clause database is exhausted.
    /// The context is then left [Exhausted](ContextState::Exhausted), and any further solve returns [Exhausted](err::ClauseDBError::Exhausted).
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Input | ContextState::Solving => {}
            ContextState::Satisfiable | ContextState::Unsatisfiable => return Ok(self.report()),
            ContextState::Exhausted => {
                return Err(err::ErrorKind::from(err::ClauseDBError::Exhausted))
            }
        }

        let start = Instant::now();
        let time_before = self.counters.time;

        self.state = ContextState::Solving;
        self.reset_decision_cursor();

        let result = self.solve_loop(start);
        self.counters.time = time_before + start.elapsed();

        log::info!("Solve ended with {:?}, after {} conflicts", result, self.counters.total_conflicts);
        result
    }

    fn solve_loop(&mut self, start: Instant) -> Result<Report, err::ErrorKind> {
        'solve_loop: loop {
            self.counters.total_iterations += 1;

            if self.interrupted(start) {
                return Ok(Report::Unknown);
            }

            let conflicts = self.counters.total_conflicts;

            match self.propagate()? {
                PropagationOk::FundamentalConflict => {
                    self.state = ContextState::Unsatisfiable;
                    break 'solve_loop;
                }

                PropagationOk::Exhausted => {}
            }

            if self.counters.total_conflicts > conflicts {
                self.reset_decision_cursor();

                if self.restart_if_due() {
                    self.reduce_if_due();
                }
            }

            match self.make_decision() {
                DecisionOk::Literal(_) => continue 'solve_loop,

                DecisionOk::Exhausted => {
                    self.state = ContextState::Satisfiable;
                    break 'solve_loop;
                }
            }
        }

        Ok(self.report())
    }

    /// True if the solve should be interrupted, by some limit or the terminate callback.
    fn interrupted(&mut self, start: Instant) -> bool {
        if let Some(limit) = self.config.conflict_limit.value {
            if self.counters.total_conflicts >= limit {
                log::info!(target: targets::ANALYSIS, "Conflict limit of {limit} reached");
                return true;
            }
        }

        if let Some(limit) = self.config.time_limit.value {
            if start.elapsed() > limit {
                log::info!("Time limit of {limit:?} reached");
                return true;
            }
        }

        self.check_callback_terminate()
    }
}
