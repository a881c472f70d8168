//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! stoat_sat is a small conflict-driven clause-learning solver, in the style of the glucose family of solvers, together with queries for checking (partial) assignments against a formula.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration and a count of atoms.
//! Clauses may be added though the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programatically](crate::context::Context::add_clause).
//!
//! Internally, a solve is viewed in terms of manipulation of a handful of databases:
//! - Every clause is stored in a single arena, the [clause database](crate::db::clause), which also holds the watch lists of each literal.
//! - The valuation is stored on the [trail](crate::db::trail), as a stack of falsified literals.
//! - The order in which atoms are decided on is kept by the [decision order](crate::db::order).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [queries](crate::procedures::query) on (partial) assignments.
//! - The [configuration](crate::config) to see what may be tuned.
//!
//! # Examples
//!
//! + Find (a count of) all valuations of some collection of atoms, with a fresh context for each solve.
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! # use stoat_sat::structures::literal::Literal;
//! let atom_count = 4;
//! let mut blocked: Vec<Vec<i32>> = Vec::default();
//!
//! loop {
//!     let mut the_context = Context::from_config(Config::default(), atom_count).unwrap();
//!     assert!(the_context.add_clauses(blocked.clone()).is_ok());
//!
//!     match the_context.solve() {
//!         Ok(Report::Satisfiable) => {}
//!         _ => break,
//!     }
//!
//!     let blocking_clause = the_context
//!         .valuation()
//!         .iter()
//!         .map(|literal| literal.negate())
//!         .collect();
//!     blocked.push(blocking_clause);
//! }
//!
//! assert_eq!(blocked.len(), 2_usize.pow(atom_count as u32));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use stoat_sat::context::Context;
//! # use stoat_sat::config::Config;
//! # use stoat_sat::reports::Report;
//! let dimacs = "
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! let (mut the_context, _) = Context::read_dimacs(Config::default(), dimacs.as_bytes()).unwrap();
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
