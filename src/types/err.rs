//! Error types used in the library.
//!
//! - Most of these indicate misuse of the library, e.g. a literal over an atom which was never declared.
//! - [OutOfMemory](ClauseDBError::OutOfMemory) is the one resource error, returned when the clause arena is full.
//!   It ends the current solve, though the context may still be dropped (or inspected) as usual.
//!
//! Unsatisfiability is never an error.
//! A formula found to be unsatisfiable while building a context is noted in the [state](crate::context::ContextState) of the context, and reported as such.
//!
//! Names of the error enums overlap with the databases or procedures they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, literal::CLiteral};

/// The crate-wide error, wrapping the error of some particular part of the library.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("build: {0}")]
    Build(#[from] BuildError),

    #[error("clause database: {0}")]
    ClauseDB(#[from] ClauseDBError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("parse: {0}")]
    Parse(#[from] ParseError),

    #[error("query: {0}")]
    Query(#[from] QueryError),
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ClauseDBError {
    /// Storing a clause would exceed the fixed capacity of the arena.
    #[error("out of memory: {required} cells requested of a {capacity} cell arena")]
    OutOfMemory { required: usize, capacity: usize },

    /// A solve was requested after the arena was exhausted by an earlier solve.
    #[error("the arena was exhausted by an earlier solve")]
    Exhausted,

    /// Some attempt was made to store an empty clause.
    #[error("attempt to store an empty clause")]
    EmptyClause,
}

/// Errors when configuring a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A requested value lies outside the bounds of an option.
    #[error("value outside of the bounds of {0}")]
    OutOfBounds(&'static str),
}

/// Errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A clause contained `0`, which terminates clauses and is never a literal.
    #[error("0 is not a literal")]
    ZeroLiteral,

    /// A clause contained a literal whose atom was not declared.
    #[error("the atom of {literal} exceeds the declared atom count {atom_count}")]
    AtomOutOfRange { literal: CLiteral, atom_count: Atom },

    /// More atoms were requested than literals can represent.
    #[error("{0} atoms exceed the supported maximum")]
    AtomsExhausted(usize),

    /// A clause was added after a solve or query had begun.
    #[error("clauses may only be added before a solve")]
    SolveStarted,
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    #[error("malformed problem specification on line {0}")]
    ProblemSpecification(usize),

    /// A clause was read before any problem specification.
    #[error("missing problem specification before line {0}")]
    MissingProblem(usize),

    /// Some token on a line could not be read as an integer.
    #[error("unreadable token on line {0}")]
    Token(usize),

    /// A dead atom or assignment directive was malformed.
    #[error("malformed directive on line {0}")]
    Directive(usize),

    /// The input could not be read.
    #[error("failed to read line {0}")]
    Line(usize),
}

/// Errors when querying an assignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// A query was made after a search had begun.
    #[error("queries require a context without decisions")]
    SearchStarted,

    /// The search completing an assignment was interrupted.
    #[error("the search completing an assignment was interrupted")]
    Interrupted,
}
