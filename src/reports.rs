/*!
Reports for the context.
*/

use crate::{context::ContextState, structures::literal::CLiteral};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving | ContextState::Exhausted => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The status of a (partial) assignment, with respect to a formula.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Status {
    /// The assignment extends to a model of the formula.
    Valid,

    /// The assignment is consistent with propagation, though extends to no model of the formula.
    Incomplete,

    /// The assignment contradicts itself, the dead atoms, or the formula by propagation.
    Invalid,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid"),
            Self::Incomplete => write!(f, "Incomplete"),
            Self::Invalid => write!(f, "Invalid"),
        }
    }
}

/// The response of a context to a [mode](crate::config::Mode).
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Response {
    /// The report of a solve.
    Solve(Report),

    /// The status of an assignment.
    Status(Status),

    /// The literals implied by an assignment, ordered by atom, and the status of the assignment.
    Propagate {
        implied: Vec<CLiteral>,
        status: Status,
    },
}
