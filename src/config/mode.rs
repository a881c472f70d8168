use std::str::FromStr;

/// What to ask of a context, once built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Determine the satisfiability of the formula.
    #[default]
    Solve,

    /// Determine whether a (partial) assignment is valid, incomplete, or invalid.
    Status,

    /// Report the literals implied by a (partial) assignment, and the status of the assignment.
    Propagate,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solve => write!(f, "solve"),
            Self::Status => write!(f, "status"),
            Self::Propagate => write!(f, "propagate"),
        }
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solve" => Ok(Self::Solve),
            "status" => Ok(Self::Status),
            "propagate" => Ok(Self::Propagate),
            _unknown_string => Err(()),
        }
    }
}
