use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of conflicts seen since the last restart.
    pub fresh_conflicts: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of all literals assigned by propagation.
    pub total_propagations: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// The number of restarts through a solve.
    pub restarts: usize,

    /// The number of reductions of the clause database through a solve.
    pub reductions: usize,

    /// The number of clauses learned through a solve.
    pub additions: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "c conflicts:    {}", self.total_conflicts)?;
        writeln!(f, "c decisions:    {}", self.total_decisions)?;
        writeln!(f, "c propagations: {}", self.total_propagations)?;
        writeln!(f, "c iterations:   {}", self.total_iterations)?;
        writeln!(f, "c restarts:     {}", self.restarts)?;
        writeln!(f, "c reductions:   {}", self.reductions)?;
        writeln!(f, "c additions:    {}", self.additions)?;
        write!(f, "c time:         {:.2?}", self.time)
    }
}
