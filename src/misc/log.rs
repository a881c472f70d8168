/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The binary installs a [log4rs](https://docs.rs/log4rs) console logger when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [restarts](crate::procedures::restart)
    pub const RESTART: &str = "restart";

    /// Logs related to [clause deletion](crate::procedures::reduction)
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [queries](crate::procedures::query)
    pub const QUERY: &str = "query";

    /// Logs related to [building](crate::builder) a context
    pub const BUILD: &str = "build";
}
