//! Databases for holding information relevant to a solve.
//!
//!   - [The clause database](crate::db::clause)
//!     + Every clause, original or learned, stored in a single arena and indexed by a [ClauseKey]. \
//!       Alongside the clauses, the arena holds the nodes of the watch lists of each literal.
//!   - [The trail](crate::db::trail)
//!     + The stack of falsified literals, with the flags, reasons, and saved phases of each literal and atom.
//!   - [The decision order](crate::db::order)
//!     + An ordering of all atoms, with recently conflicting atoms first.
//!
//! Each database is sized once, from the atom count of a context, and only the clause database grows during a solve.

pub mod clause;
pub mod order;
pub mod trail;

/// The key of a clause: the offset of the first literal of the clause in the arena.
///
/// A key is stable until the learned clauses of the arena are [compacted](crate::db::clause::ClauseDB::compact_additions).
/// Compaction happens only at the top level, when no key to a learned clause is held by the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey(pub(crate) usize);

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
