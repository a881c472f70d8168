/*!
Boolean constraint propagation.

See [Context::propagate] for the relevant context method.

# Overview

Each entry on the trail between the processed cursor and the top of the trail is a literal made false, and the watch list of each such literal is examined in turn.
For each clause watching the literal an attempt is made to [move the watch](crate::db::clause::ClauseDB::update_watch) to some other literal of the clause which is not false.
If no such literal exists, the other watched literal of the clause is examined:
- If true, the clause is satisfied and nothing happens.
- If unassigned, the literal is made true with the clause as reason.
- If false, the clause conflicts with the current valuation.

# Top-level propagation

Whether propagation happens at the top level is fixed by the reason of the first literal to propagate.
If the literal was not a decision, every literal assigned during propagation is a top-level consequence, and the top level of the trail is extended to cover these once propagation is exhausted.

A conflict during top-level propagation is fundamental, and the formula is unsatisfiable.
Otherwise, a conflict is [analysed](crate::procedures::analysis), the learned clause asserts a literal, and propagation continues from the new top of the trail.
A learned unit clause asserts a top-level literal, and so propagation continues at the top level.
*/

use crate::{
    context::Context,
    db::{
        clause::{WatchLink, WatchStatus},
        trail::Reason,
    },
    misc::log::targets::{self},
    procedures::analysis::AnalysisResult,
    types::err::{self},
};

/// Possible 'Ok' results from propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOk {
    /// Every entry on the trail has been propagated, without conflict.
    Exhausted,

    /// A conflict was found at the top level.
    FundamentalConflict,
}

impl Context {
    /// Propagates every unprocessed entry on the trail, learning a clause from each conflict.
    ///
    /// An error is returned only if a learned clause could not be stored.
    pub fn propagate(&mut self) -> Result<PropagationOk, err::ErrorKind> {
        let mut forced = self.trail.next_is_forced();

        'trail_loop: while let Some(literal) = self.trail.next_unprocessed() {
            let mut link = WatchLink::Head(literal);

            while let Some(node) = self.clause_db.follow(link) {
                let (key, other) = match self.clause_db.update_watch(link, node, literal, &self.trail) {
                    WatchStatus::Moved => continue,
                    WatchStatus::Unmoved { key, other } => (key, other),
                };
                link = WatchLink::Node(node);

                if self.trail.is_true(other) {
                    continue;
                }

                if !self.trail.is_false(other) {
                    log::trace!(target: targets::PROPAGATION, "Propagated {other} from {key}");
                    self.trail.assign(other, Reason::Clause(key), forced);
                    self.counters.total_propagations += 1;
                    continue;
                }

                if forced {
                    log::info!(target: targets::PROPAGATION, "Fundamental conflict from {key}");
                    return Ok(PropagationOk::FundamentalConflict);
                }

                match self.analyze(key)? {
                    AnalysisResult::UnitClause(lemma, asserted) => {
                        forced = true;
                        self.trail.assign(asserted, Reason::Clause(lemma), true);
                    }

                    AnalysisResult::AssertingClause(lemma, asserted) => {
                        self.trail.assign(asserted, Reason::Clause(lemma), false);
                    }
                }
                continue 'trail_loop;
            }
        }

        if forced {
            self.trail.settle();
        }

        Ok(PropagationOk::Exhausted)
    }
}
