/*!
Reduction of the clause database, by removing learned clauses.

# Overview

Reductions happen immediately after a restart, and only once the count of learned clauses exceeds a budget.
The budget grows by a fixed increment until the count of learned clauses is within the budget, so over a solve an increasing count of learned clauses is tolerated.

On a reduction, the number of literals of each learned clause satisfied by the saved phases is counted.
A learned clause is kept only if the count is below the configured [quality](crate::config::Config::reduction_quality), as a clause with many literals agreeing with the saved phases is unlikely to propagate or conflict soon.

Kept clauses are [compacted](crate::db::clause::ClauseDB::compact_additions) over the space of removed clauses, and this invalidates every key to a learned clause.
As reductions follow a restart, the only remaining use of such keys is as the reason of some top-level literal.
Those reasons are replaced by [facts](crate::db::trail::Reason::Fact) beforehand, as the reason of a top-level literal is never examined.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl Context {
    /// Reduces the clause database, if the count of learned clauses exceeds the budget.
    ///
    /// Returns true if a reduction was made.
    pub fn reduce_if_due(&mut self) -> bool {
        if self.clause_db.addition_count() <= self.lemma_budget {
            return false;
        }

        while self.clause_db.addition_count() > self.lemma_budget {
            self.lemma_budget = self
                .lemma_budget
                .saturating_add(self.config.lemma_budget_increment.value);
        }

        self.reduce();
        true
    }

    /// Removes each learned clause with at least as many literals satisfied by the saved phases as the configured quality.
    ///
    /// Must be called at the top level.
    pub fn reduce(&mut self) {
        let quality = self.config.reduction_quality.value;
        let before = self.clause_db.addition_count();

        self.trail.forget_reasons_from(self.clause_db.original_end());

        let phases = self.trail.phases();
        let kept = self.clause_db.compact_additions(|clause| {
            let satisfied = clause
                .iter()
                .filter(|literal| phases[literal.atom() as usize] == literal.polarity())
                .count();
            satisfied < quality
        });

        self.counters.reductions += 1;
        log::info!(target: targets::REDUCTION, "Reduction {}: kept {kept} of {before} learned clauses, budget {}", self.counters.reductions, self.lemma_budget);
    }
}
