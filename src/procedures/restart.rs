/*!
Restarts, scheduled by moving averages of the LBD of learned clauses.

A restart undoes every decision, and every consequence of a decision, while keeping every learned clause.

Restarts are considered only after a conflict.
If the fast moving average of LBD exceeds the configured [margin](crate::config::Config::restart_margin) (as a percentage) of the slow moving average, recent learning has been poor and a restart is made.
The fast average is then lowered to the margin, so an immediate second restart requires further poor learning.
*/

use crate::{context::Context, misc::log::targets::{self}};

impl Context {
    /// Restarts, if restarts are permitted and learning has been poor.
    ///
    /// Returns true if a restart was made.
    pub fn restart_if_due(&mut self) -> bool {
        if !self.config.restart.value {
            return false;
        }

        let margin = self.config.restart_margin.value;
        if !self.averages.exceeds(margin) {
            return false;
        }

        self.averages.clamp_fast(margin);
        self.restart();
        true
    }

    /// Undoes every value above the top level.
    pub fn restart(&mut self) {
        self.trail.restart();
        self.counters.fresh_conflicts = 0;
        self.counters.restarts += 1;
        log::info!(target: targets::RESTART, "Restart {}, at {} conflicts", self.counters.restarts, self.counters.total_conflicts);
    }
}
