/*!
Analysis of a conflict, and learning a clause from the conflict.

See [Context::analyze] for the relevant context method.

# Overview

Every literal of the conflicting clause is false, and each is [bumped](Context::bump): marked as involved in the conflict and moved to the front of the [decision order](crate::db::order).
Top-level literals are neither marked nor moved.

The trail is then walked down from the top.
For each marked entry, the trail below is scanned for another marked entry before the decision of the current level.
If there is none, the entry is the first unique implication point (UIP) of the conflict.
Otherwise, the literals of the reason of the entry are bumped in turn.
Each entry passed is unassigned, and if no UIP is found before the decision of the current level, the decision is the UIP.

# The learned clause

From the UIP down to the top level, each marked entry is kept as a literal of the learned clause unless the entry is implied by other marked literals.
As the trail records false literals, the clause is false on the valuation before analysis, and the UIP is the first literal of the clause.

The count of decision levels with some kept literal is the LBD of the clause, and is given to the [moving averages](crate::generic::ema) used to schedule restarts.

The trail is then backjumped to the lowest level at which the clause asserts the UIP.
For a unit clause, this is the top level.

# Implied literals

A literal is implied if every other literal of the reason for the literal is marked, true at the top level, or itself implied.
Decisions are never implied.
The check is iterative, with an explicit stack, and results are recorded with the flag of each examined literal until the learned clause is built.
*/

use crate::{
    context::{Context, ContextState},
    db::{
        clause::ClauseSource,
        trail::{Falsity, Reason},
        ClauseKey,
    },
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// Possible results from analysis of a conflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// A unit clause was learned, asserting the literal at the top level.
    UnitClause(ClauseKey, CLiteral),

    /// A clause was learned which asserts the literal, after a backjump.
    AssertingClause(ClauseKey, CLiteral),
}

/// A literal whose reason is being examined, and the index of the next literal of the reason to examine.
struct ImpliedFrame {
    literal: CLiteral,
    reason: ClauseKey,
    index: usize,
}

impl Context {
    /// Marks `literal` as involved in a conflict and moves the atom of `literal` to the front of the decision order, unless `literal` is false at the top level.
    pub fn bump(&mut self, literal: CLiteral) {
        if self.trail.falsity(literal) != Falsity::Forced {
            self.trail.set_falsity(literal, Falsity::Marked);
            self.order.bump(literal.atom());
        }
    }

    /// Bumps each literal of the clause at `key`, from index `from`.
    fn bump_clause(&mut self, key: ClauseKey, from: usize) {
        let mut index = from;
        while let Some(literal) = self.clause_db.literal_at(key, index) {
            self.bump(literal);
            index += 1;
        }
    }

    /// True if a marked entry precedes the decision of the current level, from `position` down.
    fn marked_before_decision(&self, position: usize) -> bool {
        let mut check = position;
        loop {
            check -= 1;
            let literal = self.trail.literal_at(check);
            if self.trail.falsity(literal) == Falsity::Marked {
                return true;
            }
            if self.trail.reason(literal.atom()) == Reason::Decision {
                return false;
            }
        }
    }

    /// Analyses the conflict of the clause at `key`, stores the learned clause, and backjumps.
    ///
    /// Requires some decision on the trail.
    /// If the learned clause cannot be stored the context is left [Exhausted](ContextState::Exhausted).
    pub fn analyze(&mut self, key: ClauseKey) -> Result<AnalysisResult, err::ErrorKind> {
        self.counters.total_conflicts += 1;
        self.counters.fresh_conflicts += 1;
        log::trace!(target: targets::ANALYSIS, "Analysis of {key}");

        self.bump_clause(key, 0);

        let mut top = self.trail.assigned() - 1;
        loop {
            let literal = self.trail.literal_at(top);
            let reason = match self.trail.reason(literal.atom()) {
                Reason::Decision => break,
                reason => reason,
            };

            if self.trail.falsity(literal) == Falsity::Marked {
                if !self.marked_before_decision(top) {
                    break;
                }
                if let Reason::Clause(reason_key) = reason {
                    self.bump_clause(reason_key, 1);
                }
            }

            self.trail.unassign(literal);
            top -= 1;
        }

        let uip = top;
        let mut lemma = Vec::default();
        let mut lbd = 0;
        let mut level_kept = false;
        let mut backjump_index = uip;

        for position in (self.trail.forced..=uip).rev() {
            let literal = self.trail.literal_at(position);

            if self.trail.falsity(literal) == Falsity::Marked
                && (position == uip || !self.implied(literal))
            {
                lemma.push(literal);
                level_kept = true;
            }

            if self.trail.reason(literal.atom()) == Reason::Decision {
                if level_kept {
                    lbd += 1;
                }
                level_kept = false;
                if lemma.len() == 1 {
                    backjump_index = position;
                }
            }

            self.trail.set_falsity(literal, Falsity::False);
        }

        self.averages.update(lbd);
        self.trail.backjump(backjump_index);

        let lemma_key = match self.clause_db.store(&lemma, ClauseSource::Addition) {
            Ok(key) => key,
            Err(e) => {
                self.state = ContextState::Exhausted;
                return Err(err::ErrorKind::from(e));
            }
        };
        self.counters.additions += 1;
        log::debug!(target: targets::ANALYSIS, "Learned {lemma_key}: {lemma:?}, with LBD {lbd}");

        let asserted = lemma[0];
        match lemma.len() {
            1 => Ok(AnalysisResult::UnitClause(lemma_key, asserted)),
            _ => Ok(AnalysisResult::AssertingClause(lemma_key, asserted)),
        }
    }

    /// True if `literal` is implied by the marked literals of the trail.
    ///
    /// Each literal examined while checking the reasons of `literal` is flagged as [Implied](Falsity::Implied) or [NotImplied](Falsity::NotImplied).
    pub fn implied(&mut self, literal: CLiteral) -> bool {
        let mut stack = match self.trail.reason(literal.atom()) {
            Reason::Decision => return false,
            Reason::Fact => return true,
            Reason::Clause(reason) => vec![ImpliedFrame {
                literal,
                reason,
                index: 1,
            }],
        };

        while let Some(frame) = stack.last_mut() {
            let Some(antecedent) = self.clause_db.literal_at(frame.reason, frame.index) else {
                self.trail.set_falsity(frame.literal, Falsity::Implied);
                stack.pop();
                continue;
            };
            frame.index += 1;

            let implied = match self.trail.falsity(antecedent) {
                Falsity::Marked | Falsity::Forced | Falsity::Implied => true,
                Falsity::NotImplied => false,
                Falsity::False | Falsity::Unset => match self.trail.reason(antecedent.atom()) {
                    Reason::Decision => false,
                    Reason::Fact => true,
                    Reason::Clause(reason) => {
                        stack.push(ImpliedFrame {
                            literal: antecedent,
                            reason,
                            index: 1,
                        });
                        true
                    }
                },
            };

            if !implied {
                for frame in stack {
                    self.trail.set_falsity(frame.literal, Falsity::NotImplied);
                }
                return false;
            }
        }

        true
    }
}
