/*!
Methods for choosing the value of an atom.

# Overview

Atoms are considered in the [decision order](crate::db::order), from a cursor.
The cursor steps away from the head of the order past every atom with a value, and the first atom without a value is chosen.
If the cursor reaches the end of the order every atom has a value, and the formula is satisfiable.

The cursor is reset to the head of the order after any conflict, as conflicts reorder the atoms, and undo values.
Without a conflict no value is undone, so every atom passed by the cursor still has a value.

# Phase saving

A chosen atom is valued with its saved phase, the value most recently given to the atom by propagation.
Decisions do not update saved phases.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

impl Context {
    /// Makes a decision on the first atom without a value from the decision cursor, if such an atom exists.
    pub fn make_decision(&mut self) -> DecisionOk {
        let mut atom = self.decision_cursor;
        while atom != 0 && self.trail.is_assigned(atom) {
            atom = self.order.prev(atom);
        }
        self.decision_cursor = atom;

        if atom == 0 {
            return DecisionOk::Exhausted;
        }

        let decision = CLiteral::new(atom, self.trail.phase(atom));
        log::trace!(target: targets::DECISION, "Decision {decision}");

        self.trail.decide(decision);
        self.counters.total_decisions += 1;
        DecisionOk::Literal(decision)
    }

    /// Resets the decision cursor to the head of the decision order.
    pub fn reset_decision_cursor(&mut self) {
        self.decision_cursor = self.order.head();
    }
}
