/*!
The trail: a stack of falsified literals, with the state of each literal and atom.

# Overview

Rather than recording literals made true, the trail records the *negation* of each literal made true.
So, each entry is a literal which is false on the current valuation, and BCP examines the watches of an entry directly.

Three cursors split the trail, with `forced ≤ processed ≤ assigned`:

```none
 0            forced          processed        assigned
 |  top level   |   propagated    |  unpropagated  |
```

- Entries below `forced` hold at the top level, and are never undone.
- Entries below `processed` have had their watches examined by BCP.
- `assigned` is the height of the stack.

# Per-literal and per-atom state

Each literal has a [Falsity], read as 'how is this literal false'.
For the most part a literal is [Unset](Falsity::Unset), [False](Falsity::False), or [Forced](Falsity::Forced) (false at the top level).
The remaining variants are used only during [conflict analysis](crate::procedures::analysis), and every such flag is returned to [False](Falsity::False) before analysis completes.

Each atom has a [Reason] and a saved phase.
The saved phase is the value last given to the atom by propagation, and is used as the value of the atom when [deciding](crate::procedures::decision) on it.
*/

use crate::{
    db::ClauseKey,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// How a literal is false, if at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Falsity {
    /// The literal has no value.
    #[default]
    Unset,

    /// The literal is false, due to some decision.
    False,

    /// The literal is false at the top level.
    Forced,

    /// The literal is part of the implication graph of a conflict under analysis.
    Marked,

    /// Analysis found the literal to be implied by marked literals.
    Implied,

    /// Analysis found the literal not to be implied by marked literals.
    NotImplied,
}

/// Why an atom has a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// The value was chosen.
    Decision,

    /// The value was propagated by the clause.
    Clause(ClauseKey),

    /// The value holds at the top level, independent of any stored clause.
    Fact,
}

/// The trail, and per literal/atom state.
pub struct Trail {
    /// The falsified literals, in order of falsification.
    literals: Vec<CLiteral>,

    /// Entries below this index hold at the top level.
    pub forced: usize,

    /// Entries below this index have been propagated.
    pub processed: usize,

    /// The falsity of each literal, by [index](Literal::index).
    falsity: Vec<Falsity>,

    /// The reason for the value of each atom, by atom.
    reasons: Vec<Reason>,

    /// The saved phase of each atom, by atom.
    phases: Vec<bool>,

    atom_count: Atom,
}

impl Trail {
    pub fn new(atom_count: Atom) -> Self {
        let atom_slots = atom_count as usize + 1;
        Trail {
            literals: Vec::with_capacity(atom_slots),
            forced: 0,
            processed: 0,
            falsity: vec![Falsity::Unset; 2 * atom_count as usize + 1],
            reasons: vec![Reason::Decision; atom_slots],
            phases: vec![false; atom_slots],
            atom_count,
        }
    }

    /// Makes `literal` true, for the given reason.
    ///
    /// The negation of `literal` is pushed to the trail, flagged [Forced](Falsity::Forced) if `forced` and [False](Falsity::False) otherwise, and the phase of the atom is saved.
    pub fn assign(&mut self, literal: CLiteral, reason: Reason, forced: bool) {
        let falsity = match forced {
            true => Falsity::Forced,
            false => Falsity::False,
        };
        self.set_falsity(literal.negate(), falsity);
        self.literals.push(literal.negate());
        self.reasons[literal.atom() as usize] = reason;
        self.phases[literal.atom() as usize] = literal.polarity();
    }

    /// Makes `literal` true, as a decision.
    pub fn decide(&mut self, literal: CLiteral) {
        self.set_falsity(literal.negate(), Falsity::False);
        self.literals.push(literal.negate());
        self.reasons[literal.atom() as usize] = Reason::Decision;
    }

    /// Removes the value of the atom of `literal`, though not `literal` from the trail.
    pub fn unassign(&mut self, literal: CLiteral) {
        self.set_falsity(literal, Falsity::Unset);
    }

    /// Undoes every entry at or above `index`, and marks the remaining entries as propagated.
    pub fn backjump(&mut self, index: usize) {
        for position in (index..self.literals.len()).rev() {
            let literal = self.literals[position];
            self.unassign(literal);
        }
        self.literals.truncate(index);
        self.processed = index;
    }

    /// Undoes every entry above the top level.
    pub fn restart(&mut self) {
        self.backjump(self.forced);
    }

    /// Extends the top level to every propagated entry.
    pub fn settle(&mut self) {
        self.forced = self.processed;
    }

    /// True if the next entry to propagate was not a decision.
    ///
    /// Propagation from such an entry happens at the top level.
    pub fn next_is_forced(&self) -> bool {
        self.literals
            .get(self.processed)
            .is_some_and(|literal| self.reason(literal.atom()) != Reason::Decision)
    }

    /// The next entry to propagate, if one exists, and advances past the entry.
    pub fn next_unprocessed(&mut self) -> Option<CLiteral> {
        let literal = self.literals.get(self.processed).copied()?;
        self.processed += 1;
        Some(literal)
    }

    pub fn falsity(&self, literal: CLiteral) -> Falsity {
        self.falsity[literal.index(self.atom_count)]
    }

    pub fn set_falsity(&mut self, literal: CLiteral, falsity: Falsity) {
        let index = literal.index(self.atom_count);
        self.falsity[index] = falsity;
    }

    pub fn is_false(&self, literal: CLiteral) -> bool {
        self.falsity(literal) != Falsity::Unset
    }

    pub fn is_true(&self, literal: CLiteral) -> bool {
        self.is_false(literal.negate())
    }

    pub fn is_assigned(&self, atom: Atom) -> bool {
        let literal = CLiteral::new(atom, true);
        self.is_false(literal) || self.is_true(literal)
    }

    /// The value of `atom`, if assigned.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        let literal = CLiteral::new(atom, true);
        if self.is_true(literal) {
            Some(true)
        } else if self.is_false(literal) {
            Some(false)
        } else {
            None
        }
    }

    pub fn reason(&self, atom: Atom) -> Reason {
        self.reasons[atom as usize]
    }

    pub fn phase(&self, atom: Atom) -> bool {
        self.phases[atom as usize]
    }

    /// The saved phase of each atom, indexed by atom (with an unused entry for `0`).
    pub fn phases(&self) -> &[bool] {
        &self.phases
    }

    /// The entry at `index`.
    pub fn literal_at(&self, index: usize) -> CLiteral {
        self.literals[index]
    }

    /// The height of the trail.
    pub fn assigned(&self) -> usize {
        self.literals.len()
    }

    /// Every entry on the trail, in order.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The entries which hold at the top level.
    pub fn top_level(&self) -> &[CLiteral] {
        &self.literals[..self.forced]
    }

    /// Replaces each reason given by a clause at or past `boundary` with [Fact](Reason::Fact).
    ///
    /// Used when the clauses past `boundary` are about to move.
    pub fn forget_reasons_from(&mut self, boundary: usize) {
        for literal in &self.literals {
            let reason = &mut self.reasons[literal.atom() as usize];
            if let Reason::Clause(key) = reason {
                if key.0 >= boundary {
                    *reason = Reason::Fact;
                }
            }
        }
    }

    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_falsifies_negation() {
        let mut trail = Trail::new(3);
        trail.assign(-2, Reason::Fact, true);

        assert_eq!(trail.literals(), &[2]);
        assert_eq!(trail.falsity(2), Falsity::Forced);
        assert!(trail.is_true(-2));
        assert_eq!(trail.value_of(2), Some(false));
        assert!(!trail.phase(2));
        assert_eq!(trail.value_of(1), None);
    }

    #[test]
    fn decisions_keep_saved_phase() {
        let mut trail = Trail::new(2);
        trail.assign(1, Reason::Fact, false);
        trail.restart();
        assert!(trail.phase(1));

        trail.decide(-1);
        assert_eq!(trail.value_of(1), Some(false));
        assert!(trail.phase(1));
    }

    #[test]
    fn restart_keeps_top_level() {
        let mut trail = Trail::new(4);
        trail.assign(1, Reason::Fact, true);
        assert!(trail.next_is_forced());
        assert_eq!(trail.next_unprocessed(), Some(-1));
        trail.settle();

        trail.decide(2);
        assert!(!trail.next_is_forced());
        trail.assign(3, Reason::Fact, false);
        assert_eq!(trail.assigned(), 3);

        trail.restart();
        assert_eq!(trail.assigned(), 1);
        assert_eq!(trail.processed, 1);
        assert_eq!(trail.top_level(), &[-1]);
        assert!(!trail.is_assigned(2));
        assert!(!trail.is_assigned(3));
        assert!(trail.is_assigned(1));
    }

    #[test]
    fn forgotten_reasons_become_facts() {
        let mut trail = Trail::new(2);
        trail.assign(1, Reason::Clause(ClauseKey(4)), true);
        trail.assign(2, Reason::Clause(ClauseKey(40)), true);

        trail.forget_reasons_from(10);
        assert_eq!(trail.reason(1), Reason::Clause(ClauseKey(4)));
        assert_eq!(trail.reason(2), Reason::Fact);
    }
}
