//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation of a literal is a non-zero `i32`, whose magnitude is an atom and whose sign is the polarity.
//! So, `7` is the atom `7` valued true and `-7` is the atom `7` valued false.
//! `0` is reserved as the terminator of a clause in the [arena](crate::db::clause), and is never a literal.
//!
//! ```rust
//! # use stoat_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate(), -79);
//! ```
//!
//! Both the trail and the watch lists keep one entry per literal, and use [index](Literal::index) to place both polarities of every atom in a single vector.

use crate::structures::atom::Atom;

/// The canonical literal.
pub type CLiteral = i32;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: Copy + Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The position of the literal in a vector holding both polarities of `atom_count` atoms.
    ///
    /// Negative literals occupy `0..atom_count`, the (unused) zero sits at `atom_count`, and positive literals follow.
    fn index(&self, atom_count: Atom) -> usize;
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn index(&self, atom_count: Atom) -> usize {
        (*self as i64 + atom_count as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_places_polarities_apart() {
        let atom_count = 3;
        let indices = [-3, -2, -1, 1, 2, 3]
            .iter()
            .map(|literal: &CLiteral| literal.index(atom_count))
            .collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 2, 4, 5, 6]);
    }

    #[test]
    fn negation_preserves_atom() {
        let literal = CLiteral::new(12, false);
        assert_eq!(literal.atom(), literal.negate().atom());
        assert_ne!(literal.polarity(), literal.negate().polarity());
    }
}
