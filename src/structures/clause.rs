//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! Within a [context](crate::context::Context) clauses are instead stored in a single arena, and read back as slices.
//! So, the clause trait is implemented for slices, vectors, and single literals (read as unit clauses).
//!
//! ```rust
//! # use stoat_sat::structures::clause::Clause;
//! let clause = vec![23, -41, -3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 0");
//!
//! let mut model = vec![false; 42];
//! assert!(clause.satisfied_by(&model));
//!
//! model[3] = true;
//! model[41] = true;
//! assert!(!clause.satisfied_by(&model));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::literal::{CLiteral, Literal};

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    /// Whether some literal of the clause is true on `model`, indexed by atom.
    ///
    /// Atoms outside of the model are taken to be false.
    fn satisfied_by(&self, model: &[bool]) -> bool {
        self.literals().any(|literal| {
            model.get(literal.atom() as usize).copied().unwrap_or(false) == literal.polarity()
        })
    }
}

impl Clause for [CLiteral] {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> Clause for [CLiteral; N] {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        N
    }
}

impl<T: Clause + ?Sized> Clause for &T {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        (**self).literals()
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}

impl Clause for CLiteral {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(*self)
    }

    fn size(&self) -> usize {
        1
    }
}
