//! Key structures: atoms, literals, and clauses.
//!
//! A formula is a set of [clauses](clause), read as the conjunction of those clauses.
//! Each clause is a disjunction of [literals](literal), and each literal is an [atom](atom) paired with a polarity.
//!
//! Structures are kept deliberately thin.
//! Atoms and literals are plain integers, so they double as indices into the databases of a [context](crate::context), and the traits here only name the operations the solver relies on.

pub mod atom;
pub mod clause;
pub mod literal;
