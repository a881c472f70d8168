/*!
(The internal representation of) an atom, aka. a 'variable'.

Each atom is a `u32` in `1..=n`, where `n` is the atom count declared when a [context](crate::context::Context) is built.

The value `0` is never an atom.
Within the [decision order](crate::db::order) it marks the end of the order, and within the arena it terminates a clause.

```rust
# use stoat_sat::structures::atom::Atom;
let atoms = (1..=5).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 5);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The largest atom supported.
///
/// Literals are stored as `i32`, so the atom of any literal fits below `i32::MAX`.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs() - 1;
