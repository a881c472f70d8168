/*!
The order in which atoms are considered for decisions.

Atoms are kept in a doubly linked list, stored as a pair of vectors indexed by atom.
Decisions are made by walking the list from the [head](DecisionOrder::head) through [prev](DecisionOrder::prev) links, and the walk ends at the sentinel atom `0`.

During conflict analysis each atom of a conflict is moved to the head of the list (variable move-to-front), so recently conflicting atoms are decided on first.

```rust
# use stoat_sat::db::order::DecisionOrder;
let mut order = DecisionOrder::new(3);
assert_eq!(order.atoms().collect::<Vec<_>>(), vec![3, 2, 1]);

order.bump(1);
assert_eq!(order.atoms().collect::<Vec<_>>(), vec![1, 3, 2]);
```
*/

use crate::structures::atom::Atom;

/// A doubly linked list of atoms, headed by the most recently bumped atom.
pub struct DecisionOrder {
    /// The atom after each atom, towards the head.
    next: Vec<Atom>,

    /// The atom before each atom, away from the head.
    prev: Vec<Atom>,

    head: Atom,
}

impl DecisionOrder {
    /// An order over atoms `1..=atom_count`, with the greatest atom at the head.
    pub fn new(atom_count: Atom) -> Self {
        let slots = atom_count as usize + 1;
        let mut next = vec![0; slots];
        let mut prev = vec![0; slots];
        for atom in 1..=atom_count {
            prev[atom as usize] = atom - 1;
            next[atom as usize - 1] = atom;
        }
        DecisionOrder {
            next,
            prev,
            head: atom_count,
        }
    }

    /// Moves `atom` to the head of the order.
    pub fn bump(&mut self, atom: Atom) {
        if atom == self.head {
            return;
        }
        let (before, after) = (self.prev[atom as usize], self.next[atom as usize]);
        self.prev[after as usize] = before;
        self.next[before as usize] = after;

        self.next[self.head as usize] = atom;
        self.prev[atom as usize] = self.head;
        self.head = atom;
    }

    /// The most recently bumped atom.
    pub fn head(&self) -> Atom {
        self.head
    }

    /// The atom after `atom`, away from the head, with `0` ending the order.
    pub fn prev(&self, atom: Atom) -> Atom {
        self.prev[atom as usize]
    }

    /// The atoms of the order, from the head.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        std::iter::successors(Some(self.head), |atom| Some(self.prev(*atom)))
            .take_while(|atom| *atom != 0)
    }
}
