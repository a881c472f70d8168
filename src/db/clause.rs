/*!
A database of clauses, stored in a single arena alongside the watch lists of each literal.

# Layout

The arena is a vector of cells, each a [CLiteral].
The first cell is always `0`, and each clause follows as:

```none
 base     base + 1   base + 2 ..               end
 [ node ] [ node ]   [ l0 ] [ l1 ] .. [ ln ]   [ 0 ]
```

- The two *nodes* belong to the watch lists of the two watched literals of the clause.
  Each node holds the offset of the next node of the list, or [END] if the node is last.
- The literals of the clause follow, with the two watched literals in the first two positions, and the clause is terminated by `0`.

The [key](ClauseKey) of a clause is the offset of the first literal, and from a node the start of the clause is found by examining the cell before the node.
If that cell is `0` (the terminator of the previous clause, or the reserved first cell) the node is the first node of the clause, and otherwise the node is the second node.

Unit clauses are stored, though never watched.

Original clauses are stored before any addition, so every original clause lies below [original_end](ClauseDB::original_end), and every addition above.
This allows additions to be removed in bulk, by [compaction](ClauseDB::compact_additions).

# Watch lists

Each literal has a singly linked list of the nodes of clauses watching the literal.
The head of each list is kept outside of the arena, and positions in a list are given by a [WatchLink].
*/

use crate::{
    db::{trail::Trail, ClauseKey},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The sentinel marking the end of a watch list.
pub const END: i32 = -9;

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause of the formula.
    Original,

    /// A clause derived during a solve.
    Addition,
}

/// A position in a watch list, identified by the cell holding the next node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchLink {
    /// The head of the watch list of the literal.
    Head(CLiteral),

    /// The link cell of the node at the offset.
    Node(usize),
}

/// The result of an attempt to move a watch away from a false literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchStatus {
    /// The clause now watches some literal which is not false, and the node has left the list.
    Moved,

    /// Every unwatched literal of the clause is false.
    /// The node remains in the list and `other` is the remaining watched literal, first in the clause.
    Unmoved { key: ClauseKey, other: CLiteral },
}

/// The clause database.
pub struct ClauseDB {
    /// Every cell of the arena.
    cells: Vec<CLiteral>,

    /// The head of the watch list of each literal, by [index](Literal::index).
    heads: Vec<i32>,

    /// The count of atoms, fixing the indicies of literals.
    atom_count: Atom,

    /// The offset immediately after the last original clause.
    original_end: usize,

    /// The count of additions in the arena.
    addition_count: usize,

    /// The maximum length of the arena.
    capacity: usize,
}

impl ClauseDB {
    pub fn new(atom_count: Atom, capacity: usize) -> Self {
        ClauseDB {
            cells: vec![0],
            heads: vec![END; 2 * atom_count as usize + 1],
            atom_count,
            original_end: 1,
            addition_count: 0,
            capacity,
        }
    }

    /// Stores a clause in the arena, and watches the first two literals of the clause (if two exist).
    ///
    /// Original clauses must be stored before any addition.
    pub fn store(
        &mut self,
        literals: &[CLiteral],
        source: ClauseSource,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        if literals.is_empty() {
            return Err(err::ClauseDBError::EmptyClause);
        }

        let required = self.cells.len() + literals.len() + 3;
        if required > self.capacity {
            log::error!(target: targets::CLAUSE_DB, "Arena exhausted at {} cells", self.cells.len());
            return Err(err::ClauseDBError::OutOfMemory {
                required,
                capacity: self.capacity,
            });
        }

        let base = self.cells.len();
        self.cells.extend([END, END]);
        self.cells.extend_from_slice(literals);
        self.cells.push(0);

        if literals.len() > 1 {
            self.watch(literals[0], base);
            self.watch(literals[1], base + 1);
        }

        match source {
            ClauseSource::Original => self.original_end = self.cells.len(),
            ClauseSource::Addition => self.addition_count += 1,
        }

        let key = ClauseKey(base + 2);
        log::trace!(target: targets::CLAUSE_DB, "Stored {key}: {literals:?}");
        Ok(key)
    }

    /// Prepends `node` to the watch list of `literal`.
    fn watch(&mut self, literal: CLiteral, node: usize) {
        let index = literal.index(self.atom_count);
        self.cells[node] = self.heads[index];
        self.heads[index] = node as i32;
    }

    /// The node following `link`, if one exists.
    pub fn follow(&self, link: WatchLink) -> Option<usize> {
        let next = match link {
            WatchLink::Head(literal) => self.heads[literal.index(self.atom_count)],
            WatchLink::Node(node) => self.cells[node],
        };
        match next {
            END => None,
            node => Some(node as usize),
        }
    }

    /// Points `link` to `next`.
    fn relink(&mut self, link: WatchLink, next: i32) {
        match link {
            WatchLink::Head(literal) => {
                let index = literal.index(self.atom_count);
                self.heads[index] = next;
            }
            WatchLink::Node(node) => self.cells[node] = next,
        }
    }

    /// The key of the clause containing `node`.
    pub fn clause_of(&self, node: usize) -> ClauseKey {
        match self.cells[node - 1] {
            0 => ClauseKey(node + 2),
            _ => ClauseKey(node + 1),
        }
    }

    /// Attempts to move the watch of the clause at `node` away from `literal`, which has been made false.
    ///
    /// `node` must follow `link` in the watch list of `literal`.
    /// In either case, `literal` is placed in the second position of the clause, or moved past the watched literals.
    pub fn update_watch(
        &mut self,
        link: WatchLink,
        node: usize,
        literal: CLiteral,
        trail: &Trail,
    ) -> WatchStatus {
        let key = self.clause_of(node);
        let first = key.0;
        let second = first + 1;

        if self.cells[first] == literal {
            self.cells[first] = self.cells[second];
        }

        let mut index = first + 2;
        while self.cells[index] != 0 {
            let candidate = self.cells[index];
            if !trail.is_false(candidate) {
                self.cells[second] = candidate;
                self.cells[index] = literal;

                let next = self.cells[node];
                self.relink(link, next);
                self.watch(candidate, node);
                return WatchStatus::Moved;
            }
            index += 1;
        }

        self.cells[second] = literal;
        WatchStatus::Unmoved {
            key,
            other: self.cells[first],
        }
    }

    /// The literals of the clause at `key`.
    pub fn literals(&self, key: ClauseKey) -> &[CLiteral] {
        let mut end = key.0;
        while self.cells[end] != 0 {
            end += 1;
        }
        &self.cells[key.0..end]
    }

    /// The literal at `index` of the clause at `key`, or None if the clause has no such literal.
    ///
    /// Valid only for indicies up to and including the length of the clause.
    pub fn literal_at(&self, key: ClauseKey, index: usize) -> Option<CLiteral> {
        match self.cells[key.0 + index] {
            0 => None,
            literal => Some(literal),
        }
    }

    /// Removes every node of an addition from every watch list.
    fn strip_addition_watches(&mut self) {
        for literal in -(self.atom_count as CLiteral)..=self.atom_count as CLiteral {
            if literal == 0 {
                continue;
            }
            let mut link = WatchLink::Head(literal);
            while let Some(node) = self.follow(link) {
                if node < self.original_end {
                    link = WatchLink::Node(node);
                } else {
                    let next = self.cells[node];
                    self.relink(link, next);
                }
            }
        }
    }

    /// Removes each addition for which `keep` returns false, and compacts the remaining additions.
    ///
    /// Kept additions are moved without any change to the order of their literals, and are watched afresh.
    /// Every key to an addition is invalidated.
    ///
    /// Returns the count of kept additions.
    pub fn compact_additions(&mut self, mut keep: impl FnMut(&[CLiteral]) -> bool) -> usize {
        self.strip_addition_watches();

        let old_end = self.cells.len();
        let mut read = self.original_end;
        let mut write = self.original_end;
        self.addition_count = 0;

        while read < old_end {
            let start = read + 2;
            let mut end = start;
            while self.cells[end] != 0 {
                end += 1;
            }

            if keep(&self.cells[start..end]) {
                self.cells.copy_within(read..=end, write);

                let length = end - start;
                self.cells[write] = END;
                self.cells[write + 1] = END;
                if length > 1 {
                    self.watch(self.cells[write + 2], write);
                    self.watch(self.cells[write + 3], write + 1);
                }

                write += length + 3;
                self.addition_count += 1;
            }

            read = end + 1;
        }

        self.cells.truncate(write);
        log::trace!(target: targets::CLAUSE_DB, "Compacted {old_end} cells to {write}");
        self.addition_count
    }

    /// The count of additions in the arena.
    pub fn addition_count(&self) -> usize {
        self.addition_count
    }

    /// The offset immediately after the last original clause.
    pub fn original_end(&self) -> usize {
        self.original_end
    }

    /// The count of cells in use.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The keys of every clause watching `literal`, in list order.
    pub fn watchers(&self, literal: CLiteral) -> Vec<ClauseKey> {
        let mut keys = Vec::default();
        let mut link = WatchLink::Head(literal);
        while let Some(node) = self.follow(link) {
            keys.push(self.clause_of(node));
            link = WatchLink::Node(node);
        }
        keys
    }
}
