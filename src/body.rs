//! Snake body: a tail-to-head chain of nodes kept in an index arena, mirrored by a
//! set of occupied cells.
//!
//! Every mutating method updates the chain and the set together, so the two
//! always describe the same cells.

use std::collections::HashSet;

use crate::board::{Cell, Coords};
use crate::direction::Direction;

/// One occupied cell together with its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub cell: Cell,
    pub coords: Coords,
}

impl Segment {
    pub const fn new(cell: Cell, coords: Coords) -> Self {
        Self { cell, coords }
    }
}

#[derive(Debug, Clone)]
struct Node {
    segment: Segment,
    /// Next node toward the head.
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct SnakeBody {
    nodes: Vec<Node>,
    /// Arena slots released by the tail, reused before growing `nodes`.
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
    cells: HashSet<Cell>,
}

impl SnakeBody {
    /// A one-cell snake.
    pub fn new(start: Segment) -> Self {
        Self {
            nodes: vec![Node {
                segment: start,
                next: None,
            }],
            free: Vec::new(),
            head: 0,
            tail: 0,
            len: 1,
            cells: HashSet::from([start.cell]),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Segment {
        self.nodes[self.head].segment
    }

    pub fn tail(&self) -> Segment {
        self.nodes[self.tail].segment
    }

    /// The node right after the tail, `None` for a one-cell snake.
    pub fn tail_successor(&self) -> Option<Segment> {
        self.nodes[self.tail].next.map(|i| self.nodes[i].segment)
    }

    /// Direction the tail is travelling in, read off the tail and its successor.
    /// A one-cell snake has no successor and reports `fallback`.
    pub fn tail_heading(&self, fallback: Direction) -> Direction {
        self.tail_successor()
            .and_then(|next| Direction::between(self.tail().coords, next.coords))
            .unwrap_or(fallback)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// The membership mirror.
    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    /// Segments from tail to head.
    pub fn iter(&self) -> Segments<'_> {
        Segments {
            body: self,
            cursor: Some(self.tail),
            remaining: self.len,
        }
    }

    /// Link a new head after the current one.
    pub fn advance_head(&mut self, cell: Cell, coords: Coords) {
        debug_assert!(!self.contains(cell), "cell {cell} is already occupied");
        let idx = self.alloc(Segment::new(cell, coords), None);
        self.nodes[self.head].next = Some(idx);
        self.head = idx;
        self.cells.insert(cell);
        self.len += 1;
        debug_assert!(self.is_consistent());
    }

    /// Drop the tail and return the cell it vacated. A one-cell snake keeps its
    /// only node and returns `None`.
    pub fn release_tail(&mut self) -> Option<Segment> {
        let old = self.tail;
        let next = self.nodes[old].next?;
        let vacated = self.nodes[old].segment;
        self.nodes[old].next = None;
        self.free.push(old);
        self.tail = next;
        self.cells.remove(&vacated.cell);
        self.len -= 1;
        debug_assert!(self.is_consistent());
        Some(vacated)
    }

    /// Insert a new tail before the current one.
    pub fn grow_at_tail(&mut self, cell: Cell, coords: Coords) {
        debug_assert!(!self.contains(cell), "cell {cell} is already occupied");
        let idx = self.alloc(Segment::new(cell, coords), Some(self.tail));
        self.tail = idx;
        self.cells.insert(cell);
        self.len += 1;
        debug_assert!(self.is_consistent());
    }

    /// Flip the chain in place so the old tail becomes the head.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cursor = Some(self.tail);
        while let Some(i) = cursor {
            cursor = self.nodes[i].next;
            self.nodes[i].next = prev;
            prev = Some(i);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
        debug_assert!(self.is_consistent());
    }

    /// Walk the chain and check it against the mirror: same cells, no
    /// duplicates, ends at the head, and `len` agrees with both.
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.len);
        let mut cursor = Some(self.tail);
        let mut last = self.tail;
        while let Some(i) = cursor {
            // A cycle revisits a cell, so the insert below also ends the walk.
            let cell = self.nodes[i].segment.cell;
            if !seen.insert(cell) || !self.cells.contains(&cell) {
                return false;
            }
            last = i;
            cursor = self.nodes[i].next;
        }
        last == self.head && seen.len() == self.len && self.cells.len() == self.len
    }

    fn alloc(&mut self, segment: Segment, next: Option<usize>) -> usize {
        let node = Node { segment, next };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }
}

/// Iterator over a [`SnakeBody`] from tail to head.
pub struct Segments<'a> {
    body: &'a SnakeBody,
    cursor: Option<usize>,
    remaining: usize,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.body.nodes[self.cursor?];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(node.segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
