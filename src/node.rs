use crate::board::Board;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One immutable entry of the search forest: a board, its move count from
/// the start, and the handle of the node it was expanded from.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) board: Board,
    pub(crate) moves: usize,
    pub(crate) parent: Option<usize>,
}

/// Append-only store for every node created during a run. Ancestry chains
/// stay reachable through parent handles for as long as the arena lives and
/// the whole forest is reclaimed in one piece when it drops.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn insert(&mut self, board: Board, moves: usize, parent: Option<usize>) -> usize {
        self.nodes.push(SearchNode {
            board,
            moves,
            parent,
        });
        self.nodes.len() - 1
    }

    pub(crate) fn get(&self, id: usize) -> &SearchNode {
        &self.nodes[id]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Heap entry for a pending node. `BinaryHeap` is a max-heap, so the
/// comparison is inverted to pop the lowest f cost first.
#[derive(Debug, Clone, Eq, PartialEq)]
struct OpenEntry {
    f_cost: usize,
    moves: usize,
    id: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .cmp(&self.f_cost)
            // Higher g cost has higher priority.
            .then_with(|| self.moves.cmp(&other.moves))
            // Insertion order keeps runs reproducible.
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum-priority frontier over arena handles, keyed by
/// moves + manhattan. Boards may be enqueued more than once along paths of
/// different length; the shorter-path copy is simply popped first.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    open: BinaryHeap<OpenEntry>,
}

impl Frontier {
    pub(crate) fn push(&mut self, arena: &NodeArena, id: usize) {
        let node = arena.get(id);
        self.open.push(OpenEntry {
            f_cost: node.moves + node.board.manhattan(),
            moves: node.moves,
            id,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.open.pop().map(|entry| entry.id)
    }

    pub(crate) fn len(&self) -> usize {
        self.open.len()
    }
}
