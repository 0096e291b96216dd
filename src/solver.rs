use crate::board::Board;
use crate::node::{Frontier, NodeArena};
use crate::stat::Stats;

use std::time::Instant;
use tracing::{debug, instrument};

/// Optimal solver for one puzzle instance. Construction runs two A*
/// searches in lock-step, one over the input board and one over its twin;
/// exactly one of the two can reach the goal, so the first to do so settles
/// the verdict. The twin reaching its goal proves the input unsolvable.
pub struct Solver {
    arena: NodeArena,
    answer_moves: i32,
    answer_node: Option<usize>,
    stats: Stats,
}

impl Solver {
    /// Searches to completion before returning; every query below is
    /// answerable afterwards without further work.
    #[instrument(skip_all, name = "solve", fields(dimension = initial.dimension()), level = "debug")]
    pub fn new(initial: Board) -> Self {
        let total_solve_start_time = Instant::now();

        let mut arena = NodeArena::default();
        let mut stats = Stats::default();
        let mut main_open = Frontier::default();
        let mut twin_open = Frontier::default();

        let twin = initial.twin();
        let main_root = arena.insert(initial, 0, None);
        let twin_root = arena.insert(twin, 0, None);
        main_open.push(&arena, main_root);
        twin_open.push(&arena, twin_root);
        stats.enqueued_nodes += 2;

        let mut answer_moves = -1;
        let mut answer_node = None;

        // One expansion step per frontier per iteration.
        loop {
            let (Some(main_id), Some(twin_id)) = (main_open.pop(), twin_open.pop()) else {
                break;
            };
            stats.main_expand_nodes += 1;
            stats.twin_expand_nodes += 1;

            let main_node = arena.get(main_id);
            if main_node.board.is_goal() {
                answer_moves = main_node.moves as i32;
                answer_node = Some(main_id);
                break;
            }
            if arena.get(twin_id).board.is_goal() {
                debug!(
                    "twin search reached its goal after {} expansions, instance is unsolvable",
                    stats.twin_expand_nodes
                );
                break;
            }

            stats.enqueued_nodes += Self::expand(&mut arena, &mut main_open, main_id);
            stats.enqueued_nodes += Self::expand(&mut arena, &mut twin_open, twin_id);
        }

        stats.moves = answer_moves;
        stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;
        debug!(
            "open list sizes at termination: main {}, twin {}, arena {}",
            main_open.len(),
            twin_open.len(),
            arena.len()
        );

        Solver {
            arena,
            answer_moves,
            answer_node,
            stats,
        }
    }

    /// Pushes every neighbor of the popped node except the one equal to its
    /// parent's board. This anti-backtrack check is the only cycle breaking
    /// performed; a board re-enqueued along a longer path just waits at a
    /// worse priority.
    fn expand(arena: &mut NodeArena, open: &mut Frontier, id: usize) -> usize {
        let moves = arena.get(id).moves;
        let parent = arena.get(id).parent;
        let neighbors = arena.get(id).board.neighbors();

        let mut pushed = 0;
        for neighbor in neighbors {
            if let Some(parent_id) = parent {
                if arena.get(parent_id).board == neighbor {
                    continue;
                }
            }
            let child = arena.insert(neighbor, moves + 1, Some(id));
            open.push(arena, child);
            pushed += 1;
        }
        pushed
    }

    pub fn is_solvable(&self) -> bool {
        self.answer_moves != -1
    }

    /// Minimum number of moves to reach the goal, -1 when unsolvable.
    pub fn moves(&self) -> i32 {
        self.answer_moves
    }

    /// Boards from the initial position to the goal inclusive, rebuilt on
    /// demand from the terminal node's ancestry chain. `None` when the
    /// instance is unsolvable; the goal board itself yields a one-element
    /// sequence.
    pub fn solution(&self) -> Option<Vec<Board>> {
        let terminal = self.answer_node?;
        let mut boards = Vec::with_capacity(self.answer_moves as usize + 1);
        let mut current = Some(terminal);
        while let Some(id) = current {
            let node = self.arena.get(id);
            boards.push(node.board.clone());
            current = node.parent;
        }
        boards.reverse();
        Some(boards)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}
