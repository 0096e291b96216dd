use anyhow::{ensure, Result};
use std::fmt;

/// Immutable N x N arrangement of the tiles 0..N*N, where 0 is the blank.
/// Every transform returns a fresh board; equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    n: usize,
    tiles: Vec<usize>, // row-major, tiles[row * n + col]
    blank: (usize, usize),
}

impl Board {
    /// Builds a board from row-major tile rows. The grid must be square with
    /// N >= 2 and hold every value 0..N*N exactly once.
    pub fn new(rows: Vec<Vec<usize>>) -> Result<Self> {
        let n = rows.len();
        ensure!(n >= 2, "board dimension must be at least 2, got {n}");

        let mut tiles = Vec::with_capacity(n * n);
        for (row, row_tiles) in rows.iter().enumerate() {
            ensure!(
                row_tiles.len() == n,
                "row {row} has {} tiles, expected {n}",
                row_tiles.len()
            );
            tiles.extend_from_slice(row_tiles);
        }

        let mut seen = vec![false; n * n];
        let mut blank = (0, 0);
        for (index, &tile) in tiles.iter().enumerate() {
            ensure!(
                tile < n * n,
                "tile value {tile} out of range for a {n}x{n} board"
            );
            ensure!(!seen[tile], "duplicate tile value {tile}");
            seen[tile] = true;
            if tile == 0 {
                blank = (index / n, index % n);
            }
        }

        Ok(Board { n, tiles, blank })
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Row and column of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        self.blank
    }

    /// Number of non-blank tiles away from their goal cell. The goal places
    /// value v at row-major index v - 1.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &tile)| tile != 0 && tile != index + 1)
            .count()
    }

    /// Sum over non-blank tiles of row plus column distance to the goal cell.
    /// Admissible and consistent for the blank-slide move set.
    pub fn manhattan(&self) -> usize {
        let n = self.n;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, &tile)| {
                let (row, col) = (index / n, index % n);
                let (goal_row, goal_col) = ((tile - 1) / n, (tile - 1) % n);
                row.abs_diff(goal_row) + col.abs_diff(goal_col)
            })
            .sum()
    }

    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// The board with one pair of horizontally adjacent tiles swapped in a
    /// row that does not contain the blank: the row below the blank (above
    /// when the blank sits on the last row), columns (c, c + 1) with c
    /// stepped off the right edge. Exactly one of a board and its twin is
    /// solvable, which the solver exploits as its unsolvability oracle.
    pub fn twin(&self) -> Board {
        let (blank_row, blank_col) = self.blank;
        let row = if blank_row < self.n - 1 {
            blank_row + 1
        } else {
            blank_row - 1
        };
        let col = if blank_col < self.n - 1 {
            blank_col
        } else {
            blank_col - 1
        };
        self.with_swapped((row, col), (row, col + 1))
    }

    /// Boards reachable by sliding one adjacent tile into the blank, in
    /// fixed up, down, left, right order of the blank's movement.
    pub fn neighbors(&self) -> Vec<Board> {
        let (row, col) = self.blank;
        let mut boards = Vec::with_capacity(4);
        if row > 0 {
            boards.push(self.with_swapped((row, col), (row - 1, col)));
        }
        if row < self.n - 1 {
            boards.push(self.with_swapped((row, col), (row + 1, col)));
        }
        if col > 0 {
            boards.push(self.with_swapped((row, col), (row, col - 1)));
        }
        if col < self.n - 1 {
            boards.push(self.with_swapped((row, col), (row, col + 1)));
        }
        boards
    }

    fn with_swapped(&self, a: (usize, usize), b: (usize, usize)) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(a.0 * self.n + a.1, b.0 * self.n + b.1);
        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };
        Board {
            n: self.n,
            tiles,
            blank,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n)?;
        for row in self.tiles.chunks(self.n) {
            for &tile in row {
                write!(f, "{tile:2} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[usize]]) -> Board {
        Board::new(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    fn goal3() -> Board {
        board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]])
    }

    #[test]
    fn test_heuristics_on_reference_board() {
        let board = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.hamming(), 5);
        assert_eq!(board.manhattan(), 10);
        assert!(!board.is_goal());
    }

    #[test]
    fn test_goal_board_heuristics_are_zero() {
        let goal = goal3();
        assert_eq!(goal.hamming(), 0);
        assert_eq!(goal.manhattan(), 0);
        assert!(goal.is_goal());
    }

    #[test]
    fn test_one_misplaced_tile() {
        let board = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        assert_eq!(board.hamming(), 1);
        assert_eq!(board.manhattan(), 1);
        assert!(!board.is_goal());
    }

    #[test]
    fn test_neighbor_count_by_blank_position() {
        // Corner blank.
        assert_eq!(goal3().neighbors().len(), 2);
        // Edge blank.
        let edge = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        assert_eq!(edge.neighbors().len(), 3);
        // Interior blank.
        let interior = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        assert_eq!(interior.neighbors().len(), 4);
    }

    #[test]
    fn test_neighbors_change_manhattan_by_one() {
        let boards = [
            goal3(),
            board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]),
            board(&[&[0, 2, 3], &[1, 5, 6], &[4, 7, 8]]),
        ];
        for source in boards {
            for neighbor in source.neighbors() {
                assert_eq!(neighbor.manhattan().abs_diff(source.manhattan()), 1);
            }
        }
    }

    #[test]
    fn test_neighbor_order_is_up_down_left_right() {
        let interior = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        let neighbors = interior.neighbors();
        assert_eq!(neighbors[0], board(&[&[1, 0, 3], &[4, 2, 6], &[7, 5, 8]]));
        assert_eq!(neighbors[1], board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]));
        assert_eq!(neighbors[2], board(&[&[1, 2, 3], &[0, 4, 6], &[7, 5, 8]]));
        assert_eq!(neighbors[3], board(&[&[1, 2, 3], &[4, 6, 0], &[7, 5, 8]]));
    }

    #[test]
    fn test_twin_differs_and_is_deterministic() {
        let boards = [
            goal3(),
            board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]),
            board(&[&[0, 1], &[2, 3]]),
        ];
        for source in boards {
            let twin = source.twin();
            assert_ne!(twin, source);
            assert_eq!(twin, source.twin());
            // The twin never moves the blank.
            assert_eq!(twin.blank_position(), source.blank_position());
        }
    }

    #[test]
    fn test_twin_of_goal_swaps_row_above_blank() {
        // Blank at (2, 2): the twin swaps columns 1 and 2 of row 1.
        assert_eq!(goal3().twin(), board(&[&[1, 2, 3], &[4, 6, 5], &[7, 8, 0]]));
    }

    #[test]
    fn test_structural_equality() {
        let a = board(&[&[1, 2], &[3, 0]]);
        let b = board(&[&[1, 2], &[3, 0]]);
        let c = board(&[&[1, 2], &[0, 3]]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_rejects_malformed_grids() {
        assert!(Board::new(vec![vec![0]]).is_err());
        assert!(Board::new(vec![vec![0, 1], vec![2]]).is_err());
        assert!(Board::new(vec![vec![0, 1], vec![1, 2]]).is_err());
        assert!(Board::new(vec![vec![0, 1], vec![2, 9]]).is_err());
    }

    #[test]
    fn test_display_matches_puzzle_format() {
        let board = board(&[&[1, 2], &[0, 3]]);
        assert_eq!(board.to_string(), "2\n 1  2 \n 0  3 \n");
    }
}
