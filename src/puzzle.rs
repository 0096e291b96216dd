use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::board::Board;

/// Loads a board from the classic puzzle text format: one integer N
/// followed by N * N row-major tile values, whitespace separated, 0 for the
/// blank.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open puzzle file {}", path.display()))?;
    read_board(BufReader::new(file))
        .with_context(|| format!("malformed puzzle file {}", path.display()))
}

pub fn read_board<R: Read>(mut reader: R) -> Result<Board> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_board(&text)
}

pub fn parse_board(text: &str) -> Result<Board> {
    let mut tokens = text.split_whitespace();
    let n: usize = match tokens.next() {
        Some(token) => token
            .parse()
            .with_context(|| format!("invalid dimension {token:?}"))?,
        None => bail!("empty puzzle input"),
    };

    let mut rows = Vec::with_capacity(n);
    for row in 0..n {
        let mut tiles = Vec::with_capacity(n);
        for col in 0..n {
            let token = tokens
                .next()
                .with_context(|| format!("missing tile at row {row}, column {col}"))?;
            tiles.push(
                token
                    .parse::<usize>()
                    .with_context(|| format!("invalid tile {token:?} at row {row}, column {col}"))?,
            );
        }
        rows.push(tiles);
    }

    Board::new(rows)
}
