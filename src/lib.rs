pub mod board;
pub mod config;
pub mod puzzle;
pub mod solver;
pub mod stat;

mod node;
