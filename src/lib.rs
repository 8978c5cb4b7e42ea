//! # queens-rs: an N-Queens solver in Rust
//!
//! **`queens-rs`** is a small library for the classic **N-Queens** placement problem:
//! put N queens on an N×N chessboard so that no two share a row, column, or diagonal.
//! It finds one solution per board --- the search stops at the first full placement
//! (enumerating or counting all solutions is out of scope).
//!
//! ## How it works
//!
//! The solver is a constraint-propagating depth-first backtracking search.
//! Each committed row projects the columns its queen attacks onto the row being
//! filled --- for a queen on column `c` and a row `d` lines away, exactly
//! `{c-d, c, c+d}` clipped to the board --- and the surviving columns become the
//! candidates. Candidates are tried lowest-first, so the search is deterministic
//! and returns the lexicographically smallest placement.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! queens-rs = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use queens_rs::board::Board;
//!
//! // 1. Create a board
//! let mut board = Board::new(8);
//!
//! // 2. Search for a placement
//! assert!(board.solve());
//!
//! // 3. Extract the solution: one column per row
//! let columns = board.solution().unwrap();
//! assert_eq!(columns, vec![0, 4, 7, 5, 2, 6, 1, 3]);
//!
//! // 4. Or render it for a terminal
//! println!("{}", board.to_text());
//! ```
//!
//! ## Core Components
//!
//! - **[`board`]**: The heart of the library. Contains the [`Board`][crate::board::Board]
//!   type with candidate computation and the backtracking search.
//! - **[`row`]**: A single board [`Row`][crate::row::Row] and its threat projection.
//! - **[`render`]**: Text rendering with [`Glyphs`][crate::render::Glyphs]
//!   configurable from the environment.

pub mod board;
pub mod error;
pub mod render;
pub mod row;
