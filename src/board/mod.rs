// Copyright 2023 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! Board vocabulary for a free-form chessboard editor
//!
//! The board module holds the immutable pieces of the editor: where
//! chessmen stand and whether a king is attacked. Nothing here enforces
//! the rules of chess; chessmen may be placed anywhere.
//!
//! * A `Square` represents the coordinates for a single square
//!   on an 8-by-8 board. The 8 rows and 8 columns on a board
//!   are represented by `Rank` (`Rank1` .. `Rank8`) and `File`
//!   (`FileA` .. `FileH`) respectively. Each square is uniquely
//!   identified by a rank and a file and is named using the letter of
//!   the file followed by the number of the rank (e.g. `a1` .. `h8`).
//!   `Square::lookup` shifts a square by a signed `Offset`, yielding
//!   `None` when the result leaves the board.
//!
//! * A `Chessman` is a piece of a specific color. A `Piece` has
//!   six variants: `King`, `Queen`, `Rook`, `Bishop`, `Knight` and `Pawn`.
//!   `Color` is either `White` or `Black`. There are exactly twelve
//!   chessmen, rendered as `"<color>-<piece>"` (e.g. `white-pawn`).
//!
//! * A `ChessmenMap` holds the contents of every square, and a
//!   `BoardState` wraps one map together with the square touched by the
//!   last action and the king under check, if any. Both are values: a
//!   new state is produced for every change and old states stay valid.
//!
//! * `analyze_check` casts rays outward from each king to decide whether
//!   either side is in check.

use thiserror::Error;

mod arrangement;
mod check;
mod material;
mod position;
mod square;

pub use arrangement::*;
pub use check::*;
pub use material::*;
pub use position::*;
pub use square::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Not a valid square: '{0}'")]
    InvalidSquare(String),
    #[error("Not a valid chessman: '{0}'")]
    InvalidChessman(String),
    #[error("Only a king can be checked, found '{0}'")]
    CheckedNotKing(Chessman),
}
