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

use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use super::material::{Chessman, Color, Piece};
use super::position::ChessmenMap;
use super::square::{File, Rank, Square};

use Piece::{Bishop, King, Knight, Queen, Rook};
use Rank::*;

/// Pieces of the back rank from the a-file to the h-file.
pub const BACK_RANK: [Piece; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

#[inline]
pub const fn back_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank1,
        Color::Black => Rank8,
    }
}

#[inline]
pub const fn pawn_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank2,
        Color::Black => Rank7,
    }
}

pub(super) static REGULAR_ARRANGEMENT: Lazy<ChessmenMap> = Lazy::new(|| {
    Color::iter()
        .flat_map(|color| {
            File::iter().flat_map(move |file| {
                let officer = Chessman::new(color, BACK_RANK[file.to_index()]);
                let pawn = Chessman::new(color, Piece::Pawn);
                [
                    (Square::new(file, back_rank(color)), officer),
                    (Square::new(file, pawn_rank(color)), pawn),
                ]
            })
        })
        .collect()
});
