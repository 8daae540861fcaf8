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

//! Check detection by casting rays outward from a king.
//!
//! The board is sparse and may hold any combination of chessmen, so rather
//! than generating every enemy move we start at the king and look only in
//! the directions some enemy piece on the board could attack from. The
//! first chessman met along a direction either attacks the king or blocks
//! that direction for good.

use log::trace;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use strum::IntoEnumIterator;

use super::material::{Chessman, Color, Piece};
use super::position::ChessmenMap;
use super::square::{Direction, Offset, Square};

use Piece::*;

const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(-2, -1),
    Offset::new(-2, 1),
    Offset::new(-1, -2),
    Offset::new(-1, 2),
    Offset::new(1, -2),
    Offset::new(1, 2),
    Offset::new(2, -1),
    Offset::new(2, 1),
];

static DIAGONAL_OFFSETS: Lazy<Vec<Offset>> =
    Lazy::new(|| Direction::diagonals().map(Offset::from).collect());

static ORTHOGONAL_OFFSETS: Lazy<Vec<Offset>> =
    Lazy::new(|| Direction::orthogonals().map(Offset::from).collect());

/// Where a pawn of `color` stands relative to a square it attacks. White
/// pawns attack towards the eighth rank, so they sit one rank below.
const fn pawn_attack_offsets(color: Color) -> [Offset; 2] {
    match color {
        Color::White => [Offset::new(-1, -1), Offset::new(1, -1)],
        Color::Black => [Offset::new(-1, 1), Offset::new(1, 1)],
    }
}

/// Whether `chessman`, found `distance` steps away from a square along
/// `offset`, attacks that square. Pawns and knights only strike at distance
/// one; kings never give check.
fn can_attack(chessman: Chessman, offset: Offset, distance: usize) -> bool {
    let piece = chessman.piece();
    if distance > 1 && !piece.is_sliding() {
        return false;
    }
    match piece {
        Pawn => pawn_attack_offsets(chessman.color()).contains(&offset),
        Knight => KNIGHT_OFFSETS.contains(&offset),
        Bishop => DIAGONAL_OFFSETS.contains(&offset),
        Rook => ORTHOGONAL_OFFSETS.contains(&offset),
        Queen => DIAGONAL_OFFSETS.contains(&offset) || ORTHOGONAL_OFFSETS.contains(&offset),
        King => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScanDirection {
    offset: Offset,
    repeat: bool,
}

#[derive(Debug, Default)]
struct ScanDirections(Vec<ScanDirection>);

impl ScanDirections {
    fn push(&mut self, offset: Offset, repeat: bool) {
        match self.0.iter_mut().find(|direction| direction.offset == offset) {
            Some(direction) => direction.repeat |= repeat,
            None => self.0.push(ScanDirection { offset, repeat }),
        }
    }

    fn extend<'a, I>(&mut self, offsets: I, repeat: bool)
    where
        I: IntoIterator<Item = &'a Offset>,
    {
        for offset in offsets {
            self.push(*offset, repeat);
        }
    }

    /// Directions worth scanning given the enemy pieces on the board.
    fn collect(enemy: Color, enemy_pieces: &HashSet<Piece>) -> Self {
        let mut pieces: Vec<Piece> = Piece::iter()
            .filter(|piece| enemy_pieces.contains(piece) && *piece != King)
            .collect();
        let mut directions = Self::default();

        if pieces.contains(&Knight) {
            directions.extend(&KNIGHT_OFFSETS, false);
            pieces.retain(|piece| *piece != Knight);
        }

        if pieces == [Pawn] {
            directions.extend(&pawn_attack_offsets(enemy), false);
            return directions;
        }

        for piece in pieces {
            match piece {
                Pawn => directions.extend(&pawn_attack_offsets(enemy), false),
                Bishop => directions.extend(DIAGONAL_OFFSETS.iter(), true),
                Rook => directions.extend(ORTHOGONAL_OFFSETS.iter(), true),
                Queen => {
                    directions.extend(DIAGONAL_OFFSETS.iter(), true);
                    directions.extend(ORTHOGONAL_OFFSETS.iter(), true);
                }
                Knight | King => {}
            }
        }
        directions
    }
}

/// Walks from `king` along `direction` until the first chessman or the edge
/// of the board.
fn scan(chessmen: &ChessmenMap, king: Square, direction: &ScanDirection, enemy: Color) -> bool {
    let mut square = king;
    let mut distance = 0;
    loop {
        square = match square + direction.offset {
            Some(next) => next,
            None => return false,
        };
        distance += 1;
        if let Some(chessman) = chessmen.get(square) {
            return chessman.color() == enemy && can_attack(chessman, direction.offset, distance);
        }
        if !direction.repeat {
            return false;
        }
    }
}

/// Whether the king of `color` is attacked. A color without exactly one
/// king on the board is never in check.
pub fn is_in_check(chessmen: &ChessmenMap, color: Color) -> bool {
    let mut kings = chessmen.squares_of(Chessman::king(color));
    let king = match (kings.next(), kings.next()) {
        (Some(king), None) => king,
        _ => return false,
    };

    let enemy = !color;
    let directions = ScanDirections::collect(enemy, &chessmen.pieces_of(enemy));
    let checked = directions
        .0
        .iter()
        .any(|direction| scan(chessmen, king, direction, enemy));
    trace!(
        "{} king on {}: {} directions scanned, check: {}",
        color,
        king,
        directions.0.len(),
        checked
    );
    checked
}

/// Returns the color whose king is under check, if any. The side that acted
/// last is examined first, so when both kings are attacked it is the one
/// reported.
pub fn analyze_check(chessmen: &ChessmenMap, last_action: Color) -> Option<Color> {
    [last_action, !last_action]
        .into_iter()
        .find(|color| is_in_check(chessmen, *color))
}
