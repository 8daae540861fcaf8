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

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use strum::IntoEnumIterator;

use super::arrangement::REGULAR_ARRANGEMENT;
use super::material::{Chessman, Color, Piece};
use super::square::{File, Rank, Square};
use super::ParseError;

/// The contents of the 64 squares at one point in time.
///
/// Each square holds at most one chessman, which the fixed-size layout
/// guarantees. Maps are never edited in place once published in a
/// [`BoardState`]; every change produces a new map through [`ChessmenMap::with`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ChessmenMap([Option<Chessman>; Square::COUNT]);

impl ChessmenMap {
    pub fn empty() -> Self {
        Self([None; Square::COUNT])
    }

    /// The standard 32-chessmen starting arrangement.
    pub fn regular() -> Self {
        REGULAR_ARRANGEMENT.clone()
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Chessman> {
        self.0[square.to_index()]
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Returns a copy of this map with `square` set to `value`.
    #[must_use]
    pub fn with(mut self, square: Square, value: Option<Chessman>) -> Self {
        self.0[square.to_index()] = value;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, Chessman)> + '_ {
        Square::iter().filter_map(|square| self.get(square).map(|chessman| (square, chessman)))
    }

    pub fn len(&self) -> usize {
        self.0.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    pub fn count(&self, chessman: Chessman) -> usize {
        self.0.iter().flatten().filter(|&&c| c == chessman).count()
    }

    pub fn squares_of(&self, chessman: Chessman) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(move |(_, c)| *c == chessman)
            .map(|(square, _)| square)
    }

    /// The distinct piece kinds `color` currently has on the board.
    pub fn pieces_of(&self, color: Color) -> HashSet<Piece> {
        self.0
            .iter()
            .flatten()
            .filter(|chessman| chessman.color() == color)
            .map(|chessman| chessman.piece())
            .collect()
    }
}

impl Default for ChessmenMap {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Square> for ChessmenMap {
    type Output = Option<Chessman>;
    fn index(&self, index: Square) -> &Self::Output {
        &self.0[index.to_index()]
    }
}

impl FromIterator<(Square, Chessman)> for ChessmenMap {
    fn from_iter<I: IntoIterator<Item = (Square, Chessman)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |map, (square, chessman)| map.with(square, Some(chessman)))
    }
}

impl Serialize for ChessmenMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(Square::COUNT)?;
        for square in self.0.iter() {
            tuple.serialize_element(square)?;
        }
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for ChessmenMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ChessmenMapVisitor;
        impl<'de> Visitor<'de> for ChessmenMapVisitor {
            type Value = ChessmenMap;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("the contents of all 64 squares, a1 first")
            }
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut squares = [None; Square::COUNT];
                for (index, square) in squares.iter_mut().enumerate() {
                    *square = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(index, &self))?;
                }
                Ok(ChessmenMap(squares))
            }
        }
        deserializer.deserialize_tuple(Square::COUNT, ChessmenMapVisitor)
    }
}

impl fmt::Debug for ChessmenMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                let c = match self.get(Square::new(file, rank)) {
                    Some(chessman) => {
                        const SYMBOLS: [char; 6] = ['p', 'n', 'b', 'r', 'q', 'k'];
                        let symbol = SYMBOLS[chessman.piece().to_index()];
                        match chessman.color() {
                            Color::White => symbol.to_ascii_uppercase(),
                            Color::Black => symbol,
                        }
                    }
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// An immutable snapshot of the board produced by every successful command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawBoardState")]
pub struct BoardState {
    chessmen: ChessmenMap,
    active: Option<Square>,
    checked: Option<Chessman>,
}

impl BoardState {
    /// An untouched board: nothing is active and no king is checked.
    pub fn new(chessmen: ChessmenMap) -> Self {
        Self {
            chessmen,
            active: None,
            checked: None,
        }
    }

    pub(crate) fn after_action(chessmen: ChessmenMap, active: Square, checked: Option<Chessman>) -> Self {
        debug_assert!(checked.map_or(true, |c| c.is_king()));
        Self {
            chessmen,
            active: Some(active),
            checked,
        }
    }

    #[inline]
    pub fn chessmen(&self) -> &ChessmenMap {
        &self.chessmen
    }

    /// The square touched by the most recent action, if any.
    #[inline]
    pub fn active_square(&self) -> Option<Square> {
        self.active
    }

    /// The king currently under check, if any.
    #[inline]
    pub fn checked(&self) -> Option<Chessman> {
        self.checked
    }

    #[inline]
    pub fn chessman(&self, square: Square) -> Option<Chessman> {
        self.chessmen.get(square)
    }

    #[inline]
    pub fn has_chessman(&self, square: Square) -> bool {
        self.chessmen.contains(square)
    }

    #[inline]
    pub fn is_active(&self, square: Square) -> bool {
        self.active == Some(square)
    }

    pub fn checked_square(&self) -> Option<Square> {
        let king = self.checked?;
        self.chessmen.squares_of(king).next()
    }
}

#[derive(Deserialize)]
struct RawBoardState {
    chessmen: ChessmenMap,
    active: Option<Square>,
    checked: Option<Chessman>,
}

impl TryFrom<RawBoardState> for BoardState {
    type Error = ParseError;

    fn try_from(raw: RawBoardState) -> Result<Self, Self::Error> {
        match raw.checked {
            Some(chessman) if !chessman.is_king() => Err(ParseError::CheckedNotKing(chessman)),
            checked => Ok(Self {
                chessmen: raw.chessmen,
                active: raw.active,
                checked,
            }),
        }
    }
}

impl Index<Square> for BoardState {
    type Output = Option<Chessman>;
    fn index(&self, index: Square) -> &Self::Output {
        self.chessmen.index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::RawBoardState;
    use crate::*;
    use serde::de::value::{Error, SeqDeserializer};
    use serde::Deserialize;
    use Square::*;

    #[test]
    fn test_empty_map() {
        let map = ChessmenMap::empty();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.iter().count(), 0);
    }
    #[test]
    fn test_with_replaces_single_entry() {
        let map = ChessmenMap::empty()
            .with(E4, Some(Chessman::WQ))
            .with(E4, Some(Chessman::BN));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(E4), Some(Chessman::BN));
        let map = map.with(E4, None);
        assert!(map.is_empty());
    }
    #[test]
    fn test_from_iterator() {
        let map: ChessmenMap = [(A1, Chessman::WR), (H8, Chessman::BR), (A8, Chessman::BR)]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 3);
        assert_eq!(map.count(Chessman::BR), 2);
        assert_eq!(map[A1], Some(Chessman::WR));
        assert_eq!(map[B1], None);
        let squares: Vec<Square> = map.squares_of(Chessman::BR).collect();
        assert_eq!(squares, vec![A8, H8]);
    }
    #[test]
    fn test_pieces_of() {
        let map: ChessmenMap = [
            (A1, Chessman::WR),
            (B1, Chessman::WR),
            (E1, Chessman::WK),
            (E8, Chessman::BK),
        ]
        .into_iter()
        .collect();
        let white = map.pieces_of(Color::White);
        assert_eq!(white.len(), 2);
        assert!(white.contains(&Piece::Rook));
        assert!(white.contains(&Piece::King));
        let black = map.pieces_of(Color::Black);
        assert_eq!(black.len(), 1);
    }
    #[test]
    fn test_board_state_accessors() {
        let map: ChessmenMap = [(E1, Chessman::WK), (E8, Chessman::BK), (E4, Chessman::BR)]
            .into_iter()
            .collect();
        let state = BoardState::after_action(map, E4, Some(Chessman::WK));
        assert!(state.is_active(E4));
        assert!(!state.is_active(E1));
        assert!(state.has_chessman(E4));
        assert_eq!(state.chessman(E8), Some(Chessman::BK));
        assert_eq!(state.checked_square(), Some(E1));
        assert_eq!(state[E1], Some(Chessman::WK));

        let untouched = BoardState::new(ChessmenMap::empty());
        assert_eq!(untouched.active_square(), None);
        assert_eq!(untouched.checked(), None);
        assert_eq!(untouched.checked_square(), None);
    }
    #[test]
    fn test_debug_layout() {
        let text = format!("{:?}", ChessmenMap::regular());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "rnbqkbnr");
        assert_eq!(lines[1], "pppppppp");
        assert_eq!(lines[4], "........");
        assert_eq!(lines[7], "RNBQKBNR");
    }
    #[test]
    fn test_map_deserializes_from_64_squares() {
        let seq: SeqDeserializer<_, Error> =
            SeqDeserializer::new(vec![(); Square::COUNT].into_iter());
        let map = ChessmenMap::deserialize(seq).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.get(H8), None);
    }
    #[test]
    fn test_map_rejects_short_sequence() {
        let seq: SeqDeserializer<_, Error> = SeqDeserializer::new(vec![(); 3].into_iter());
        assert!(ChessmenMap::deserialize(seq).is_err());
        let seq: SeqDeserializer<_, Error> = SeqDeserializer::new(Vec::<()>::new().into_iter());
        assert!(ChessmenMap::deserialize(seq).is_err());
    }
    #[test]
    fn test_map_rejects_long_sequence() {
        let seq: SeqDeserializer<_, Error> =
            SeqDeserializer::new(vec![(); Square::COUNT + 1].into_iter());
        assert!(ChessmenMap::deserialize(seq).is_err());
    }
    #[test]
    fn test_board_state_rejects_checked_non_king() {
        let raw = |checked| RawBoardState {
            chessmen: ChessmenMap::regular(),
            active: Some(E4),
            checked,
        };
        assert_eq!(
            BoardState::try_from(raw(Some(Chessman::WQ))),
            Err(ParseError::CheckedNotKing(Chessman::WQ))
        );
        let state = BoardState::try_from(raw(Some(Chessman::BK))).unwrap();
        assert_eq!(state.checked(), Some(Chessman::BK));
        assert!(BoardState::try_from(raw(None)).is_ok());
    }
}
