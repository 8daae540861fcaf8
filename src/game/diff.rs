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

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::board::{Chessman, ChessmenMap, Color, Pair, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessmenDiffItem {
    pub chessman: Chessman,
    pub num: usize,
}

/// Material imbalance between the two sides, one signed counter per piece.
/// A counter goes up for every black chessman and down for every white one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChessmenDiff {
    counters: [i32; Piece::COUNT],
}

impl ChessmenDiff {
    pub fn new(chessmen: &ChessmenMap) -> Self {
        let mut diff = Self::default();
        for (_, chessman) in chessmen.iter() {
            diff.added(chessman);
        }
        diff
    }

    #[inline]
    fn weight(color: Color) -> i32 {
        match color {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub(crate) fn added(&mut self, chessman: Chessman) {
        self.counters[chessman.piece().to_index()] += Self::weight(chessman.color());
    }

    pub(crate) fn removed(&mut self, chessman: Chessman) {
        self.counters[chessman.piece().to_index()] -= Self::weight(chessman.color());
    }

    /// Signed imbalance for `piece`: positive when black has more.
    #[inline]
    pub fn balance(&self, piece: Piece) -> i32 {
        self.counters[piece.to_index()]
    }

    /// One item per piece the two sides do not hold equally, in chessman order.
    pub fn items(&self) -> Vec<ChessmenDiffItem> {
        Chessman::iter()
            .filter_map(|chessman| {
                let balance = self.balance(chessman.piece()) * Self::weight(chessman.color());
                (balance > 0).then(|| ChessmenDiffItem {
                    chessman,
                    num: balance as usize,
                })
            })
            .collect()
    }

    /// Items grouped by the color that has more.
    pub fn details(&self) -> Pair<Vec<ChessmenDiffItem>> {
        let mut details: Pair<Vec<ChessmenDiffItem>> = Pair::default();
        for item in self.items() {
            details[item.chessman.color()].push(item);
        }
        details
    }

    /// Colors with at least one item, white first.
    pub fn groups(&self) -> Vec<Color> {
        let details = self.details();
        Color::iter()
            .filter(|color| !details[*color].is_empty())
            .collect()
    }

    pub fn is_balanced(&self) -> bool {
        self.counters.iter().all(|counter| *counter == 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use Square::*;

    #[test]
    fn test_regular_arrangement_is_balanced() {
        let diff = ChessmenDiff::new(&ChessmenMap::regular());
        assert!(diff.is_balanced());
        assert!(diff.items().is_empty());
        assert!(diff.groups().is_empty());
    }
    #[test]
    fn test_equal_counts_produce_no_item() {
        let map: ChessmenMap = [(A1, Chessman::WR), (A8, Chessman::BR)].into_iter().collect();
        assert!(ChessmenDiff::new(&map).items().is_empty());
    }
    #[test]
    fn test_items_favor_color_with_more() {
        let map: ChessmenMap = [
            (A1, Chessman::WR),
            (H1, Chessman::WR),
            (A8, Chessman::BR),
            (D8, Chessman::BQ),
            (C8, Chessman::BB),
            (F8, Chessman::BB),
        ]
        .into_iter()
        .collect();
        let diff = ChessmenDiff::new(&map);
        assert_eq!(
            diff.items(),
            vec![
                ChessmenDiffItem { chessman: Chessman::BQ, num: 1 },
                ChessmenDiffItem { chessman: Chessman::WR, num: 1 },
                ChessmenDiffItem { chessman: Chessman::BB, num: 2 },
            ]
        );
        assert_eq!(diff.balance(Piece::Bishop), 2);
        assert_eq!(diff.balance(Piece::Rook), -1);

        let details = diff.details();
        assert_eq!(details.white().len(), 1);
        assert_eq!(details.black().len(), 2);
        assert_eq!(diff.groups(), vec![Color::White, Color::Black]);
    }
    #[test]
    fn test_incremental_updates_match_recount() {
        let mut map = ChessmenMap::regular();
        let mut diff = ChessmenDiff::new(&map);

        map = map.with(D7, None);
        diff.removed(Chessman::BP);
        map = map.with(E4, Some(Chessman::WN));
        diff.added(Chessman::WN);

        assert_eq!(diff, ChessmenDiff::new(&map));
        assert_eq!(
            diff.items(),
            vec![
                ChessmenDiffItem { chessman: Chessman::WN, num: 1 },
                ChessmenDiffItem { chessman: Chessman::WP, num: 1 },
            ]
        );
    }
}
