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

//! The editor engine.
//!
//! A `Game` owns the current `BoardState`, the `History` of every state it
//! produced and a running `ChessmenDiff`. Commands (`add`, `move_chessman`,
//! `remove`) validate first and either fully apply or return an
//! `InvariantError` with nothing changed. Each `can_*` predicate mirrors
//! the validation of its command so that callers can check before acting.

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{analyze_check, BoardState, Chessman, ChessmenMap, Color, Piece, Square};

mod diff;
mod history;
mod manager;

pub use diff::*;
pub use history::*;
pub use manager::*;

/// A color may have at most this many pawns on the board.
pub const MAX_PAWNS: usize = 8;
/// A color may have at most this many kings on the board.
pub const MAX_KINGS: usize = 1;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvariantError {
    #[error("Incorrect invariant for adding")]
    Adding,
    #[error("Incorrect invariant for moving")]
    Moving,
    #[error("Incorrect invariant for removing")]
    Removing,
    #[error("Incorrect invariant for go back")]
    GoBack,
    #[error("Incorrect invariant for go forward")]
    GoForward,
    #[error("Incorrect invariant for go by index")]
    GoByIndex,
}
use InvariantError::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// The standard 32-chessmen starting arrangement.
    #[default]
    Regular,
    EmptyBoard,
}

impl GameMode {
    fn chessmen(&self) -> ChessmenMap {
        match self {
            GameMode::Regular => ChessmenMap::regular(),
            GameMode::EmptyBoard => ChessmenMap::empty(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    mode: GameMode,
    state: BoardState,
    history: History,
    diff: ChessmenDiff,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl Game {
    pub fn new(mode: GameMode) -> Self {
        let state = BoardState::new(mode.chessmen());
        let diff = ChessmenDiff::new(state.chessmen());
        Self {
            mode,
            history: History::new(state.clone()),
            state,
            diff,
        }
    }

    pub fn regular() -> Self {
        Self::new(GameMode::Regular)
    }

    pub fn empty_board() -> Self {
        Self::new(GameMode::EmptyBoard)
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }
    #[inline]
    pub fn board_state(&self) -> &BoardState {
        &self.state
    }
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }
    #[inline]
    pub fn chessmen_diff(&self) -> &ChessmenDiff {
        &self.diff
    }

    /// Chessmen that may be added somewhere on the board: everything except
    /// a king whose color already has one and a pawn whose color already
    /// has eight.
    pub fn available_chessmen_for_adding(&self) -> Vec<Chessman> {
        Chessman::iter()
            .filter(|chessman| self.is_available_for_adding(*chessman))
            .collect()
    }

    fn is_available_for_adding(&self, chessman: Chessman) -> bool {
        let chessmen = self.state.chessmen();
        match chessman.piece() {
            Piece::King => chessmen.count(chessman) < MAX_KINGS,
            Piece::Pawn => chessmen.count(chessman) < MAX_PAWNS,
            _ => true,
        }
    }

    pub fn can_add(&self, chessman: Chessman, square: Square) -> bool {
        !self.state.has_chessman(square) && self.is_available_for_adding(chessman)
    }

    pub fn can_move(&self, chessman: Chessman, from: Square, to: Square) -> bool {
        if self.state.chessman(from) != Some(chessman) {
            return false;
        }
        match self.state.chessman(to) {
            None => true,
            Some(target) => target.color() != chessman.color() && !target.is_king(),
        }
    }

    pub fn can_remove(&self, chessman: Chessman, square: Square) -> bool {
        self.state.chessman(square) == Some(chessman) && !chessman.is_king()
    }

    pub fn add(&mut self, chessman: Chessman, square: Square) -> Result<()> {
        if !self.can_add(chessman, square) {
            return Err(Adding.into());
        }
        let chessmen = self.state.chessmen().clone().with(square, Some(chessman));
        self.diff.added(chessman);
        self.apply(
            HistoryItem::Adding { chessman, square },
            chessmen,
            chessman.color(),
        );
        Ok(())
    }

    pub fn move_chessman(&mut self, chessman: Chessman, from: Square, to: Square) -> Result<()> {
        if !self.can_move(chessman, from, to) {
            return Err(Moving.into());
        }
        let captured = self.state.chessman(to);
        let chessmen = self
            .state
            .chessmen()
            .clone()
            .with(from, None)
            .with(to, Some(chessman));
        if let Some(captured) = captured {
            self.diff.removed(captured);
        }
        self.apply(
            HistoryItem::Moving {
                chessman,
                from,
                to,
                capture: captured.is_some(),
            },
            chessmen,
            chessman.color(),
        );
        Ok(())
    }

    pub fn remove(&mut self, chessman: Chessman, square: Square) -> Result<()> {
        if !self.can_remove(chessman, square) {
            return Err(Removing.into());
        }
        let chessmen = self.state.chessmen().clone().with(square, None);
        self.diff.removed(chessman);
        self.apply(
            HistoryItem::Removing { chessman, square },
            chessmen,
            chessman.color(),
        );
        Ok(())
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn go_back(&mut self) -> Result<()> {
        self.history.go_back()?;
        self.sync_with_history();
        Ok(())
    }

    pub fn go_forward(&mut self) -> Result<()> {
        self.history.go_forward()?;
        self.sync_with_history();
        Ok(())
    }

    pub fn go_by_index(&mut self, index: usize) -> Result<()> {
        self.history.go_by_index(index)?;
        self.sync_with_history();
        Ok(())
    }

    fn apply(&mut self, item: HistoryItem, chessmen: ChessmenMap, last_action: Color) {
        let checked = analyze_check(&chessmen, last_action).map(Chessman::king);
        self.state = BoardState::after_action(chessmen, item.square(), checked);
        self.history.push(HistoryRecord {
            item,
            state: self.state.clone(),
        });
        debug!(
            "{} (record {}, check: {:?})",
            item,
            self.history.len(),
            checked.map(|king| king.color())
        );
    }

    fn sync_with_history(&mut self) {
        self.state = self.history.current_board_state().clone();
        self.diff = ChessmenDiff::new(self.state.chessmen());
        debug!("history cursor moved to {:?}", self.history.cursor());
    }
}
