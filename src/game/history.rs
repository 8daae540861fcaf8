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

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use crate::board::{BoardState, Chessman, Square};

use super::InvariantError;

/// A single recorded action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryItem {
    Adding {
        chessman: Chessman,
        square: Square,
    },
    Removing {
        chessman: Chessman,
        square: Square,
    },
    Moving {
        chessman: Chessman,
        from: Square,
        to: Square,
        capture: bool,
    },
}

impl HistoryItem {
    pub fn chessman(&self) -> Chessman {
        match *self {
            Self::Adding { chessman, .. }
            | Self::Removing { chessman, .. }
            | Self::Moving { chessman, .. } => chessman,
        }
    }

    /// The square that becomes active once this action is applied.
    pub fn square(&self) -> Square {
        match *self {
            Self::Adding { square, .. } | Self::Removing { square, .. } => square,
            Self::Moving { to, .. } => to,
        }
    }
}

impl fmt::Display for HistoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adding { chessman, square } => write!(f, "[+]{} {}", chessman, square),
            Self::Removing { chessman, square } => write!(f, "[-]{} {}", chessman, square),
            Self::Moving {
                chessman,
                from,
                to,
                capture,
            } => {
                let separator = if *capture { 'x' } else { '-' };
                write!(f, "{} {}{}{}", chessman, from, separator, to)
            }
        }
    }
}

/// An action paired with the board state it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub item: HistoryItem,
    pub state: BoardState,
}

/// Every board state produced so far and a cursor into them.
///
/// The cursor is `None` while the board is at its initial state, before
/// any recorded action; otherwise it indexes the current record. Going
/// back and then recording a new action drops the records after the
/// cursor.
#[derive(Debug, Clone)]
pub struct History {
    initial: BoardState,
    records: Vec<HistoryRecord>,
    cursor: Option<usize>,
}

impl History {
    pub fn new(initial: BoardState) -> Self {
        Self {
            initial,
            records: Vec::new(),
            cursor: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn items(&self) -> impl Iterator<Item = &HistoryItem> + '_ {
        self.records.iter().map(|record| &record.item)
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn initial_board_state(&self) -> &BoardState {
        &self.initial
    }

    pub fn current_board_state(&self) -> &BoardState {
        match self.cursor {
            Some(index) => &self.records[index].state,
            None => &self.initial,
        }
    }

    #[inline]
    pub fn can_go_back(&self) -> bool {
        self.cursor.is_some()
    }

    #[inline]
    pub fn can_go_forward(&self) -> bool {
        match self.cursor {
            Some(index) => index + 1 < self.records.len(),
            None => !self.records.is_empty(),
        }
    }

    #[inline]
    pub fn is_current_index(&self, index: usize) -> bool {
        self.cursor == Some(index)
    }

    pub fn go_back(&mut self) -> Result<()> {
        match self.cursor {
            Some(0) => self.cursor = None,
            Some(index) => self.cursor = Some(index - 1),
            None => return Err(InvariantError::GoBack.into()),
        }
        Ok(())
    }

    pub fn go_forward(&mut self) -> Result<()> {
        if !self.can_go_forward() {
            return Err(InvariantError::GoForward.into());
        }
        self.cursor = Some(self.cursor.map_or(0, |index| index + 1));
        Ok(())
    }

    pub fn go_by_index(&mut self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(InvariantError::GoByIndex.into());
        }
        self.cursor = Some(index);
        Ok(())
    }

    /// Appends `record` and moves the cursor onto it, discarding any
    /// records that were ahead of the cursor.
    pub(crate) fn push(&mut self, record: HistoryRecord) {
        let keep = self.cursor.map_or(0, |index| index + 1);
        if keep < self.records.len() {
            debug!("history rewrite: dropping {} record(s)", self.records.len() - keep);
            self.records.truncate(keep);
        }
        self.records.push(record);
        self.cursor = Some(self.records.len() - 1);
    }
}

impl Index<usize> for History {
    type Output = HistoryRecord;
    fn index(&self, index: usize) -> &Self::Output {
        self.records.index(index)
    }
}
