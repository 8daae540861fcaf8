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

use log::debug;

use super::{Game, GameMode};

/// Owns the game being edited and replaces it on request.
#[derive(Debug, Clone, Default)]
pub struct GameManager {
    game: Game,
}

impl GameManager {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// A new game is only worth starting once the current one has changed.
    pub fn can_new_game(&self) -> bool {
        self.game.can_go_back()
    }

    /// Discards the current game, history included.
    pub fn new_game(&mut self, mode: GameMode) {
        debug!("new {:?} game", mode);
        self.game = Game::new(mode);
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use Square::*;

    #[test]
    fn test_starts_with_regular_game() {
        let manager = GameManager::new();
        assert_eq!(manager.game().mode(), GameMode::Regular);
        assert_eq!(manager.game().board_state().chessmen(), &ChessmenMap::regular());
        assert!(!manager.can_new_game());
    }
    #[test]
    fn test_can_new_game_follows_history() {
        let mut manager = GameManager::new();
        manager.game_mut().move_chessman(Chessman::WP, E2, E4).unwrap();
        assert!(manager.can_new_game());
        manager.game_mut().go_back().unwrap();
        assert!(!manager.can_new_game());
    }
    #[test]
    fn test_new_game_replaces_game() {
        let mut manager = GameManager::new();
        manager.game_mut().remove(Chessman::BQ, D8).unwrap();
        manager.new_game(GameMode::EmptyBoard);
        assert_eq!(manager.game().mode(), GameMode::EmptyBoard);
        assert!(manager.game().board_state().chessmen().is_empty());
        assert!(manager.game().history().is_empty());
        assert!(!manager.can_new_game());

        manager.new_game(GameMode::Regular);
        assert_eq!(manager.game().board_state().chessmen().len(), 32);
    }
}
