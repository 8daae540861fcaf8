use riff_board_editor::*;
use Square::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_diff_matches_board(game: &Game) {
    let chessmen = game.board_state().chessmen();
    for piece in [
        Piece::King,
        Piece::Queen,
        Piece::Rook,
        Piece::Bishop,
        Piece::Knight,
        Piece::Pawn,
    ] {
        let black = chessmen.count(Chessman::black(piece)) as i32;
        let white = chessmen.count(Chessman::white(piece)) as i32;
        assert_eq!(game.chessmen_diff().balance(piece), black - white, "{}", piece);
    }
    assert_eq!(game.chessmen_diff(), &ChessmenDiff::new(chessmen));
}

#[test]
fn empty_board_rooks_diff() {
    init_logging();
    let mut game = Game::empty_board();
    game.add(Chessman::WR, A1).unwrap();
    game.add(Chessman::BR, A8).unwrap();
    assert!(game.chessmen_diff().items().is_empty());

    game.add(Chessman::WR, H1).unwrap();
    assert_eq!(
        game.chessmen_diff().items(),
        vec![ChessmenDiffItem {
            chessman: Chessman::WR,
            num: 1
        }]
    );
    assert_eq!(game.chessmen_diff().groups(), vec![Color::White]);
}

#[test]
fn regular_capture_history_and_diff() {
    init_logging();
    let mut game = Game::regular();
    game.move_chessman(Chessman::WP, E2, E4).unwrap();
    game.move_chessman(Chessman::BP, D7, D5).unwrap();
    game.move_chessman(Chessman::WP, E4, D5).unwrap();

    let items: Vec<HistoryItem> = game.history().items().copied().collect();
    assert_eq!(
        items,
        vec![
            HistoryItem::Moving {
                chessman: Chessman::WP,
                from: E2,
                to: E4,
                capture: false
            },
            HistoryItem::Moving {
                chessman: Chessman::BP,
                from: D7,
                to: D5,
                capture: false
            },
            HistoryItem::Moving {
                chessman: Chessman::WP,
                from: E4,
                to: D5,
                capture: true
            },
        ]
    );
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["white-pawn e2-e4", "black-pawn d7-d5", "white-pawn e4xd5"]
    );
    assert_eq!(
        game.chessmen_diff().items(),
        vec![ChessmenDiffItem {
            chessman: Chessman::WP,
            num: 1
        }]
    );
    assert!(game.history().is_current_index(2));
}

#[test]
fn failed_commands_change_nothing() {
    init_logging();
    let mut game = Game::regular();
    game.move_chessman(Chessman::WP, E2, E4).unwrap();
    let state = game.board_state().clone();
    let diff = *game.chessmen_diff();
    let len = game.history().len();

    assert!(!game.can_move(Chessman::WN, B1, D2));
    assert!(game.move_chessman(Chessman::WN, B1, D2).is_err());
    assert!(!game.can_add(Chessman::BP, H3));
    assert!(game.add(Chessman::BP, H3).is_err());
    assert!(!game.can_remove(Chessman::WK, E1));
    assert!(game.remove(Chessman::WK, E1).is_err());
    assert!(game.go_forward().is_err());
    assert!(game.go_by_index(5).is_err());

    assert_eq!(game.board_state(), &state);
    assert_eq!(game.chessmen_diff(), &diff);
    assert_eq!(game.history().len(), len);
    assert!(game.history().is_current_index(0));
}

#[test]
fn back_then_forward_restores_state() {
    init_logging();
    let mut game = Game::empty_board();
    game.add(Chessman::WK, E1).unwrap();
    game.add(Chessman::BK, E8).unwrap();
    game.add(Chessman::BQ, A5).unwrap();
    game.move_chessman(Chessman::BQ, A5, B4).unwrap();
    game.add(Chessman::WN, C3).unwrap();
    game.remove(Chessman::WN, C3).unwrap();

    let tip = game.board_state().clone();
    let steps = game.history().len();
    for _ in 0..steps {
        game.go_back().unwrap();
        assert_diff_matches_board(&game);
    }
    assert_eq!(game.board_state(), game.history().initial_board_state());
    for _ in 0..steps {
        game.go_forward().unwrap();
        assert_diff_matches_board(&game);
    }
    assert_eq!(game.board_state(), &tip);
    assert_eq!(game.board_state().checked(), Some(Chessman::WK));
}

#[test]
fn new_action_after_go_by_index_rewrites_history() {
    init_logging();
    let mut game = Game::regular();
    game.move_chessman(Chessman::WP, E2, E4).unwrap();
    game.move_chessman(Chessman::BP, E7, E5).unwrap();
    game.move_chessman(Chessman::WN, G1, F3).unwrap();
    game.go_by_index(0).unwrap();
    game.move_chessman(Chessman::BP, C7, C5).unwrap();

    assert_eq!(game.history().len(), 2);
    assert!(game.history().is_current_index(1));
    assert!(!game.can_go_forward());
    assert_eq!(game.board_state().chessman(E7), Some(Chessman::BP));
    assert_eq!(game.board_state().chessman(C5), Some(Chessman::BP));
}

#[test]
fn diff_tracks_board_through_edits() {
    init_logging();
    let mut game = Game::regular();
    game.remove(Chessman::BQ, D8).unwrap();
    assert_diff_matches_board(&game);
    game.add(Chessman::WQ, D4).unwrap();
    assert_diff_matches_board(&game);
    game.move_chessman(Chessman::WQ, D4, D7).unwrap();
    assert_diff_matches_board(&game);
    game.move_chessman(Chessman::BB, C8, D7).unwrap();
    assert_diff_matches_board(&game);
    game.go_back().unwrap();
    assert_diff_matches_board(&game);
    game.remove(Chessman::BP, A7).unwrap();
    assert_diff_matches_board(&game);

    let details = game.chessmen_diff().details();
    assert_eq!(
        details.white(),
        &vec![
            ChessmenDiffItem {
                chessman: Chessman::WQ,
                num: 2
            },
            ChessmenDiffItem {
                chessman: Chessman::WP,
                num: 2
            },
        ]
    );
    assert!(details.black().is_empty());
    assert_eq!(game.chessmen_diff().groups(), vec![Color::White]);
}

#[test]
fn manager_starts_new_games() {
    init_logging();
    let mut manager = GameManager::new();
    assert!(!manager.can_new_game());
    manager.game_mut().add(Chessman::WQ, E4).unwrap();
    assert!(manager.can_new_game());
    manager.new_game(GameMode::EmptyBoard);
    assert!(manager.game().board_state().chessmen().is_empty());
    assert_eq!(
        manager.game().available_chessmen_for_adding().len(),
        Chessman::ALL.len()
    );
}
