use applebox_app::{Autoplayer, Input, Session, dto::PlayReportDto};
use applebox_core::{CellRange, GameConfig};
use applebox_game::{GameOverReason, GridLayout};
use applebox_generator::BoardSeed;

fn small_session(board: &str) -> Session {
    let config = GameConfig {
        cols: 2,
        rows: 2,
        total_cells: 4,
        duration_secs: 60,
        ..GameConfig::DEFAULT
    };
    let layout = GridLayout::new(2, 2, 22.0, 22.0, 2.0);
    let mut session = Session::with_layout(config, layout).unwrap();
    session.start_with_board(board.parse().unwrap()).unwrap();
    session
}

#[test]
fn test_autoplay_clears_small_board() {
    let mut session = small_session("46/19");
    let report = Autoplayer::new(5).play(&mut session);

    assert_eq!(report.score, 2);
    assert_eq!(
        report.clears,
        [CellRange::new(0, 0, 1, 0), CellRange::new(0, 0, 1, 1)]
    );
    assert_eq!(report.cells_left, 0);
    assert_eq!(report.time_remaining, 55);
    assert_eq!(report.outcome, Some(GameOverReason::BoardCleared));
    assert_eq!(report.seed, None);

    let dto = PlayReportDto::from(&report);
    assert_eq!(dto.clears, [[0, 0, 1, 0], [0, 0, 1, 1]]);
    assert_eq!(dto.message.as_deref(), Some("Game Over! All apples cleared!"));
}

#[test]
fn test_autoplay_waits_out_clock_when_stuck() {
    let mut session = small_session("99/99");
    let report = Autoplayer::new(1).play(&mut session);

    assert_eq!(report.score, 0);
    assert!(report.clears.is_empty());
    assert_eq!(report.cells_left, 4);
    assert_eq!(report.time_remaining, 0);
    assert_eq!(report.outcome, Some(GameOverReason::TimeUp));
}

#[test]
fn test_autoplay_without_game() {
    let mut session = Session::new(GameConfig::DEFAULT).unwrap();
    let report = Autoplayer::new(1).play(&mut session);
    assert_eq!(report.outcome, None);
    assert_eq!(report.score, 0);
    assert_eq!(report.cells_left, 0);
}

#[test]
fn test_autoplay_generated_board_is_reproducible() {
    let play = || {
        let mut session = Session::new(GameConfig::DEFAULT).unwrap();
        session.handle(Input::StartGame {
            seed: Some(BoardSeed::from_phrase("autoplay")),
        });
        Autoplayer::new(1).play(&mut session)
    };
    let first = play();
    let second = play();
    assert_eq!(first, second);

    assert!(first.outcome.is_some());
    assert_eq!(first.seed, Some(BoardSeed::from_phrase("autoplay")));
    assert_eq!(first.score as usize, first.clears.len());
    match first.outcome {
        Some(GameOverReason::BoardCleared) => assert_eq!(first.cells_left, 0),
        _ => assert_eq!(first.time_remaining, 0),
    }
}
