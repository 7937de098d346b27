//! JSON views of boards, game state and autoplay reports.
//!
//! Boards use the compact text form of [`Board`]: rows joined by `/`, `.` for
//! a cleared cell and `1`..`9` for a present one.

use applebox_core::Board;
use applebox_game::{GameSnapshot, Phase};
use applebox_generator::GeneratedBoard;
use serde::{Deserialize, Serialize};

use crate::{PlayReport, game_over_message};

/// A board and the seed it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDto {
    /// Hex seed, if the board was generated.
    pub seed: Option<String>,
    /// Number of columns.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
    /// Board text.
    pub cells: String,
}

impl From<&Board> for BoardDto {
    fn from(board: &Board) -> Self {
        Self {
            seed: None,
            cols: board.cols(),
            rows: board.rows(),
            cells: board.to_string(),
        }
    }
}

impl From<&GeneratedBoard> for BoardDto {
    fn from(generated: &GeneratedBoard) -> Self {
        Self {
            seed: Some(generated.seed.to_string()),
            ..Self::from(&generated.board)
        }
    }
}

impl TryFrom<BoardDto> for Board {
    type Error = String;

    fn try_from(value: BoardDto) -> Result<Self, Self::Error> {
        let board = value.cells.parse::<Board>().map_err(|e| e.to_string())?;
        if board.cols() != value.cols || board.rows() != value.rows {
            return Err(format!(
                "board is {}x{}, header says {}x{}",
                board.cols(),
                board.rows(),
                value.cols,
                value.rows
            ));
        }
        Ok(board)
    }
}

/// Everything a renderer shows at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotDto {
    /// Board text, `None` before the first game.
    pub board: Option<String>,
    /// Hex seed of the current board.
    pub seed: Option<String>,
    /// Matches cleared.
    pub score: u32,
    /// Seconds left.
    pub time_remaining: u32,
    /// Countdown as `m:ss`.
    pub clock: String,
    /// Sum of the highlighted cells.
    pub selected_sum: u32,
    /// Sum that clears a selection.
    pub target_sum: u32,
    /// Releasing now would clear the highlighted cells.
    pub selection_matches: bool,
    /// `not_started`, `playing`, `selecting`, `time_up` or `board_cleared`.
    pub phase: String,
    /// Game over message, once the game has ended.
    pub message: Option<String>,
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "not_started",
        Phase::Playing { selecting: false } => "playing",
        Phase::Playing { selecting: true } => "selecting",
        Phase::TimeUp => "time_up",
        Phase::BoardCleared => "board_cleared",
    }
}

impl From<&GameSnapshot<'_>> for SnapshotDto {
    fn from(snapshot: &GameSnapshot<'_>) -> Self {
        Self {
            board: snapshot.board.map(ToString::to_string),
            seed: snapshot.seed.map(|seed| seed.to_string()),
            score: snapshot.score,
            time_remaining: snapshot.time_remaining,
            clock: snapshot.clock(),
            selected_sum: snapshot.selected_sum,
            target_sum: snapshot.target_sum,
            selection_matches: snapshot.selection_matches(),
            phase: phase_name(snapshot.phase()).to_owned(),
            message: snapshot
                .game_over
                .map(|reason| game_over_message(reason).to_owned()),
        }
    }
}

/// Summary of an autoplayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayReportDto {
    /// Hex seed of the board.
    pub seed: Option<String>,
    /// Matches cleared.
    pub score: u32,
    /// Dragged rectangles as `[left, top, right, bottom]`, inclusive.
    pub clears: Vec<[usize; 4]>,
    /// Cells still on the board.
    pub cells_left: usize,
    /// Seconds left at the end.
    pub time_remaining: u32,
    /// Game over message.
    pub message: Option<String>,
}

impl From<&PlayReport> for PlayReportDto {
    fn from(report: &PlayReport) -> Self {
        Self {
            seed: report.seed.map(|seed| seed.to_string()),
            score: report.score,
            clears: report
                .clears
                .iter()
                .map(|range| [range.left(), range.top(), range.right(), range.bottom()])
                .collect(),
            cells_left: report.cells_left,
            time_remaining: report.time_remaining,
            message: report
                .outcome
                .map(|reason| game_over_message(reason).to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use applebox_generator::BoardSeed;

    use super::*;

    #[test]
    fn test_board_dto_json() {
        let board: Board = "46/3.".parse().unwrap();
        let json = serde_json::to_string(&BoardDto::from(&board)).unwrap();
        assert_eq!(json, r#"{"seed":null,"cols":2,"rows":2,"cells":"46/3."}"#);

        let dto: BoardDto = serde_json::from_str(&json).unwrap();
        assert_eq!(Board::try_from(dto).unwrap(), board);
    }

    #[test]
    fn test_board_dto_rejects_wrong_shape() {
        let dto = BoardDto {
            seed: None,
            cols: 3,
            rows: 1,
            cells: "12/34".to_owned(),
        };
        assert!(Board::try_from(dto).is_err());

        let dto = BoardDto {
            seed: None,
            cols: 2,
            rows: 1,
            cells: "1x".to_owned(),
        };
        assert!(Board::try_from(dto).is_err());
    }

    #[test]
    fn test_generated_board_dto_carries_seed() {
        let seed = BoardSeed::from_phrase("dto");
        let generated = GeneratedBoard {
            seed,
            board: "55".parse().unwrap(),
        };
        let dto = BoardDto::from(&generated);
        assert_eq!(dto.seed, Some(seed.to_string()));
        assert_eq!(dto.cells, "55");
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(phase_name(Phase::NotStarted), "not_started");
        assert_eq!(phase_name(Phase::Playing { selecting: true }), "selecting");
        assert_eq!(phase_name(Phase::BoardCleared), "board_cleared");
    }
}
