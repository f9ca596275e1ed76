use super::board::{apply_move, empty_board, is_full, Board};
use super::types::{GameMode, GameStatus, Mark, MoveError};
use super::win_detector::check_win;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub mode: GameMode,
    /// Marker the computer plays with; `None` in human-vs-human sessions.
    pub bot_mark: Option<Mark>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode, bot_mark: Option<Mark>) -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            mode,
            bot_mark,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        self.board = apply_move(&self.board, index, self.current_mark)?;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    // Win must be checked before the full-board draw: a winning final
    // move also fills some boards.
    fn check_game_over(&mut self) {
        if check_win(&self.board, self.current_mark) {
            self.status = match self.current_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.bot_mark == Some(self.current_mark)
    }

    pub fn get_winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_mark),
            GameStatus::XWon => "PLAYER X WINS !!".to_string(),
            GameStatus::OWon => "PLAYER O WINS !!".to_string(),
            GameStatus::Draw => "IT'S A TIE!!".to_string(),
        }
    }
}
