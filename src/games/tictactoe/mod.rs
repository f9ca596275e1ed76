mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{apply_move, empty_board, get_available_moves, is_full, Board, BOARD_CELLS};
pub use bot_controller::{calculate_move, BotInput};
pub use game_state::TicTacToeGameState;
pub use types::{
    FirstPlayerMode, GameMode, GameStatus, Mark, MoveError, WinningLine, WIN_PATTERNS,
};
pub use win_detector::{check_win, check_win_with_line};
