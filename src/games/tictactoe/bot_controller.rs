use super::board::{get_available_moves, is_full, Board};
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    /// `None` when the session has no computer player.
    pub fn from_game_state(state: &TicTacToeGameState) -> Option<Self> {
        Some(Self {
            board: state.board,
            bot_mark: state.bot_mark?,
        })
    }
}

/// Full-depth minimax over the 3x3 board. Returns the optimal empty cell
/// for the bot's marker, or `None` on a full board.
///
/// Among equal scores the lowest index wins (strict `>` during an
/// ascending scan), which keeps the bot deterministic.
pub fn calculate_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let mut board = input.board;

    let mut best_score = i32::MIN;
    let mut best_move = None;

    for index in get_available_moves(&board) {
        board[index] = bot_mark;
        let score = minimax(&mut board, 0, false, bot_mark);
        board[index] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Scores a position for `bot_mark`. Wins are worth `10 - depth` and
/// losses `-10 + depth`, so the bot prefers the fastest win and the most
/// delayed loss. No pruning: at most 9 plies, exhaustive search is cheap
/// and keeps the scan-order tie-break intact.
fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    let opponent_mark = bot_mark.opponent().unwrap();

    if check_win(board, bot_mark) {
        return WIN_SCORE - depth;
    }
    if check_win(board, opponent_mark) {
        return LOSS_SCORE + depth;
    }
    if is_full(board) {
        return 0;
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for index in get_available_moves(board) {
            board[index] = bot_mark;
            best_score = best_score.max(minimax(board, depth + 1, false, bot_mark));
            board[index] = Mark::Empty;
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for index in get_available_moves(board) {
            board[index] = opponent_mark;
            best_score = best_score.min(minimax(board, depth + 1, true, bot_mark));
            board[index] = Mark::Empty;
        }
        best_score
    }
}
