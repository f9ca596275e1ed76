use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};

use super::GameBroadcaster;
use crate::games::tictactoe::{
    calculate_move, check_win_with_line, BotInput, FirstPlayerMode, GameMode, GameStatus, Mark,
    MoveError, TicTacToeGameState, WinningLine,
};
use crate::games::SessionRng;
use crate::log;

#[derive(Clone, Debug)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub first_player: FirstPlayerMode,
    pub bot_delay_ms: u64,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsComputer,
            first_player: FirstPlayerMode::HumanFirst,
            bot_delay_ms: 500,
        }
    }
}

impl From<&crate::config::SessionConfig> for TicTacToeSessionSettings {
    fn from(config: &crate::config::SessionConfig) -> Self {
        Self {
            mode: config.mode,
            first_player: config.first_player,
            bot_delay_ms: config.bot_delay_ms,
        }
    }
}

#[derive(Clone)]
pub struct TicTacToeSessionState {
    pub game_state: Arc<Mutex<TicTacToeGameState>>,
    pub turn_notify: Arc<Notify>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverInfo {
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
}

pub fn create_session(
    settings: &TicTacToeSessionSettings,
    rng: &mut SessionRng,
) -> TicTacToeSessionState {
    let bot_mark = match settings.mode {
        GameMode::HumanVsHuman => None,
        GameMode::HumanVsComputer => Some(match settings.first_player {
            FirstPlayerMode::HumanFirst => Mark::O,
            FirstPlayerMode::ComputerFirst => Mark::X,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        }),
    };

    TicTacToeSessionState {
        game_state: Arc::new(Mutex::new(TicTacToeGameState::new(settings.mode, bot_mark))),
        turn_notify: Arc::new(Notify::new()),
    }
}

/// Starts a fresh session with a newly selected mode.
pub fn on_mode_selected(
    settings: &mut TicTacToeSessionSettings,
    mode: GameMode,
    rng: &mut SessionRng,
) -> TicTacToeSessionState {
    settings.mode = mode;
    create_session(settings, rng)
}

/// Starts a fresh session preserving the last-chosen mode.
pub fn on_reset_requested(
    settings: &TicTacToeSessionSettings,
    rng: &mut SessionRng,
) -> TicTacToeSessionState {
    create_session(settings, rng)
}

/// Entry point for a human cell selection. Every rejected move degrades
/// to a logged no-op; nothing is surfaced to the player.
pub async fn on_cell_activated(session_state: &TicTacToeSessionState, index: usize) {
    let mut game_state = session_state.game_state.lock().await;

    if game_state.is_bot_turn() {
        log!("Ignoring cell {}: {}", index, MoveError::NotYourTurn);
        return;
    }

    match game_state.place_mark(index) {
        Ok(()) => {
            log!("Player {} marked cell {}", game_state.board[index], index);
            drop(game_state);
            session_state.turn_notify.notify_one();
        }
        Err(e) => log!("Ignoring cell {}: {}", index, e),
    }
}

pub async fn run_game_loop<B: GameBroadcaster>(
    settings: TicTacToeSessionSettings,
    session_state: TicTacToeSessionState,
    broadcaster: B,
) -> GameOverInfo {
    broadcaster.show_reset_control(false).await;

    loop {
        broadcast_state(&session_state, &broadcaster).await;

        let (is_game_over, is_bot_turn) = {
            let game_state = session_state.game_state.lock().await;
            (
                game_state.status != GameStatus::InProgress,
                game_state.is_bot_turn(),
            )
        };

        if is_game_over {
            break;
        }

        if is_bot_turn {
            // UX pacing only; once scheduled the bot move always commits
            tokio::time::sleep(Duration::from_millis(settings.bot_delay_ms)).await;
            play_bot_turn(&session_state).await;
        } else {
            session_state.turn_notify.notified().await;
        }
    }

    broadcaster.show_reset_control(true).await;

    build_game_over_info(&session_state).await
}

async fn play_bot_turn(session_state: &TicTacToeSessionState) {
    let bot_input = {
        let game_state = session_state.game_state.lock().await;
        match BotInput::from_game_state(&game_state) {
            Some(input) => input,
            None => return,
        }
    };

    let calculated_move = tokio::task::spawn_blocking(move || calculate_move(&bot_input)).await;

    if let Ok(Some(index)) = calculated_move {
        let mut game_state = session_state.game_state.lock().await;
        match game_state.place_mark(index) {
            Ok(()) => log!("Bot marked cell {}", index),
            Err(e) => log!("Bot move to cell {} rejected: {}", index, e),
        }
    }
}

async fn broadcast_state<B: GameBroadcaster>(
    session_state: &TicTacToeSessionState,
    broadcaster: &B,
) {
    let (board, status_text) = {
        let game_state = session_state.game_state.lock().await;
        (game_state.board, game_state.status_text())
    };

    broadcaster.render_board(board).await;
    broadcaster.set_status_text(status_text).await;
}

async fn build_game_over_info(session_state: &TicTacToeSessionState) -> GameOverInfo {
    let game_state = session_state.game_state.lock().await;

    let winning_line = if game_state.get_winner().is_some() {
        check_win_with_line(&game_state.board)
    } else {
        None
    };

    log!("Game over: {}", game_state.status_text());

    GameOverInfo {
        status: game_state.status,
        winning_line,
    }
}
