mod tictactoe_session;

use std::future::Future;

use crate::games::tictactoe::Board;

pub use tictactoe_session::{
    create_session, on_cell_activated, on_mode_selected, on_reset_requested, run_game_loop,
    GameOverInfo, TicTacToeSessionSettings, TicTacToeSessionState,
};

/// Outbound surface towards the view collaborator. The session pushes a
/// full board snapshot on every state change; the view redraws from it
/// and never holds game state of its own.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn render_board(&self, board: Board) -> impl Future<Output = ()> + Send;

    fn set_status_text(&self, text: String) -> impl Future<Output = ()> + Send;

    fn show_reset_control(&self, visible: bool) -> impl Future<Output = ()> + Send;
}
