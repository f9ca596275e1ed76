mod session_rng;

pub mod session;
pub mod tictactoe;

pub use session::GameBroadcaster;
pub use session_rng::SessionRng;
