mod broadcaster;
mod player;
mod session_rng;

pub mod tictactoe;

pub use broadcaster::GameBroadcaster;
pub use player::HumanPlayer;
pub use session_rng::SessionRng;
