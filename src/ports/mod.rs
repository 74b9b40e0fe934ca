//! Ports (trait boundaries) between the game core and its collaborators.
//!
//! The core owns these traits; players, consoles and observers are adapters
//! that implement them.

pub mod console;
pub mod observer;
pub mod player;

pub use console::{Console, GameMode};
pub use observer::Observer;
pub use player::{Player, PlayerKind};
