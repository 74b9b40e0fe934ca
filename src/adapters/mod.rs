//! Adapters implementing the console port.
//!
//! The terminal console talks to a person; the scripted console replays
//! prepared answers for headless series and tests.

pub mod scripted_console;
pub mod terminal_console;

pub use scripted_console::ScriptedConsole;
pub use terminal_console::TerminalConsole;
