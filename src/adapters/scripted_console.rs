//! Pre-scripted console for headless play and tests.
//!
//! Answers come from queues filled up front; everything that would have been
//! shown is kept in a transcript instead of being printed.

use std::collections::VecDeque;

use crate::{
    Error, Result,
    ports::{Console, GameMode},
    tictactoe::{Board, SIZE},
};

/// Console that replays queued answers and records its output
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    coordinates: VecDeque<usize>,
    modes: VecDeque<GameMode>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Console with nothing to answer; suitable when no player asks
    pub fn silent() -> Self {
        Self::default()
    }

    /// Queue coordinates, consumed one per prompt
    pub fn with_coordinates<I>(mut self, coordinates: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.coordinates.extend(coordinates);
        self
    }

    /// Queue menu choices
    pub fn with_modes<I>(mut self, modes: I) -> Self
    where
        I: IntoIterator<Item = GameMode>,
    {
        self.modes.extend(modes);
        self
    }

    /// Everything written so far, one entry per call
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any transcript entry contains `needle`
    pub fn said(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Coordinates not yet consumed
    pub fn remaining_coordinates(&self) -> usize {
        self.coordinates.len()
    }

    /// Drop the transcript, keeping queued answers
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }
}

impl Console for ScriptedConsole {
    fn message(&mut self, text: &str) -> Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        self.transcript.push(board.to_string());
        Ok(())
    }

    fn ask_coordinate(&mut self, prompt: &str) -> Result<usize> {
        loop {
            self.transcript.push(prompt.to_string());
            let coordinate = self.coordinates.pop_front().ok_or_else(|| Error::InputClosed {
                expected: "a coordinate".to_string(),
            })?;
            if coordinate < SIZE {
                return Ok(coordinate);
            }
            self.transcript
                .push("Invalid coordinate. The coordinate must be between 0 and 2!\n".to_string());
        }
    }

    fn select_mode(&mut self) -> Result<GameMode> {
        self.modes.pop_front().ok_or_else(|| Error::InputClosed {
            expected: "a menu option".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_coordinates_in_order() {
        let mut console = ScriptedConsole::silent().with_coordinates([2, 0]);

        assert_eq!(console.ask_coordinate("row: ").unwrap(), 2);
        assert_eq!(console.ask_coordinate("col: ").unwrap(), 0);
        assert!(matches!(
            console.ask_coordinate("row: "),
            Err(Error::InputClosed { .. })
        ));
    }

    #[test]
    fn skips_out_of_range_coordinates() {
        let mut console = ScriptedConsole::silent().with_coordinates([5, 1]);

        assert_eq!(console.ask_coordinate("row: ").unwrap(), 1);
        assert!(console.said("must be between 0 and 2"));
        assert_eq!(console.remaining_coordinates(), 0);
    }

    #[test]
    fn records_messages_and_boards() {
        let mut console = ScriptedConsole::silent().with_modes([GameMode::Exit]);
        console.message("hello\n").unwrap();
        console.show_board(&Board::new()).unwrap();

        assert_eq!(console.transcript().len(), 2);
        assert!(console.said("hello"));
        assert!(console.said("---+---+---"));
        assert_eq!(console.select_mode().unwrap(), GameMode::Exit);

        console.clear_transcript();
        assert!(console.transcript().is_empty());
    }
}
