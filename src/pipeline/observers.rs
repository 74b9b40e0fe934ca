//! Observer implementations for series and rounds
//!
//! Observers collect data while rounds are played without coupling the turn
//! controller to any output format.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, Mark, Move},
};

/// One committed move as written to a round log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    pub ply: usize,
    pub mv: Move,
    /// Board after the move, row-major with `.` for empty cells
    pub board: String,
}

/// A complete round as written to a round log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: usize,
    pub starter: Mark,
    pub outcome: GameOutcome,
    pub plies: Vec<PlyRecord>,
}

/// Progress bar observer - shows series progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    fn tally(&self) -> String {
        format!("X:{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_rounds: usize) -> Result<()> {
        let pb = ProgressBar::new(total_rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rounds ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_round_end(&mut self, round: usize, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(round as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// JSONL observer - writes one [`RoundRecord`] per line
pub struct JsonlObserver<W: Write + Send> {
    writer: W,
    current: Option<RoundRecord>,
}

impl JsonlObserver<BufWriter<File>> {
    /// Create a round log at `path`, truncating any existing file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> JsonlObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current: None,
        }
    }

    /// Consume the observer and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Observer for JsonlObserver<W> {
    fn on_round_start(&mut self, round: usize, starter: Mark) -> Result<()> {
        self.current = Some(RoundRecord {
            round,
            starter,
            outcome: GameOutcome::Draw,
            plies: Vec::new(),
        });
        Ok(())
    }

    fn on_move(&mut self, _round: usize, ply: usize, mv: &Move, board: &Board) -> Result<()> {
        if let Some(record) = &mut self.current {
            record.plies.push(PlyRecord {
                ply,
                mv: *mv,
                board: board.encode(),
            });
        }
        Ok(())
    }

    fn on_round_end(&mut self, _round: usize, outcome: GameOutcome) -> Result<()> {
        let Some(mut record) = self.current.take() else {
            return Ok(());
        };
        record.outcome = outcome;

        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
