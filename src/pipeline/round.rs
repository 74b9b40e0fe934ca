//! Turn controller for a single round

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::{
    Error, Result,
    ports::{Console, Observer, Player},
    tictactoe::{Board, GameOutcome, Mark, Move},
};

/// What happened in a finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Mark that moved first
    pub starter: Mark,
    pub outcome: GameOutcome,
    /// Committed moves in play order
    pub moves: Vec<Move>,
    /// Final board
    pub board: Board,
}

/// Alternates two players on a fresh board until a win or a draw
pub struct TurnController {
    rng: StdRng,
    observers: Vec<Box<dyn Observer>>,
    rounds_played: usize,
}

impl TurnController {
    /// Create a controller whose coin flips are seeded from entropy
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a controller with deterministic coin flips
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            observers: Vec::new(),
            rounds_played: 0,
        }
    }

    /// Add an observer to the controller
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub(crate) fn observers_mut(&mut self) -> &mut [Box<dyn Observer>] {
        &mut self.observers
    }

    /// Unbiased coin flip between the two marks
    pub fn choose_starter(&mut self) -> Mark {
        if self.rng.random_bool(0.5) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Play one round on a new board.
    ///
    /// The starter is picked by [`choose_starter`](Self::choose_starter).
    /// After every move the board is shown, then the winner is checked before
    /// fullness.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateMark`] if both players use the same mark
    /// - [`Error::TurnContract`] if a turn did not add exactly the reported
    ///   move: one `active` mark on a cell that was empty before the turn
    /// - any error from a player or the console
    pub fn play_round(
        &mut self,
        first: &mut dyn Player,
        second: &mut dyn Player,
        console: &mut dyn Console,
    ) -> Result<RoundSummary> {
        if first.mark() == second.mark() {
            return Err(Error::DuplicateMark { mark: first.mark() });
        }

        let round = self.rounds_played;
        let starter = self.choose_starter();
        for observer in &mut self.observers {
            observer.on_round_start(round, starter)?;
        }

        let mut board = Board::new();
        let mut moves = Vec::new();
        let mut active = starter;

        console.message(&format!("Player {starter} starts!"))?;
        console.show_board(&board)?;

        let outcome = loop {
            let player: &mut dyn Player = if first.mark() == active {
                &mut *first
            } else {
                &mut *second
            };

            let before = board;
            let mv = player.play(&mut board, console)?;
            if let Err(reason) = check_turn(&before, &board, &mv, active) {
                return Err(Error::TurnContract {
                    player: player.name().to_string(),
                    reason,
                });
            }
            trace!(round, ply = moves.len(), player = player.name(), %mv, "turn");

            for observer in &mut self.observers {
                observer.on_move(round, moves.len(), &mv, &board)?;
            }
            moves.push(mv);
            console.show_board(&board)?;

            if let Some(winner) = board.winner() {
                console.message(&format!("Player {winner} won!\n"))?;
                break GameOutcome::Win(winner);
            } else if board.is_full() {
                console.message("Nobody won, it's a tie!\n")?;
                break GameOutcome::Draw;
            }

            active = active.opponent();
        };

        info!(round, %starter, ?outcome, plies = moves.len(), "round finished");
        for observer in &mut self.observers {
            observer.on_round_end(round, outcome)?;
        }
        self.rounds_played += 1;

        Ok(RoundSummary {
            starter,
            outcome,
            moves,
            board,
        })
    }
}

/// The board after a turn must be `before` plus the reported move, and
/// nothing else
fn check_turn(
    before: &Board,
    after: &Board,
    mv: &Move,
    active: Mark,
) -> std::result::Result<(), String> {
    if mv.mark != active {
        return Err(format!("reported a move for {} on {active}'s turn", mv.mark));
    }
    if !before.is_valid(mv.position) {
        return Err(format!("reported {} which was not a free cell", mv.position));
    }

    let mut expected = *before;
    expected
        .place_move(mv.position, active)
        .map_err(|err| err.to_string())?;
    if expected != *after {
        let placed = after.occupied_count() as isize - before.occupied_count() as isize;
        return Err(format!("board does not match {mv} ({placed} marks added)"));
    }
    Ok(())
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
