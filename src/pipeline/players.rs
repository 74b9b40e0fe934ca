//! Player implementations
//!
//! Three interchangeable seats behind the [`Player`] port:
//! - a person typing coordinates at the console
//! - a uniformly random baseline
//! - the exhaustive minimax engine

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::trace;

use crate::{
    Error, Result,
    minimax::Minimax,
    ports::{Console, Player, PlayerKind},
    tictactoe::{Board, Mark, Move, Position, SIZE},
};

/// Refuse to take a turn on a board that is already decided
fn ensure_playable(board: &Board) -> Result<()> {
    if let Some(winner) = board.winner() {
        return Err(Error::GameOver { winner });
    }
    if board.is_full() {
        return Err(Error::NoValidMoves);
    }
    Ok(())
}

/// Build the player for a seat
///
/// `seed` only matters for kinds with a random source; `None` seeds from
/// entropy.
pub fn create_player(kind: PlayerKind, mark: Mark, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(mark)),
        PlayerKind::Random => match seed {
            Some(seed) => Box::new(RandomPlayer::with_seed(mark, seed)),
            None => Box::new(RandomPlayer::new(mark)),
        },
        PlayerKind::Minimax => Box::new(MinimaxPlayer::new(mark)),
    }
}

/// Person at the console
pub struct HumanPlayer {
    mark: Mark,
    name: String,
}

impl HumanPlayer {
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            name: format!("Human {mark}"),
        }
    }
}

impl Player for HumanPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, board: &mut Board, console: &mut dyn Console) -> Result<Move> {
        ensure_playable(board)?;

        loop {
            let row = console.ask_coordinate(&format!("Player {}, enter row (0-2): ", self.mark))?;
            let col =
                console.ask_coordinate(&format!("Player {}, enter column (0-2): ", self.mark))?;
            let position = Position::new(row, col);

            if board.is_valid(position) {
                board.place_move(position, self.mark)?;
                return Ok(Move::new(position, self.mark));
            }
            console.message("Invalid coordinate! Please try again.\n")?;
        }
    }
}

/// Random policy player (baseline)
///
/// Samples in-bounds coordinates uniformly and rejects occupied ones.
pub struct RandomPlayer {
    mark: Mark,
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a new random player seeded from entropy
    pub fn new(mark: Mark) -> Self {
        Self::with_seed(mark, random())
    }

    /// Create a new random player with a deterministic seed
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self {
            mark,
            name: format!("Random {mark}"),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, board: &mut Board, console: &mut dyn Console) -> Result<Move> {
        ensure_playable(board)?;
        console.message(&format!("Player {} is thinking...\n", self.mark))?;

        let mut rejected = 0usize;
        loop {
            let position = Position::new(
                self.rng.random_range(0..SIZE),
                self.rng.random_range(0..SIZE),
            );
            if board.is_valid(position) {
                board.place_move(position, self.mark)?;
                trace!(mark = %self.mark, %position, rejected, "random move");
                console.message(&format!("Player {} move to: {position}\n", self.mark))?;
                return Ok(Move::new(position, self.mark));
            }
            rejected += 1;
        }
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Optimal player backed by the minimax engine
pub struct MinimaxPlayer {
    engine: Minimax,
    name: String,
}

impl MinimaxPlayer {
    pub fn new(mark: Mark) -> Self {
        Self {
            engine: Minimax::new(mark),
            name: format!("Minimax {mark}"),
        }
    }

    /// Get reference to the underlying engine
    pub fn engine(&self) -> &Minimax {
        &self.engine
    }
}

impl Player for MinimaxPlayer {
    fn mark(&self) -> Mark {
        self.engine.mark()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, board: &mut Board, console: &mut dyn Console) -> Result<Move> {
        ensure_playable(board)?;
        console.message("Wait... I'm thinking...\n")?;
        let mv = self.engine.play(board)?;
        console.message(&format!(
            "Okay, maybe here: {}. I'm a genius!\n",
            mv.position
        ))?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedConsole;

    #[test]
    fn human_reprompts_on_occupied_cell() {
        let mut board = Board::from_string("X........").unwrap();
        let mut console = ScriptedConsole::silent().with_coordinates([0, 0, 2, 1]);
        let mut player = HumanPlayer::new(Mark::O);

        let mv = player.play(&mut board, &mut console).unwrap();

        assert_eq!(mv, Move::new(Position::new(2, 1), Mark::O));
        assert_eq!(board.occupied_count(), 2);
        assert!(console.said("Invalid coordinate! Please try again."));
        assert!(console.said("Player O, enter row (0-2): "));
    }

    #[test]
    fn human_fails_when_input_runs_out() {
        let mut board = Board::new();
        let mut console = ScriptedConsole::silent().with_coordinates([1]);
        let mut player = HumanPlayer::new(Mark::X);

        let err = player.play(&mut board, &mut console).unwrap_err();

        assert!(matches!(err, Error::InputClosed { .. }));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn random_places_exactly_one_valid_mark() {
        let mut console = ScriptedConsole::silent();
        let mut player = RandomPlayer::with_seed(Mark::X, 42);
        let mut board = Board::from_string("OX. XO. .O.").unwrap();
        let before = board;

        let mv = player.play(&mut board, &mut console).unwrap();

        assert!(before.is_valid(mv.position));
        assert_eq!(board.occupied_count(), before.occupied_count() + 1);
        assert!(console.said("Player X move to:"));
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let board = Board::from_string("X...O....").unwrap();
        let mut console = ScriptedConsole::silent();

        let mut first = RandomPlayer::with_seed(Mark::X, 7);
        let mut second = RandomPlayer::with_seed(Mark::X, 11);
        second.set_rng_seed(7).unwrap();

        for _ in 0..5 {
            let mut a = board;
            let mut b = board;
            let mv_a = first.play(&mut a, &mut console).unwrap();
            let mv_b = second.play(&mut b, &mut console).unwrap();
            assert_eq!(mv_a, mv_b);
        }
    }

    #[test]
    fn random_finds_last_cell() {
        let mut board = Board::from_string("XOX XOO O.X").unwrap();
        let mut console = ScriptedConsole::silent();
        let mut player = RandomPlayer::with_seed(Mark::O, 3);

        let mv = player.play(&mut board, &mut console).unwrap();

        assert_eq!(mv.position, Position::new(2, 1));
    }

    #[test]
    fn random_rejects_full_board() {
        let mut board = Board::from_string("XOX XOO OXX").unwrap();
        let mut console = ScriptedConsole::silent();
        let mut player = RandomPlayer::with_seed(Mark::O, 3);

        assert!(matches!(
            player.play(&mut board, &mut console),
            Err(Error::NoValidMoves)
        ));
    }

    #[test]
    fn minimax_player_takes_win() {
        let mut board = Board::from_string("OO. XX. X..").unwrap();
        let mut console = ScriptedConsole::silent();
        let mut player = MinimaxPlayer::new(Mark::O);

        let mv = player.play(&mut board, &mut console).unwrap();

        assert_eq!(mv.position, Position::new(0, 2));
        assert_eq!(board.winner(), Some(Mark::O));
        assert!(player.engine().last_nodes() > 0);
        assert!(console.said("I'm thinking"));
    }

    #[test]
    fn factory_builds_requested_kind() {
        let player = create_player(PlayerKind::Minimax, Mark::O, None);
        assert_eq!(player.mark(), Mark::O);
        assert_eq!(player.name(), "Minimax O");

        let player = create_player(PlayerKind::Random, Mark::X, Some(1));
        assert_eq!(player.name(), "Random X");

        let player = create_player(PlayerKind::Human, Mark::X, None);
        assert_eq!(player.name(), "Human X");
    }

    #[test]
    fn players_refuse_decided_board() {
        let mut board = Board::from_string("XXX OO. ...").unwrap();
        let mut console = ScriptedConsole::silent().with_coordinates([2, 2]);

        for kind in [PlayerKind::Human, PlayerKind::Random, PlayerKind::Minimax] {
            let mut player = create_player(kind, Mark::O, Some(5));
            assert!(matches!(
                player.play(&mut board, &mut console),
                Err(Error::GameOver { winner: Mark::X })
            ));
        }
    }
}
