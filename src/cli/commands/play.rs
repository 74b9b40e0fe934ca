//! Play command - interactive rounds at the terminal

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::{
    Error,
    adapters::TerminalConsole,
    cli::config::CommonConfig,
    pipeline::{HumanPlayer, TurnController, create_player},
    ports::{Console, GameMode, PlayerKind},
    tictactoe::Mark,
};

#[derive(Parser, Debug)]
#[command(about = "Play at the terminal against a person or an AI")]
pub struct PlayArgs {
    /// Skip the menu and play a single round against this opponent
    #[arg(long, value_enum)]
    pub mode: Option<PlayerKind>,
}

pub fn execute(args: PlayArgs, common: &CommonConfig) -> Result<()> {
    let mut console = TerminalConsole::stdio();
    let rounds = run_session(&mut console, args.mode, common).context("interactive session failed")?;
    info!(rounds, "session closed");
    Ok(())
}

/// Menu loop: a human `X` against an `O` of the chosen kind, one round per
/// menu choice, until the menu is closed or input ends.
///
/// With `mode` set the menu is skipped and exactly one round is played.
/// Returns the number of rounds played.
pub fn run_session(
    console: &mut dyn Console,
    mode: Option<PlayerKind>,
    common: &CommonConfig,
) -> crate::Result<usize> {
    let mut controller = match common.seed {
        Some(seed) => TurnController::with_seed(seed),
        None => TurnController::new(),
    };
    let mut rounds = 0usize;

    loop {
        let choice = match mode {
            Some(kind) if rounds == 0 => GameMode::against(kind),
            Some(_) => break,
            None => match console.select_mode() {
                Ok(choice) => choice,
                Err(Error::InputClosed { .. }) => break,
                Err(err) => return Err(err),
            },
        };
        let Some(kind) = choice.opponent() else {
            break;
        };

        let mut human = HumanPlayer::new(Mark::X);
        let mut opponent = create_player(kind, Mark::O, common.derived_seed(rounds as u64 + 1));
        controller.play_round(&mut human, opponent.as_mut(), console)?;
        rounds += 1;
    }

    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::ScriptedConsole, tictactoe::Position};

    /// Answers that fill the first free cell in row-major order
    fn scan_cells(times: usize) -> impl Iterator<Item = usize> {
        (0..times).flat_map(|_| Position::all().flat_map(|p| [p.row, p.col]))
    }

    fn seeded() -> CommonConfig {
        CommonConfig {
            seed: Some(21),
            ..CommonConfig::default()
        }
    }

    #[test]
    fn menu_loop_runs_until_exit() {
        let mut console = ScriptedConsole::silent()
            .with_modes([GameMode::HumanVsMinimax, GameMode::HumanVsRandom, GameMode::Exit])
            .with_coordinates(scan_cells(2));

        let rounds = run_session(&mut console, None, &seeded()).unwrap();

        assert_eq!(rounds, 2);
        assert!(console.said("I'm thinking"));
        assert!(console.said("Player O is thinking..."));
    }

    #[test]
    fn closed_menu_input_ends_session() {
        let mut console = ScriptedConsole::silent();
        assert_eq!(run_session(&mut console, None, &seeded()).unwrap(), 0);
    }

    #[test]
    fn fixed_mode_plays_one_round() {
        let mut console = ScriptedConsole::silent()
            .with_modes([GameMode::HumanVsHuman])
            .with_coordinates(scan_cells(1));

        let rounds = run_session(&mut console, Some(PlayerKind::Minimax), &seeded()).unwrap();

        assert_eq!(rounds, 1);
        assert!(!console.said("Player X won!"));
    }

    #[test]
    fn two_humans_share_the_console() {
        // Both seats scan the same list, so every answer pair fills one cell.
        let mut console = ScriptedConsole::silent()
            .with_modes([GameMode::HumanVsHuman, GameMode::Exit])
            .with_coordinates(scan_cells(1));

        let rounds = run_session(&mut console, None, &seeded()).unwrap();

        assert_eq!(rounds, 1);
        assert!(console.said("Player O, enter row (0-2): "));
    }
}
