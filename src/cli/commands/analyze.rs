//! Analyze command - minimax scores for every candidate on a board

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;

use crate::{
    Error,
    cli::output::{format_number, print_kv, print_section, print_subsection},
    minimax::{Minimax, ScoredMove},
    tictactoe::{Board, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Score every move on a board with minimax")]
pub struct AnalyzeArgs {
    /// Board as 9 cells in row-major order: X, O and . (whitespace ignored)
    pub board: String,

    /// Mark to move (`x` or `o`)
    #[arg(long, short = 'm', default_value = "x")]
    pub mark: String,

    /// Write the analysis as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Scores for one position
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub board: String,
    pub mark: Mark,
    pub candidates: Vec<ScoredMove>,
    pub best: ScoredMove,
    pub nodes: u64,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mark = parse_mark_token(&args.mark, "--mark")?;
    let mut board = Board::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;

    print_section("Position");
    print!("{board}");

    let analysis = analyze(&mut board, mark)?;

    print_subsection(&format!("Candidates for {mark}"));
    for candidate in &analysis.candidates {
        let marker = if candidate.position == analysis.best.position {
            "  <- best"
        } else {
            ""
        };
        println!("  {}  {:>3}{marker}", candidate.position, candidate.score);
    }

    print_subsection("Summary");
    print_kv("Best move", &analysis.best.position.to_string());
    print_kv("Score", &analysis.best.score.to_string());
    print_kv("Nodes searched", &format_number(analysis.nodes));

    if let Some(path) = &args.export {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &analysis)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

/// Score every candidate for `mark` and pick the best; the board is unchanged
pub fn analyze(board: &mut Board, mark: Mark) -> Result<Analysis> {
    let mut engine = Minimax::new(mark);
    let candidates = engine.score_moves(board)?;
    let best = Minimax::pick_best(&candidates).ok_or(Error::NoValidMoves)?;

    Ok(Analysis {
        board: board.encode(),
        mark,
        candidates,
        best,
        nodes: engine.last_nodes(),
    })
}

pub(crate) fn parse_mark_token(value: &str, flag: &str) -> Result<Mark> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Mark::X),
        "o" | "second" => Ok(Mark::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Position;

    #[test]
    fn parses_mark_tokens() {
        assert_eq!(parse_mark_token("X", "--mark").unwrap(), Mark::X);
        assert_eq!(parse_mark_token(" o ", "--mark").unwrap(), Mark::O);
        assert!(parse_mark_token("z", "--mark").is_err());
        assert!(parse_mark_token("0", "--mark").is_err());
    }

    #[test]
    fn analysis_lists_every_empty_cell() {
        let mut board = Board::from_string("XX. OO. ...").unwrap();
        let before = board;

        let analysis = analyze(&mut board, Mark::X).unwrap();

        assert_eq!(analysis.candidates.len(), 5);
        assert_eq!(analysis.best.position, Position::new(0, 2));
        assert_eq!(analysis.best.score, 10);
        assert!(analysis.nodes > 0);
        assert_eq!(board, before);
    }

    #[test]
    fn analysis_searches_the_tree_once() {
        let mut board = Board::from_string("X.. .O. ...").unwrap();
        let mut engine = Minimax::new(Mark::X);
        engine.score_moves(&mut board).unwrap();

        let analysis = analyze(&mut board, Mark::X).unwrap();

        assert_eq!(analysis.nodes, engine.last_nodes());
        assert_eq!(Some(analysis.best), Minimax::pick_best(&analysis.candidates));
    }

    #[test]
    fn decided_board_is_an_error() {
        let mut board = Board::from_string("OOO XX. X..").unwrap();
        assert!(analyze(&mut board, Mark::X).is_err());
    }
}
