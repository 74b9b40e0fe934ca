//! Line-oriented console over any reader/writer pair.
//!
//! Each prompt consumes one input line. Invalid answers are reported and the
//! prompt is repeated; end of input is an error rather than a silent loop.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::{
    Error, Result,
    ports::{Console, GameMode},
    tictactoe::{Board, SIZE},
};

/// Console backed by a buffered reader and a writer
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin/stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return the writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|source| Error::Io {
                operation: "write to console".to_string(),
                source,
            })
    }

    fn read_line(&mut self, expected: &str) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read from console".to_string(),
                source,
            })?;
        if read == 0 {
            return Err(Error::InputClosed {
                expected: expected.to_string(),
            });
        }
        Ok(line.trim().to_string())
    }

    fn print_menu(&mut self) -> Result<()> {
        self.write(
            "Please select an option:\n\
             1. Player vs Player.\n\
             2. Player vs Random AI.\n\
             3. Player vs minMax AI.\n\
             0. Close game.\n\
             Select an option: ",
        )
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn message(&mut self, text: &str) -> Result<()> {
        self.write(text)
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        self.write(&format!("\n{board}\n"))
    }

    fn ask_coordinate(&mut self, prompt: &str) -> Result<usize> {
        loop {
            self.write(prompt)?;
            let answer = self.read_line("a coordinate")?;
            match answer.parse::<i64>() {
                Ok(value) => match usize::try_from(value) {
                    Ok(coordinate) if coordinate < SIZE => return Ok(coordinate),
                    _ => self.write(
                        "Invalid coordinate. The coordinate must be between 0 and 2!\n",
                    )?,
                },
                Err(_) => self.write(
                    "Invalid coordinate. The coordinate must be a number between 0 and 2!\n",
                )?,
            }
        }
    }

    fn select_mode(&mut self) -> Result<GameMode> {
        loop {
            self.print_menu()?;
            let answer = self.read_line("a menu option")?;
            let mode = match answer.parse::<i64>() {
                Ok(0) => {
                    self.write("Game closed. Bye!\n")?;
                    GameMode::Exit
                }
                Ok(1) => {
                    self.write("Starting Human vs Human game...\n")?;
                    GameMode::HumanVsHuman
                }
                Ok(2) => {
                    self.write("Starting Human vs Random AI game...\n")?;
                    GameMode::HumanVsRandom
                }
                Ok(3) => {
                    self.write("Starting Human vs MinMax AI game...\n")?;
                    GameMode::HumanVsMinimax
                }
                Ok(_) => {
                    self.write("Invalid option. Please choose a number between 0 and 3.\n")?;
                    continue;
                }
                Err(_) => {
                    self.write("Invalid option. The option must be a number between 0 and 3!\n")?;
                    continue;
                }
            };
            return Ok(mode);
        }
    }
}
