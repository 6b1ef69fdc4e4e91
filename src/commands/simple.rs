//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::Code;
use crate::error::MastermindError;
use crate::game::{GameConfig, GameSession, GameState};
use crate::output::formatters::{code_to_string, pegs_to_string};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// configuration is invalid.
pub fn run_simple<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(config, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Game loop over arbitrary input and output streams
///
/// Ends on `quit`, on end of input, or when the player declines a rematch.
///
/// # Errors
///
/// Returns an error on I/O failure or if the configuration is invalid.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play<R, I, O>(config: &GameConfig, rng: &mut R, input: &mut I, out: &mut O) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Mastermind - Interactive Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    let palette = &config.palette;
    let colours: Vec<String> = palette
        .entries()
        .map(|(symbol, _)| code_to_string(&[symbol], palette))
        .collect();

    writeln!(
        out,
        "I've hidden a code of {} colours. You have {} guesses.",
        config.secret_length, config.max_rounds
    )?;
    writeln!(out, "Colours: {}", colours.join(" "))?;
    writeln!(out, "Type a guess as labels, e.g. '{}'.", example_guess(config))?;
    writeln!(out, "  ● = right colour, right place   ○ = right colour, wrong place\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'reveal' to give up\n")?;

    'games: loop {
        let mut session = GameSession::new(config.clone(), &mut *rng)?;
        let mut board: Vec<(Code, String)> = Vec::new();

        while !session.is_over() {
            let prompt = format!(
                "Guess {}/{}",
                session.rounds_used() + 1,
                session.max_rounds()
            );
            let Some(line) = read_line(input, out, &prompt)? else {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            };

            match line.to_lowercase().as_str() {
                "" => {}
                "quit" | "q" | "exit" => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                "new" => {
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue 'games;
                }
                "reveal" | "give up" => break,
                _ => match palette.parse_code(&line) {
                    Ok(guess) => match session.submit_guess(&guess) {
                        Ok(feedback) => {
                            let row = format!(
                                "{}  {}",
                                code_to_string(&guess, palette),
                                pegs_to_string(feedback, session.secret_length())
                            );
                            writeln!(out, "  {row}  ({feedback})")?;
                            board.push((guess, row));
                        }
                        Err(err @ MastermindError::LengthMismatch { .. }) => {
                            writeln!(out, "❌ {err}. Try again.")?;
                        }
                        Err(err) => return Err(err.into()),
                    },
                    Err(err) => writeln!(out, "❌ {err}. Try again.")?,
                },
            }
        }

        let secret = session.reveal_secret_string()?;
        match session.state() {
            GameState::Won => {
                writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
                writeln!(
                    out,
                    "{}",
                    "    🎉  C O D E   B R O K E N !  🎉    ".bright_green().bold()
                )?;
                writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
                let turns = session.rounds_used();
                writeln!(
                    out,
                    "\n  Solved in {} {}",
                    turns.to_string().bright_cyan().bold(),
                    if turns == 1 { "guess" } else { "guesses" }
                )?;
            }
            GameState::Lost => {
                writeln!(out, "\n❌ Out of guesses! The code was {}", secret.bold())?;
            }
            GameState::InProgress => {
                writeln!(out, "\n🏳  You gave up. The code was {}", secret.bold())?;
            }
        }

        if !board.is_empty() {
            writeln!(out, "\n  Board:")?;
            for (i, (_, row)) in board.iter().enumerate() {
                writeln!(out, "    {:>2}. {row}", i + 1)?;
            }
        }
        writeln!(out)?;

        match read_line(input, out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Labels of the first colours, repeated to the code length
fn example_guess(config: &GameConfig) -> String {
    let labels = config.palette.labels();
    let separator = if labels.iter().all(|l| l.chars().count() == 1) {
        ""
    } else {
        " "
    };

    labels
        .iter()
        .cycle()
        .take(config.secret_length)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
