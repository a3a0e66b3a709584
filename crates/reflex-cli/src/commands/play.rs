//! Play command — interactive terminal round
//!
//! A reader thread forwards stdin lines over a channel; the main thread owns
//! the game and runs a fixed-timestep frame loop, so all state changes
//! happen on one thread.

use super::ConfigArgs;
use crate::board_view::{self, TracePresenter};
use anyhow::{Context, Result};
use reflex_core::{ReflexError, TargetId};
use reflex_game::{Cell, GameLoop, GridPicker, Outcome, Picker, Session, TextStatus};
use reflex_runtime::{GameClock, GameEvent};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

const FRAME_SLEEP: Duration = Duration::from_millis(8);

/// A line of player input
#[derive(Debug, PartialEq, Eq)]
pub enum InputCommand {
    Click(Cell),
    Reset,
    Quit,
    Help,
}

pub fn parse_command(line: &str) -> Result<InputCommand, ReflexError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "r" | "reset" => Ok(InputCommand::Reset),
        "q" | "quit" | "exit" => Ok(InputCommand::Quit),
        "h" | "help" | "?" => Ok(InputCommand::Help),
        other => other.parse().map(InputCommand::Click),
    }
}

fn print_help() {
    println!("Controls:");
    println!("  b3 / 2 3  - Click a cell (letter column or number, then row)");
    println!("  r         - Restart the round");
    println!("  q         - Quit");
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// State of the input channel after draining it
#[derive(Debug, PartialEq, Eq)]
enum InputStatus {
    Open,
    /// The reader hung up (stdin EOF); everything it sent has been queued
    Closed,
    Quit,
}

/// Queue every pending input line as game events
fn drain_input(
    input: &Receiver<String>,
    game: &mut GameLoop,
    picker: &dyn Picker,
) -> InputStatus {
    loop {
        let line = match input.try_recv() {
            Ok(line) => line,
            Err(TryRecvError::Empty) => return InputStatus::Open,
            Err(TryRecvError::Disconnected) => return InputStatus::Closed,
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(InputCommand::Click(cell)) => {
                let picked: Option<TargetId> = picker.pick(game.session().board().grid(), cell);
                game.push(GameEvent::Click(picked));
            }
            Ok(InputCommand::Reset) => game.push(GameEvent::Reset),
            Ok(InputCommand::Quit) => return InputStatus::Quit,
            Ok(InputCommand::Help) => print_help(),
            Err(e) => println!("{e} (type 'h' for help)"),
        }
    }
}

/// With stdin gone nobody can restart or quit, so stop once the round ends
fn keep_running(input_open: bool, is_over: bool) -> bool {
    input_open || !is_over
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let config = args.resolve()?;
    let columns = config.grid_columns;

    let session = Session::new(config)
        .context("Failed to start session")?
        .with_presenter(TracePresenter::new(columns))
        .with_status(TextStatus::new(io::stdout()));
    let mut game = GameLoop::new(session);
    let picker = GridPicker;

    print_help();
    println!();
    print!("{}", board_view::render(game.session().board()));

    let input = spawn_stdin_reader();
    let mut clock = GameClock::new();

    let mut input_open = true;
    loop {
        if input_open {
            match drain_input(&input, &mut game, &picker) {
                InputStatus::Open => {}
                InputStatus::Closed => {
                    tracing::debug!("stdin closed; playing the round out");
                    input_open = false;
                }
                InputStatus::Quit => break,
            }
        }

        clock.tick();
        let mut redraw = false;
        while clock.should_fixed_update() {
            let outcomes = game.step(clock.fixed_timestep);
            for outcome in &outcomes {
                match outcome {
                    Outcome::Activated(_) | Outcome::Hit(_) | Outcome::Reset => redraw = true,
                    Outcome::Ended => {
                        println!("Time's up! Final score: {}", game.session().snapshot().score);
                        println!("Type 'r' to play again or 'q' to quit.");
                    }
                    _ => {}
                }
            }
            clock.consume_fixed_step();
        }

        if redraw {
            print!("{}", board_view::render(game.session().board()));
        }
        if !keep_running(input_open, game.session().is_over()) {
            break;
        }
        thread::sleep(FRAME_SLEEP);
    }

    let summary = game.session().summary();
    println!(
        "Score {} ({} hits, {} misses, {} spawned)",
        summary.score, summary.hits, summary.misses, summary.spawns
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("b3").unwrap(), InputCommand::Click(Cell::new(1, 2)));
        assert_eq!(parse_command(" 1 1 ").unwrap(), InputCommand::Click(Cell::new(0, 0)));
        assert_eq!(parse_command("R").unwrap(), InputCommand::Reset);
        assert_eq!(parse_command("quit").unwrap(), InputCommand::Quit);
        assert_eq!(parse_command("?").unwrap(), InputCommand::Help);
    }

    fn game() -> GameLoop {
        let config = reflex_core::GameConfig {
            seed: Some(4),
            ..reflex_core::GameConfig::default()
        };
        GameLoop::new(Session::new(config).unwrap())
    }

    #[test]
    fn closed_input_still_queues_sent_lines() {
        let (tx, rx) = mpsc::channel();
        tx.send("b3".to_string()).unwrap();
        tx.send("".to_string()).unwrap();
        drop(tx);

        let mut game = game();
        assert_eq!(drain_input(&rx, &mut game, &GridPicker), InputStatus::Closed);
        // The queued click is applied on the next step
        assert_eq!(game.step(Duration::ZERO), vec![Outcome::Miss]);
    }

    #[test]
    fn quit_stops_draining() {
        let (tx, rx) = mpsc::channel();
        tx.send("q".to_string()).unwrap();
        tx.send("b3".to_string()).unwrap();

        let mut game = game();
        assert_eq!(drain_input(&rx, &mut game, &GridPicker), InputStatus::Quit);
        assert!(game.step(Duration::ZERO).is_empty());
    }

    #[test]
    fn round_plays_out_after_stdin_closes() {
        let mut game = game();
        assert!(keep_running(false, game.session().is_over()));

        // Timers keep firing without input until the clock runs out
        let mut frames = 0;
        while keep_running(false, game.session().is_over()) {
            game.step(Duration::from_millis(100));
            frames += 1;
        }
        assert_eq!(frames, 300);
        assert!(game.session().is_over());
        assert!(keep_running(true, true));
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(matches!(parse_command("jump"), Err(ReflexError::InvalidInput(_))));
    }
}
