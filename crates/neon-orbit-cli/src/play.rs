//! Interactive loop
//!
//! Reads commands from stdin while delivering simulated replies as their
//! delays elapse.

use anyhow::{Context, Result};
use neon_orbit::{
    DomainError, Goal, KeyValueStore, LikeOutcome, RandomSource, SafetyMode, Screen, Session,
    Theme,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Duration, Instant};

use crate::render;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        name: String,
        age: Option<i64>,
        goal: Goal,
    },
    Skip,
    Like,
    Open,
    Say(String),
    Back,
    Block,
    Settings,
    Close,
    Theme(Theme),
    Mode(SafetyMode),
    Reset,
    Status,
    Help,
    Quit,
}

/// Parse one line. On the chat screen, unrecognized text is a message.
pub fn parse_command(line: &str, screen: Screen) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_lowercase().as_str() {
        "start" => {
            let mut args = rest.split_whitespace();
            let name = args.next().unwrap_or_default().to_string();
            let age = match args.next() {
                Some(age) => Some(
                    age.parse::<i64>()
                        .map_err(|_| format!("Age must be a number, got '{}'", age))?,
                ),
                None => None,
            };
            let goal = match args.next() {
                Some(goal) => goal.parse()?,
                None => Goal::default(),
            };
            Command::Start { name, age, goal }
        }
        "skip" => Command::Skip,
        "like" => Command::Like,
        "open" => Command::Open,
        "say" => Command::Say(rest.to_string()),
        "back" => Command::Back,
        "block" => Command::Block,
        "settings" => Command::Settings,
        "close" => Command::Close,
        "theme" => Command::Theme(rest.parse()?),
        "mode" => Command::Mode(rest.parse()?),
        "reset" => Command::Reset,
        "status" | "look" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ if screen == Screen::Chat => Command::Say(line.to_string()),
        _ => return Err(format!("Unknown command '{}'. Type 'help'.", head)),
    };

    Ok(Some(command))
}

/// Actions that ask for a yes/no first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirm {
    Block,
    Reset,
}

enum Flow {
    Continue,
    Quit,
}

pub async fn run<S: KeyValueStore, R: RandomSource>(session: &mut Session<S, R>) -> Result<()> {
    render::print_view(&session.view());
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut confirm: Option<Confirm> = None;

    loop {
        let due = session.next_reply_due();
        let wake = due.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };

                if let Some(action) = confirm.take() {
                    confirm_action(session, action, &line);
                    continue;
                }

                match handle_line(session, &line, &mut confirm) {
                    Flow::Continue => {}
                    Flow::Quit => break,
                }
            }
            () = sleep_until(wake), if due.is_some() => {
                deliver_replies(session);
            }
        }
    }

    Ok(())
}

fn deliver_replies<S: KeyValueStore, R: RandomSource>(session: &mut Session<S, R>) {
    let before = session.view().transcript.len();
    let delivered = session.deliver_due_replies(Instant::now());
    if delivered == 0 || session.screen() != Screen::Chat {
        return;
    }
    for message in session.view().transcript.iter().skip(before) {
        render::print_message(message);
    }
}

fn handle_line<S: KeyValueStore, R: RandomSource>(
    session: &mut Session<S, R>,
    line: &str,
    confirm: &mut Option<Confirm>,
) -> Flow {
    let command = match parse_command(line, session.screen()) {
        Ok(Some(command)) => command,
        Ok(None) => return Flow::Continue,
        Err(e) => {
            render::print_error(&e);
            return Flow::Continue;
        }
    };

    tracing::debug!("Command: {:?}", command);

    let result: Result<(), DomainError> = match command {
        Command::Start { name, age, goal } => session.start_onboarding(&name, age, goal),
        Command::Skip => session.skip(),
        Command::Like => session.like().map(|outcome| match outcome {
            LikeOutcome::OutOfEnergy => {
                render::print_notice("Out of energy. Come back later.")
            }
            LikeOutcome::NoMatch => render::print_notice("No match this time."),
            LikeOutcome::Matched => {}
        }),
        Command::Open => session.open_chat(),
        Command::Say(text) => session.send_message(&text).map(|_| ()),
        Command::Back => session.go_back_to_discover(),
        Command::Block => {
            if session.screen() != Screen::Chat {
                Err(DomainError::invalid_action("block", session.screen()))
            } else {
                *confirm = Some(Confirm::Block);
                render::print_notice("Block and delete this chat? [y/N]");
                return Flow::Continue;
            }
        }
        Command::Settings => session.open_settings(),
        Command::Close => session.close_settings(),
        Command::Theme(theme) => session.set_theme(theme),
        Command::Mode(mode) => session.set_mode(mode),
        Command::Reset => {
            *confirm = Some(Confirm::Reset);
            render::print_notice("Erase all demo data? [y/N]");
            return Flow::Continue;
        }
        Command::Status => Ok(()),
        Command::Help => {
            render::print_help();
            return Flow::Continue;
        }
        Command::Quit => return Flow::Quit,
    };

    match result {
        Ok(()) => render::print_view(&session.view()),
        Err(DomainError::Validation(msg)) => render::print_error(&msg),
        Err(e) => render::print_error(&e.to_string()),
    }
    Flow::Continue
}

fn confirm_action<S: KeyValueStore, R: RandomSource>(
    session: &mut Session<S, R>,
    action: Confirm,
    answer: &str,
) {
    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        render::print_notice("Cancelled.");
        return;
    }

    let result = match action {
        Confirm::Block => session.block_current_match(),
        Confirm::Reset => {
            session.reset_all();
            Ok(())
        }
    };

    match result {
        Ok(()) => render::print_view(&session.view()),
        Err(e) => render::print_error(&e.to_string()),
    }
}
