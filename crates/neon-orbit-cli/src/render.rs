//! Terminal rendering of session snapshots
//!
//! Read-only: everything here takes a [`SessionView`] and prints it.

use chrono::{DateTime, Local, Utc};
use colored::{ColoredString, Colorize};
use neon_orbit::{Message, Profile, Screen, Sender, SessionView, Theme};

/// Accent color for the active theme
fn accent(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Neon => text.bright_magenta().bold(),
        Theme::Mono => text.white().bold(),
        Theme::Sunset => text.bright_yellow().bold(),
    }
}

/// Local wall-clock `HH:MM`
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

pub fn print_view(view: &SessionView<'_>) {
    println!();
    println!(
        "{} {} {}",
        accent("◎ Neon Orbit", view.theme),
        format!("[{}]", view.screen).dimmed(),
        format!("⚡ {}", view.energy).yellow()
    );

    match view.screen {
        Screen::Onboarding => {
            println!("Tell us about yourself to start browsing.");
            println!("  {}", "start <name> <age> <chat|dating|friends>".cyan());
        }
        Screen::Discover => {
            if let Some(me) = view.me {
                println!("{}", format!("Hi, {}. Goal: {}.", me.name, me.goal).dimmed());
            }
            match view.current_profile {
                Some(profile) => print_profile(profile, "signal nearby", view.theme),
                None => println!("{}", "No signal yet.".dimmed()),
            }
            println!("  {}", "skip · like · settings".cyan());
        }
        Screen::Match => {
            if let Some(profile) = view.current_match {
                println!("{}", accent("It's a match!", view.theme));
                print_profile(profile, "signal match", view.theme);
            }
            println!("  {}", "open · back · settings".cyan());
        }
        Screen::Chat => {
            if let Some(profile) = view.current_match {
                let status = if view.typing { "typing…" } else { "on air" };
                println!(
                    "{} {} {}",
                    profile.avatar,
                    accent(&profile.name, view.theme),
                    status.dimmed()
                );
            }
            for message in view.transcript {
                print_message(message);
            }
            println!("  {}", "say <text> · back · block · settings".cyan());
        }
        Screen::Settings => {
            println!(
                "Theme: {}   Mode: {}",
                view.theme.to_string().cyan(),
                view.mode.to_string().cyan()
            );
            println!(
                "  {}",
                "theme <neon|mono|sunset> · mode <safe|open> · reset · close".cyan()
            );
        }
    }
}

fn print_profile(profile: &Profile, meta: &str, theme: Theme) {
    println!(
        "  {}  {}  {}",
        profile.avatar,
        accent(&profile.name, theme),
        format!("{} • {}", profile.age, meta).dimmed()
    );
    println!("     {}", profile.desc);
    let tags: Vec<String> = profile.tags.iter().map(|t| format!("#{}", t)).collect();
    println!("     {}", tags.join(" ").blue());
}

pub fn print_message(message: &Message) {
    let time = format_time(message.ts).dimmed();
    match message.from {
        Sender::Me => println!("{:>40} {}", message.text.green(), time),
        Sender::Them => println!("{} {}", message.text, time),
    }
}

pub fn print_notice(text: &str) {
    println!("{} {}", "!".yellow().bold(), text.yellow());
}

pub fn print_error(text: &str) {
    println!("{} {}", "✗".red().bold(), text.red());
}

pub fn print_help() {
    println!("{}", "Commands:".bold());
    let rows = [
        ("start <name> <age> <goal>", "complete onboarding"),
        ("skip", "next candidate"),
        ("like", "spend energy, maybe match"),
        ("open", "open chat with your match"),
        ("say <text>", "send a message (plain text works in chat)"),
        ("back", "return to browsing"),
        ("block", "block the match and delete the chat"),
        ("settings / close", "open or close settings"),
        ("theme <t> / mode <m>", "change settings"),
        ("reset", "erase all local data"),
        ("status", "redraw the screen"),
        ("quit", "leave"),
    ];
    for (cmd, desc) in rows {
        println!("  {:<28} {}", cmd.cyan(), desc.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_time_is_hh_mm() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap();
        let formatted = format_time(ts);
        assert_eq!(formatted.len(), 5);
        assert_eq!(&formatted[2..3], ":");
        assert!(formatted
            .chars()
            .enumerate()
            .all(|(i, c)| i == 2 || c.is_ascii_digit()));
    }
}
