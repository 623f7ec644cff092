//! Chat mode UI components.

use crate::session::SessionContext;
use crate::ui::Style;

use super::session::SessionConfig;
use super::transcript::{Speaker, Turn};

pub fn print_header(context: &SessionContext) {
    println!("{}", Style::header(format!("Bienvenue, {}", context.name())));
    println!(
        "{}",
        Style::secondary(format!("Pose-moi tes questions sur {}", context.subject()))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Au revoir !"));
}

pub fn print_turns(turns: &[Turn]) {
    for turn in turns {
        let label = match turn.speaker {
            Speaker::User => Style::user(turn.speaker.label()),
            Speaker::Assistant => Style::assistant(turn.speaker.label()),
        };
        println!("{label} {}", turn.text);
    }
    if !turns.is_empty() {
        println!();
    }
}

pub fn print_config(config: &SessionConfig, context: &SessionContext) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}       {}",
        Style::label("name"),
        Style::value(context.name())
    );
    println!(
        "  {}    {}",
        Style::label("subject"),
        Style::value(context.subject())
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}   {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}     {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}  {}",
        Style::command("/history"),
        Style::secondary("Show the conversation so far")
    );
    println!(
        "  {}     {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
