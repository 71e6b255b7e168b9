//! Chat session UI components.

use crate::conversation::{Conversation, script};
use crate::quote::{MODES, Mode, format_rand};
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// Shown in the quote panel until real line items arrive.
const PLACEHOLDER_ROWS: &[(&str, &str)] = &[
    ("Example Product 1", "R1,799"),
    ("Example Product 2", "R6,999"),
];

pub fn print_header() {
    println!(
        "{} {} - Audio Quote Assistant",
        Style::header("quo"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

/// One line listing every mode with the active one highlighted.
pub fn print_mode_bar(current: Mode) {
    let rendered: Vec<String> = MODES
        .iter()
        .map(|(mode, _)| {
            if *mode == current {
                Style::value(mode)
            } else {
                Style::secondary(mode)
            }
        })
        .collect();
    println!("  {}", rendered.join("  "));
    println!("  {}", Style::hint("Switch with /mode <name>"));
    println!();
}

pub fn print_ai_message(text: &str) {
    println!("{}", Style::ai(text));
    println!();
}

/// The quote panel: line items with per-line totals and the subtotal.
/// Placeholder rows stand in until the service returns items; the
/// subtotal always reflects the real item list.
pub fn print_quote(conversation: &Conversation) {
    println!("{}", Style::header("Your Quote"));

    if conversation.items().is_empty() {
        for (name, price) in PLACEHOLDER_ROWS {
            println!("  {}  {}", Style::secondary(name), Style::secondary(price));
        }
    } else {
        for item in conversation.items() {
            println!(
                "  {} {}  {}",
                Style::value(&item.name),
                Style::secondary(format!("(x{})", item.qty)),
                Style::money(format_rand(item.line_total()))
            );
        }
    }

    println!(
        "  {}  {}",
        Style::label("Subtotal"),
        Style::money(format_rand(conversation.subtotal()))
    );
    println!();
}

pub fn print_config(config: &SessionConfig, conversation: &Conversation) {
    let answered = conversation.step().min(script::QUESTIONS.len());

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::label("mode"),
        Style::value(conversation.mode())
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}   {}",
        Style::label("progress"),
        Style::value(format!(
            "{answered}/{} questions answered",
            script::QUESTIONS.len()
        ))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/mode"),
        Style::secondary("Switch customer mode")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Exit the session")
    );
    println!(
        "  {}   {}",
        Style::command("/quote"),
        Style::secondary("Show the current quote")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}
