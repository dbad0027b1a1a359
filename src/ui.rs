use colored::*;
use termimad::MadSkin;

use crate::types::Style;

pub fn init_logging() {
    // Internal logs are opt-in via RUST_LOG. UI output remains separate.
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        builder.filter_level(log::LevelFilter::Warn);
    }
    let _ = builder.try_init();
}

pub fn header(provider: &str, model: &str, style: Style) {
    println!(
        "{} {} | {} | {}",
        ">>".bold(),
        "ghostwriter".bold(),
        format!("{provider}/{model}").cyan(),
        format!("style: {style}").dimmed()
    );
}

pub fn hint() {
    println!(
        "{}",
        "Commands: /style <name>, /styles, /copy, /c (clear), /q (quit)".dimmed()
    );
}

pub fn generating() {
    println!("{}", "● Creating your lyrics...".dimmed());
}

/// Render the generated lyrics as Markdown.
pub fn lyrics(text: &str) {
    let skin = MadSkin::default();
    println!();
    skin.print_text(text);
}

pub fn error(msg: &str) {
    eprintln!("\n{} {}", "✗".red().bold(), msg.red());
}

pub fn copied() {
    println!("{} {}", "✓".green().bold(), "Copied to clipboard".green());
}

pub fn nothing_to_copy() {
    println!("{}", "● Nothing to copy yet".dimmed());
}

pub fn style_selected(style: Style) {
    println!("{}", format!("● Style set to {style}").dimmed());
}

pub fn styles(current: Style) {
    println!("{}", "Available styles:".dimmed());
    for style in Style::ALL {
        if style == current {
            println!("  {} {}", "●".cyan(), style.to_string().cyan());
        } else {
            println!("  {} {style}", "○".dimmed());
        }
    }
}

pub fn cleared() {
    println!("{}", "● Result cleared".dimmed());
}

pub fn goodbye() {
    println!("\n{}", "Goodbye!".dimmed());
}
