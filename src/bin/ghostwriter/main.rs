use anyhow::Result;
use colored::*;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use ghostwriter::providers::create_generator;
use ghostwriter::ui;
use ghostwriter::{ApiConfig, AppConfig, GenerationController, Style, SystemClipboard};

mod cli;
use cli::{CliCommand, parse_input};

#[tokio::main]
async fn main() -> Result<()> {
    ui::init_logging();

    let file = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("ignoring .ghostwriter/config.json: {e}");
        AppConfig::default()
    });
    let config = ApiConfig::from_env_with(&file);
    let mut style = file
        .default_style
        .as_deref()
        .and_then(|s| s.parse::<Style>().ok())
        .unwrap_or(Style::Trap);

    let generator = create_generator(&config)?;
    let provider_name = generator.name().to_string();
    let model = generator.model().to_string();

    let mut controller =
        GenerationController::new(generator, Box::new(SystemClipboard::new()));
    let mut rl = DefaultEditor::new()?;

    ui::header(&provider_name, &model, style);
    ui::hint();

    loop {
        let readline = rl.readline(&format!("{} ", "❯".purple().bold()));

        match readline {
            Ok(line) => {
                let Some(command) = parse_input(&line) else {
                    continue;
                };

                let _ = rl.add_history_entry(&line);

                match command {
                    CliCommand::Quit => break,
                    CliCommand::Clear => {
                        controller.clear();
                        ui::cleared();
                    }
                    CliCommand::Styles => ui::styles(style),
                    CliCommand::Style(name) => match name.parse::<Style>() {
                        Ok(selected) => {
                            style = selected;
                            ui::style_selected(style);
                        }
                        Err(e) => ui::error(&e.to_string()),
                    },
                    CliCommand::Copy => match controller.copy_result() {
                        Ok(true) => ui::copied(),
                        Ok(false) => ui::nothing_to_copy(),
                        Err(e) => ui::error(&e.to_string()),
                    },
                    CliCommand::Topic(topic) => {
                        ui::generating();
                        controller.submit(&topic, style).await;

                        if let Some(err) = controller.error() {
                            ui::error(err);
                        } else if let Some(text) = controller.lyrics() {
                            ui::lyrics(text);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                ui::goodbye();
                break;
            }
            Err(e) => {
                eprintln!("Input error: {e:?}");
                break;
            }
        }
    }

    Ok(())
}
