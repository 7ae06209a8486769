use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;

use tendero_core::Assistant;

/// Exit words, matching the assistant's bilingual phrasing.
const EXIT_WORDS: &[&str] = &["quit", "salir", "exit"];

/// The main entry point for the Tendero readline REPL.
///
/// Sets up a rustyline-based loop that:
/// 1. Reads one message per line (free text or a literal `btn_...` token)
/// 2. Hands it to the assistant under a fixed user id
/// 3. Prints the reply text and enumerates the follow-up buttons
/// 4. Exits on quit/salir/exit or Ctrl-D
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut assistant = Assistant::with_defaults();
    let user_id = "cli-user";

    let mut rl = DefaultEditor::new()?;

    println!("{}", "=== Tendero ===".bright_magenta().bold());
    println!(
        "{}",
        "Prueba comandos como: 'laptop', 'agregar al carrito', 'carrito'. Escribe 'salir' para terminar."
            .bright_black()
    );
    println!();

    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if EXIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
                    println!("{}", "¡Hasta luego!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let reply = assistant.handle_message(user_id, trimmed);

                for line in reply.text.lines() {
                    println!("{}", line.bright_blue());
                }

                if !reply.buttons.is_empty() {
                    println!();
                    println!("{}", "Opciones disponibles:".bright_black());
                    for (i, button) in reply.buttons.iter().enumerate() {
                        println!(
                            "  {}",
                            format!("{}. {} ({})", i + 1, button.label, button.callback).cyan()
                        );
                    }
                }
                println!();
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detectado. Escribe 'salir' para terminar.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "¡Hasta luego!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}
