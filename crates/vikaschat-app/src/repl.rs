use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

use crate::chat::{ChatSession, HttpTransport, SubmitOutcome};

/// Terminal chat client against a running widget server. Same session
/// semantics as the browser page: one submission at a time, apology on
/// failure, history kept in order.
pub async fn run_repl(endpoint: &str) -> Result<()> {
    let transport = Arc::new(HttpTransport::new(endpoint));
    let mut session = ChatSession::new(transport);

    println!("{}", "🙏 VIKAS CSC - AI Assistant".bright_cyan().bold());
    println!("{}", format!("Chat endpoint: {}", endpoint).bright_black());
    println!("{}", "Type 'exit' or 'quit' to exit\n".bright_black());

    // Greeting seeded by the session
    if let Some(greeting) = session.messages().first() {
        println!("{} {}\n", "Assistant:".bright_blue().bold(), greeting.content);
    }

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line == "exit" || line == "quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }

                if session.submit(line).await == SubmitOutcome::Ignored {
                    continue;
                }

                rl.add_history_entry(line)?;

                if let Some(reply) = session.messages().last() {
                    println!("\n{} {}\n", "Assistant:".bright_blue().bold(), reply.content);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}
