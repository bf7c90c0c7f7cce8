use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing_subscriber::EnvFilter;

use folio_core::repo::{RepositoryFeed, RepositoryRecord};
use folio_core::session::{Author, ConversationSession, SubmitOutcome};
use folio_interaction::persona::{GREETING, PERSONA_CONTEXT};
use folio_interaction::{CompletionClient, GeminiClient, GithubSource};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec!["/repos".to_string(), "/reset".to_string()],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn print_repositories(records: &[RepositoryRecord]) {
    if records.is_empty() {
        println!("{}", "No public repositories to show.".bright_black());
        return;
    }

    println!("{}", "Recent repositories:".bright_magenta());
    for record in records {
        let language = record.primary_language.as_deref().unwrap_or("-");
        println!(
            "  {} {} {}",
            record.name.bright_white(),
            format!("[{language}, {} stars]", record.star_count).bright_black(),
            record.url.bright_blue(),
        );
        if let Some(description) = &record.description {
            println!("    {}", description.bright_black());
        }
    }
}

fn print_assistant(text: &str) {
    for line in text.lines() {
        println!("{}", line.bright_blue());
    }
    println!();
}

/// The main entry point for the Folio portfolio-assistant REPL.
///
/// Sets up a rustyline-based chat loop that:
/// 1. Loads the one-shot repository feed and prints it
/// 2. Seeds a conversation session with the assistant greeting
/// 3. Submits each line to the session and prints the reply
/// 4. Handles /repos, /reset, and quit/exit commands
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ===== Backend Initialization =====
    let backend = GeminiClient::from_env().with_system_instruction(PERSONA_CONTEXT);
    let client = CompletionClient::new(backend);
    let session = ConversationSession::new(GREETING);
    let feed = RepositoryFeed::new(GithubSource::new());

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Folio ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/repos' to list repositories, '/reset' to start over, or 'quit' to exit."
            .bright_black()
    );
    println!();

    // One fetch per run; the feed settles and /repos replays the result.
    print_repositories(&feed.load().await);
    println!();
    print_assistant(GREETING);

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                if trimmed == "/repos" {
                    print_repositories(&feed.load().await);
                    println!();
                    continue;
                }

                if trimmed == "/reset" {
                    session.reset().await;
                    print_assistant(GREETING);
                    continue;
                }

                // Display user input in green
                println!("{}", format!("> {trimmed}").green());
                println!("{}", "Thinking...".bright_black());

                match session.submit(trimmed, &client).await {
                    SubmitOutcome::Accepted => {
                        let turns = session.transcript().await;
                        if let Some(turn) =
                            turns.iter().rev().find(|t| t.author == Author::Assistant)
                        {
                            print_assistant(&turn.text);
                        }
                    }
                    SubmitOutcome::Ignored => {
                        println!("{}", "One question at a time, please.".bright_black());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
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
