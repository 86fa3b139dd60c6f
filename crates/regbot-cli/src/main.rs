use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use regbot_core::{Category, ChatMessage, ChatSession, MessageRole};
use regbot_gateway::SupabaseGateway;
use regbot_infrastructure::JsonHistoryRepository;

/// Command-line arguments for the regbot REPL.
#[derive(Parser)]
#[command(name = "regbot")]
#[command(about = "Regbot - chat-style lookup for company regulations", long_about = None)]
struct Cli {
    /// Supabase project URL (overrides secret.json and environment)
    #[arg(long, requires = "key")]
    url: Option<String>,

    /// Supabase anon key (overrides secret.json and environment)
    #[arg(long, requires = "url")]
    key: Option<String>,

    /// Directory for the persisted chat transcript
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/categories".to_string(),
                "/category".to_string(),
                "/quit".to_string(),
            ],
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

/// The main entry point for the regbot REPL application.
///
/// Sets up a rustyline-based REPL that:
/// 1. Resolves Supabase credentials (flags > secret.json > environment)
/// 2. Restores the persisted conversation and fetches the category list
/// 3. Provides command completion for /categories, /category, and /quit
/// 4. Feeds every other line into the chat session as a lookup
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // ===== Backend Initialization =====
    let gateway = match (cli.url, cli.key) {
        (Some(url), Some(key)) => SupabaseGateway::new(url, key),
        _ => SupabaseGateway::try_from_env().context(
            "Supabase credentials missing: pass --url/--key, create ~/.config/regbot/secret.json, or set SUPABASE_URL/SUPABASE_ANON_KEY",
        )?,
    };
    let history = match cli.data_dir {
        Some(dir) => JsonHistoryRepository::new(dir)?,
        None => JsonHistoryRepository::default_location()?,
    };
    let session = Arc::new(ChatSession::open(Arc::new(gateway), Arc::new(history)).await);

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Regbot ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/categories' to list categories, '/category <number|name>' to pick one, or 'quit' to exit."
            .bright_black()
    );
    println!();

    // Replay the persisted conversation before taking new input
    let restored = session.messages().await;
    if !restored.is_empty() {
        println!("{}", "--- previous conversation ---".bright_black());
        for message in &restored {
            render_message(message);
        }
        println!("{}", "-----------------------------".bright_black());
        println!();
    }

    let categories = session.load_categories().await;
    if categories.is_empty() {
        println!(
            "{}",
            "No categories available. Check your Supabase connection.".yellow()
        );
    } else {
        print_categories(&categories);
    }

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" || trimmed == "/quit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                if trimmed.starts_with('/') {
                    if trimmed == "/categories" {
                        print_categories(&session.categories().await);
                    } else if let Some(rest) = trimmed.strip_prefix("/category ") {
                        let name = rest.trim();
                        match resolve_category(&session.categories().await, name) {
                            Some(category) => {
                                println!("{}", format!("Category: {}", category.name).green());
                                for message in session.select_category(&category).await {
                                    render_message(&message);
                                }
                            }
                            None => {
                                println!("{}", format!("Unknown category: {}", name).yellow());
                            }
                        }
                    } else if trimmed == "/category" {
                        println!("{}", "Usage: /category <number|name>".yellow());
                    } else {
                        println!("{}", "Unknown command".bright_black());
                    }
                    continue;
                }

                // The raw line goes to the session; matching is verbatim
                for message in session.submit_input(&line).await {
                    render_message(&message);
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
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

/// Prints one transcript message with role-specific coloring.
fn render_message(message: &ChatMessage) {
    match message.role {
        MessageRole::User => println!("{}", format!("> {}", message.content).green()),
        MessageRole::Bot => {
            for line in message.content.lines() {
                println!("{}", line.bright_blue());
            }
        }
    }
}

/// Prints the numbered category list.
fn print_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("{}", "No categories loaded.".yellow());
        return;
    }

    println!("{}", "Categories:".bright_magenta());
    for (index, category) in categories.iter().enumerate() {
        println!("  {}", format!("{}. {}", index + 1, category.name).cyan());
    }
    println!(
        "{}",
        "Pick one with '/category <number|name>'.".bright_black()
    );
}

/// Resolves a category by 1-based list number or case-insensitive name.
fn resolve_category(categories: &[Category], input: &str) -> Option<Category> {
    if let Ok(number) = input.parse::<usize>() {
        if number == 0 {
            return None;
        }
        return categories.get(number - 1).cloned();
    }

    let input_lower = input.to_lowercase();
    categories
        .iter()
        .find(|category| category.name.to_lowercase() == input_lower)
        .cloned()
}
