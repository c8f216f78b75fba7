//! REPL (Read-Eval-Print Loop) for interactive proposals
//!
//! The council, and with it the response cache, lives for the whole
//! session, so repeating a proposal within the TTL costs no API calls.

use crate::ConsoleFormatter;
use crate::output::formatter::{OutputFormatter, ReportContext};
use crate::progress::reporter::progress_for_stderr;
use magi_application::{ModelClient, RunConsensusUseCase};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::{Path, PathBuf};
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Interactive chat REPL
pub struct ChatRepl<C: ModelClient + 'static> {
    council: RunConsensusUseCase<C>,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl<C: ModelClient + 'static> ChatRepl<C> {
    /// Create a new ChatRepl around a configured council
    pub fn new(council: RunConsensusUseCase<C>) -> Self {
        Self {
            council,
            show_progress: true,
            history_path: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Persist line history to this file
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_path else {
            return editor;
        };

        if let Err(e) = ensure_parent_dir(path) {
            warn!("Cannot create history directory for {}: {}", path.display(), e);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled ({}): {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("MAGI".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(buffer) => {
                    if self.handle_line(&buffer).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Dispatch one input line. Returns true if should exit.
    ///
    /// Commands are matched on the trimmed line; proposals pass through
    /// verbatim so they share cache keys with single-shot runs.
    async fn handle_line(&mut self, buffer: &str) -> bool {
        let line = buffer.trim();
        if line.is_empty() {
            return false;
        }
        if line.starts_with('/') {
            return self.handle_command(line);
        }
        self.process_proposal(buffer).await;
        false
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           MAGI SYSTEM - Chat Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model_label());
        println!();
        println!("Type a proposal and press Enter. The council votes on it.");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /model    - Show the selected model");
        println!("  /cache    - Show response cache status");
        println!("  /clear    - Drop all cached verdicts");
        println!("  /quit     - Exit chat");
        println!();
    }

    fn model_label(&self) -> &str {
        self.council.model_name().unwrap_or("NOT_CONFIGURED")
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /model           - Show the selected model");
                println!("  /cache           - Show response cache status");
                println!("  /clear           - Drop all cached verdicts");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/model" => {
                println!("Model: {}", self.model_label());
                false
            }
            "/cache" => {
                println!(
                    "Cache: {} live entries (ttl {}s)",
                    self.council.live_cache_entries(),
                    self.council.cache().ttl().as_secs()
                );
                false
            }
            "/clear" => {
                self.council.clear_cache();
                println!("Cache cleared.");
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_proposal(&mut self, proposal: &str) {
        println!();

        let result = if self.show_progress {
            let progress = progress_for_stderr();
            self.council
                .execute_with_progress(proposal, progress.as_ref())
                .await
        } else {
            self.council.execute(proposal).await
        };

        match result {
            Ok(result) => {
                let context = ReportContext {
                    model: self.council.model_name(),
                    cache_entries: self.council.live_cache_entries(),
                };
                println!("{}", ConsoleFormatter::format(&result, &context));
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter.format_error(&e.to_string()));
            }
        }
        println!();
    }
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
