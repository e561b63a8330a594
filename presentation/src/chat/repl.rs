//! REPL (Read-Eval-Print Loop) for conversational content generation

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::GenerationSpinner;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use wayfarer_application::{
    ContentGateway, ConversationLogger, GenerationParams, RunGenerationError, RunGenerationInput,
    RunGenerationUseCase,
};
use wayfarer_domain::{ContentCategory, Conversation, Temperature};

/// Interactive content-generation REPL
///
/// Owns the session's [`Conversation`]; a new request is only issued in
/// direct response to a line of input, and the loop awaits each round before
/// reading the next, so exactly one request is ever in flight.
pub struct ChatRepl {
    use_case: RunGenerationUseCase,
    conversation: Conversation,
    temperature: Temperature,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(gateway: Arc<dyn ContentGateway>, params: GenerationParams) -> Self {
        Self {
            use_case: RunGenerationUseCase::new(gateway),
            conversation: Conversation::new(params.category),
            temperature: params.temperature,
            show_progress: true,
            history_file: None,
        }
    }

    /// Attach a conversation transcript logger
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.use_case = self.use_case.with_conversation_logger(logger);
        self
    }

    /// Set whether to show the in-flight spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set the readline history file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Empty input never reaches the core
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_request(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Wayfarer - Travel Content Chat       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Category: {} ({})",
            self.conversation.category(),
            self.conversation.category().input_hint()
        );
        println!("Temperature: {}", self.temperature);
        println!();
        println!("The first request is wrapped with the category's instruction;");
        println!("follow-ups continue the conversation (\"plan a 3-day trip around that\").");
        println!();
        println!("Commands:");
        println!("  /category [NAME]   - Show or switch the content category");
        println!("  /temperature VALUE - Set the sampling temperature (0..=1)");
        println!("  /history           - Re-display the conversation");
        println!("  /reset             - Clear the conversation");
        println!("  /help              - Show this help");
        println!("  /quit              - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.next();

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                self.print_welcome();
                false
            }
            "/category" => {
                match arg {
                    Some(value) => match value.parse::<ContentCategory>() {
                        Ok(category) => {
                            self.conversation.set_category(category);
                            if self.conversation.is_first_turn() {
                                println!("Category set to {}", category);
                                println!("  {}", category.input_hint().dimmed());
                            } else {
                                // The template only wraps the first turn
                                println!(
                                    "Category set to {} (takes effect after /reset)",
                                    category
                                );
                            }
                        }
                        Err(e) => println!("{}", e),
                    },
                    None => {
                        println!();
                        println!("Current category: {}", self.conversation.category());
                        println!("Available:");
                        for category in ContentCategory::ALL {
                            let marker = if category == self.conversation.category() {
                                "*"
                            } else {
                                " "
                            };
                            println!(
                                "  {} {:<32} {}",
                                marker,
                                category.as_str(),
                                category.input_hint().dimmed()
                            );
                        }
                        println!();
                    }
                }
                false
            }
            "/temperature" | "/temp" => {
                match arg.and_then(|v| v.parse::<f32>().ok()) {
                    Some(value) => match Temperature::new(value) {
                        Ok(temperature) => {
                            self.temperature = temperature;
                            println!("Temperature set to {}", temperature);
                        }
                        Err(e) => println!("{}", e),
                    },
                    None => println!("Usage: /temperature VALUE (e.g. /temperature 0.7)"),
                }
                false
            }
            "/history" => {
                println!();
                println!("{}", ConsoleFormatter::format_history(&self.conversation));
                false
            }
            "/reset" => {
                self.conversation.reset();
                println!("Conversation cleared.");
                false
            }
            _ => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_request(&mut self, line: &str) {
        println!();

        let spinner = self.show_progress.then(GenerationSpinner::start);

        let input = RunGenerationInput::new(line, self.temperature);
        let result = self
            .use_case
            .execute(&mut self.conversation, input)
            .await;

        if let Some(spinner) = spinner {
            spinner.finish();
        }

        let reply = match result {
            Ok(text) => text,
            Err(RunGenerationError::GatewayError(e)) => {
                // Failures are shown as ordinary replies and recorded in the
                // transcript, so the next turn still has the full exchange.
                let formatted = ConsoleFormatter::format_generation_failure(&e);
                self.conversation.push_round(line, &formatted);
                formatted
            }
        };

        println!("{}", ConsoleFormatter::format_reply(&reply));
        println!();
    }

    #[cfg(test)]
    fn conversation(&self) -> &Conversation {
        &self.conversation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wayfarer_application::GatewayError;
    use wayfarer_domain::GenerationRequest;

    struct FixedGateway(Result<&'static str, ()>);

    #[async_trait]
    impl ContentGateway for FixedGateway {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, GatewayError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(GatewayError::HttpStatus {
                    status: 500,
                    reason: "Internal Server Error".to_string(),
                }),
            }
        }
    }

    fn repl_with(gateway: FixedGateway) -> ChatRepl {
        ChatRepl::new(Arc::new(gateway), GenerationParams::default())
    }

    #[test]
    fn test_quit_commands_exit() {
        let mut repl = repl_with(FixedGateway(Ok("hi")));
        assert!(repl.handle_command("/quit"));
        assert!(repl.handle_command("/exit"));
        assert!(repl.handle_command("/q"));
        assert!(!repl.handle_command("/help"));
        assert!(!repl.handle_command("/bogus"));
    }

    #[test]
    fn test_category_command_switches_selection() {
        let mut repl = repl_with(FixedGateway(Ok("hi")));
        assert!(!repl.handle_command("/category gear-checklist"));
        assert_eq!(
            repl.conversation().category(),
            ContentCategory::GearChecklist
        );

        // Unknown names leave the selection unchanged
        assert!(!repl.handle_command("/category weather"));
        assert_eq!(
            repl.conversation().category(),
            ContentCategory::GearChecklist
        );
    }

    #[test]
    fn test_temperature_command_validates_range() {
        let mut repl = repl_with(FixedGateway(Ok("hi")));
        repl.handle_command("/temperature 0.2");
        assert_eq!(repl.temperature.value(), 0.2);

        repl.handle_command("/temperature 1.8");
        assert_eq!(repl.temperature.value(), 0.2);

        repl.handle_command("/temp 0.9");
        assert_eq!(repl.temperature.value(), 0.9);
    }

    #[tokio::test]
    async fn test_successful_round_is_recorded() {
        let mut repl = repl_with(FixedGateway(Ok("A fine plan.")));
        repl.show_progress = false;

        repl.process_request("3 days in Chengdu").await;

        let turns = repl.conversation().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].content, "3 days in Chengdu");
        assert_eq!(turns[1].content, "A fine plan.");
    }

    #[tokio::test]
    async fn test_failed_round_records_error_as_reply() {
        let mut repl = repl_with(FixedGateway(Err(())));
        repl.show_progress = false;

        repl.process_request("3 days in Chengdu").await;

        let turns = repl.conversation().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].content, "3 days in Chengdu");
        assert!(
            turns[1]
                .content
                .starts_with("\u{274c} content generation failed:")
        );
        assert!(turns[1].content.contains("500"));
    }

    #[tokio::test]
    async fn test_reset_then_new_first_turn() {
        let mut repl = repl_with(FixedGateway(Ok("ok")));
        repl.show_progress = false;

        repl.process_request("first").await;
        assert!(!repl.conversation().is_first_turn());

        repl.handle_command("/reset");
        assert!(repl.conversation().is_first_turn());
    }
}
