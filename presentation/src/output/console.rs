//! Console output formatter for conversation rounds

use colored::Colorize;
use wayfarer_application::GatewayError;
use wayfarer_domain::{Conversation, Role};

/// Formats replies and transcripts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a generated reply for display
    pub fn format_reply(reply: &str) -> String {
        format!("{}\n{}", "Assistant:".green().bold(), reply)
    }

    /// Render a gateway failure as ordinary reply text.
    ///
    /// This is the only place the typed error is collapsed into a display
    /// string. The driver records it as the assistant's reply, so a failed
    /// round still shows up in the transcript like any other answer.
    pub fn format_generation_failure(error: &GatewayError) -> String {
        format!("\u{274c} content generation failed: {error}")
    }

    /// Format the full transcript for re-display
    pub fn format_history(conversation: &Conversation) -> String {
        if conversation.is_first_turn() {
            return "No conversation yet.".to_string();
        }

        let mut output = String::new();
        for turn in conversation.turns() {
            match turn.role {
                Role::User => {
                    output.push_str(&format!("{} {}\n", "You:".cyan().bold(), turn.content));
                }
                Role::Assistant => {
                    output.push_str(&format!(
                        "{}\n{}\n",
                        "Assistant:".green().bold(),
                        turn.content
                    ));
                }
            }
            output.push_str(&format!("{}\n", "---".dimmed()));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_domain::ContentCategory;

    #[test]
    fn test_failure_format_matches_pattern() {
        let error = GatewayError::HttpStatus {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        let formatted = ConsoleFormatter::format_generation_failure(&error);
        assert!(formatted.starts_with("\u{274c} content generation failed:"));
        assert!(formatted.contains("500"));
    }

    #[test]
    fn test_failure_format_covers_every_variant() {
        let errors = [
            GatewayError::Connection("refused".to_string()),
            GatewayError::Timeout(120),
            GatewayError::HttpStatus {
                status: 429,
                reason: "Too Many Requests".to_string(),
            },
            GatewayError::MalformedResponse("missing field".to_string()),
            GatewayError::EmptyChoices,
        ];
        for error in &errors {
            let formatted = ConsoleFormatter::format_generation_failure(error);
            assert!(formatted.starts_with("\u{274c} content generation failed:"));
        }
    }

    #[test]
    fn test_history_shows_both_roles() {
        let mut conversation = Conversation::new(ContentCategory::TravelQa);
        conversation.push_round("which attractions suit walking?", "Here are a few.");

        let output = ConsoleFormatter::format_history(&conversation);
        assert!(output.contains("which attractions suit walking?"));
        assert!(output.contains("Here are a few."));
    }

    #[test]
    fn test_empty_history() {
        let conversation = Conversation::default();
        assert_eq!(
            ConsoleFormatter::format_history(&conversation),
            "No conversation yet."
        );
    }

    #[test]
    fn test_failed_round_reads_like_a_reply() {
        // Scenario: HTTP 500 -> formatted error stored as the assistant turn
        let mut conversation = Conversation::default();
        let error = GatewayError::HttpStatus {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        let formatted = ConsoleFormatter::format_generation_failure(&error);
        conversation.push_round("plan a trip", &formatted);

        let output = ConsoleFormatter::format_history(&conversation);
        assert!(output.contains("content generation failed"));
        assert_eq!(conversation.turns().len(), 2);
    }
}
