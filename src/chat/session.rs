use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::str::FromStr;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::conversation::{Conversation, Effect, Event, Sender, script};
use crate::quote::{Mode, QuoteClient};
use crate::ui::{Spinner, Style};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The quote service base URL.
    pub endpoint: String,
    /// The customer mode the session starts in.
    pub mode: Mode,
}

impl SessionConfig {
    /// Creates a new session configuration.
    pub const fn new(endpoint: String, mode: Mode) -> Self {
        Self { endpoint, mode }
    }
}

/// An interactive quote-building session.
///
/// Owns the IO side of the conversation: it reads answers, performs the
/// effects each transition requests and prints whatever the transition
/// appended to the transcript.
pub struct ChatSession {
    config: SessionConfig,
    client: QuoteClient,
    conversation: Conversation,
    printed: usize,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let client = QuoteClient::new(config.endpoint.clone());
        let conversation = Conversation::new(config.mode);
        Self {
            config,
            client,
            conversation,
            printed: 0,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        ui::print_mode_bar(self.conversation.mode());
        self.flush_new_messages();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightGreen)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Answer the question, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.submit(text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Feeds one answer through the state machine and performs the
    /// effects it requests, in order.
    async fn submit(&mut self, text: String) {
        self.conversation.apply(Event::InputChanged(text));
        let effects = self.conversation.apply(Event::Submit);
        self.flush_new_messages();

        for effect in effects {
            match effect {
                Effect::ScheduleReply(reply) => {
                    tokio::time::sleep(script::REPLY_DELAY).await;
                    self.conversation.apply(Event::ReplyDelivered(reply));
                    self.flush_new_messages();
                }
                Effect::FetchQuote { query, mode } => {
                    self.fetch_quote(&query, mode).await;
                }
            }
        }
    }

    async fn fetch_quote(&mut self, query: &str, mode: Mode) {
        let spinner = Spinner::new("Preparing your quote...");
        let result = self.client.search(query, mode).await;
        spinner.stop();

        match result {
            Ok(items) => {
                let got_items = !items.is_empty();
                self.conversation.apply(Event::QuoteReceived(items));
                self.flush_new_messages();
                if got_items {
                    ui::print_quote(&self.conversation);
                }
            }
            Err(error) => {
                tracing::debug!("quote request failed: {error:#}");
                self.conversation.apply(Event::QuoteFailed);
                self.flush_new_messages();
            }
        }
    }

    /// Prints transcript entries appended since the last flush. User
    /// entries are skipped; the prompt already echoed them.
    fn flush_new_messages(&mut self) {
        while self.printed < self.conversation.messages().len() {
            let message = &self.conversation.messages()[self.printed];
            if message.sender == Sender::Ai {
                ui::print_ai_message(&message.text);
            }
            self.printed += 1;
        }
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Mode(name) => {
                self.handle_mode(name.as_deref());
                true
            }
            SlashCommand::Quote => {
                ui::print_quote(&self.conversation);
                true
            }
            SlashCommand::Config => {
                ui::print_config(&self.config, &self.conversation);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    fn handle_mode(&mut self, name: Option<&str>) {
        let Some(name) = name else {
            ui::print_mode_bar(self.conversation.mode());
            return;
        };

        match Mode::from_str(name) {
            Ok(mode) => {
                self.conversation.apply(Event::ModeSelected(mode));
                println!(
                    "{} Mode set to {}\n",
                    Style::success("✓"),
                    Style::value(mode)
                );
            }
            Err(error) => ui::print_error(&error.to_string()),
        }
    }
}
