use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::controller::{SubmitOutcome, TurnController};
use super::ui;
use crate::completion::CompletionClient;
use crate::config::ResolvedConfig;
use crate::session::SessionContext;
use crate::ui::Spinner;

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
}

impl From<ResolvedConfig> for SessionConfig {
    fn from(resolved: ResolvedConfig) -> Self {
        Self {
            provider_name: resolved.provider_name,
            endpoint: resolved.endpoint,
            model: resolved.model,
            api_key: resolved.api_key,
        }
    }
}

/// An interactive chat session.
///
/// Provides a REPL-style interface where each line is a question for the
/// completion endpoint.
pub struct ChatSession {
    config: SessionConfig,
    controller: TurnController<CompletionClient>,
}

impl ChatSession {
    /// Creates a new chat session for a context that already passed bootstrap.
    pub fn new(config: SessionConfig, context: SessionContext) -> Self {
        let client = CompletionClient::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone(),
        );
        Self {
            config,
            controller: TurnController::new(context, client),
        }
    }

    pub async fn run(&self) -> Result<()> {
        ui::print_header(self.controller.context());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            // A question whose request failed is still pending; offer it again.
            let pending = self.controller.pending_input();
            let input = Text::new("")
                .with_initial_value(&pending)
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Pose ta question ici, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => self.controller.set_input(""),
                    Input::Command(cmd) => {
                        self.controller.set_input("");
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Question(question) => {
                        self.controller.set_input(question);
                        self.ask_and_print().await;
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

    fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config, self.controller.context());
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::History => {
                ui::print_turns(self.controller.transcript().turns());
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    async fn ask_and_print(&self) {
        let shown = self.controller.transcript().len();

        let spinner = Spinner::new("Réflexion...");
        let outcome = self.controller.submit().await;
        spinner.stop();

        if outcome == SubmitOutcome::Answered {
            let transcript = self.controller.transcript();
            ui::print_turns(&transcript.turns()[shown..]);
        }
    }
}
