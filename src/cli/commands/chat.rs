use anyhow::Result;
use std::io::{self, IsTerminal};
use thiserror::Error;

use super::welcome;
use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigFile, ConfigManager, ResolveOptions, resolve_config};
use crate::session::{Bootstrap, Confetti, SessionContext, bootstrap};

pub struct ChatOptions {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// Reasons the chat cannot start, each with its own exit status.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{0:#}")]
    Config(anyhow::Error),

    #[error(
        "Missing session context\n\n\
         Please provide it via:\n  \
         - CLI options: bavard --name <name> --subject <subject>\n  \
         - Config file: name and subject in the [bavard] section\n  \
         - Or run bavard from a terminal to fill in the welcome form"
    )]
    MissingContext,
}

impl StartupError {
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Config(_) => exitcode::CONFIG,
            Self::MissingContext => exitcode::USAGE,
        }
    }
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let config = load_session_config(&options, &file_config)?;

    let name = options.name.or_else(|| file_config.bavard.name.clone());
    let subject = options.subject.or_else(|| file_config.bavard.subject.clone());

    let Some(context) = start_session(name, subject, io::stdin().is_terminal())? else {
        return Ok(());
    };

    let session = ChatSession::new(config, context);
    session.run().await
}

fn load_session_config(options: &ChatOptions, file_config: &ConfigFile) -> Result<SessionConfig> {
    let resolve_options = ResolveOptions {
        provider: options.provider.clone(),
        model: options.model.clone(),
    };

    let resolved = resolve_config(&resolve_options, file_config).map_err(StartupError::Config)?;
    Ok(resolved.into())
}

/// Bootstraps the session, sending the user to the entry form while the
/// context is missing.
///
/// Returns `None` if the user cancels the entry form.
fn start_session(
    name: Option<String>,
    subject: Option<String>,
    interactive: bool,
) -> Result<Option<SessionContext>> {
    let confetti = Confetti::default();
    let mut supplied = SessionContext::from_parts(name.clone(), subject.clone());

    loop {
        match bootstrap(supplied.take(), &confetti) {
            Bootstrap::Ready(context) => return Ok(Some(context)),
            Bootstrap::Redirect(route) => {
                if !interactive {
                    return Err(StartupError::MissingContext.into());
                }
                tracing::debug!(route, "showing entry form");
                match welcome::run_welcome(name.as_deref(), subject.as_deref())? {
                    Some(context) => supplied = Some(context),
                    None => return Ok(None),
                }
            }
        }
    }
}
