use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{CustomUserError, Text};

use crate::session::SessionContext;
use crate::ui::{Style, handle_prompt_cancellation};

/// Shows the entry form and returns the context it collected.
///
/// `name` and `subject` pre-fill the fields when one of them was already
/// supplied. Returns `None` if the user cancels the form.
pub fn run_welcome(name: Option<&str>, subject: Option<&str>) -> Result<Option<SessionContext>> {
    handle_prompt_cancellation(|| {
        println!("{}", Style::header("Bienvenue !"));
        println!(
            "{}",
            Style::secondary("Dis-moi qui tu es et de quoi tu veux parler.")
        );
        println!();

        let name = Text::new("Ton prénom :")
            .with_initial_value(name.unwrap_or_default())
            .with_validator(not_blank)
            .prompt()?;

        let subject = Text::new("Sujet :")
            .with_initial_value(subject.unwrap_or_default())
            .with_validator(not_blank)
            .prompt()?;

        println!();

        SessionContext::new(name, subject).context("Name and subject must not be empty")
    })
}

#[allow(clippy::unnecessary_wraps)] // signature required by inquire validators
fn not_blank(input: &str) -> Result<Validation, CustomUserError> {
    if input.trim().is_empty() {
        Ok(Validation::Invalid("Ce champ est obligatoire".into()))
    } else {
        Ok(Validation::Valid)
    }
}
