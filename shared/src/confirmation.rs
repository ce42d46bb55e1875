use crate::types::Result;
use dialoguer::{Confirm, Input};

/// Standardized confirmation prompt used across binaries.
pub fn ask_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let choice = Confirm::new()
        .with_prompt(prompt)
        .default(default_yes)
        .show_default(true)
        .interact()?;
    Ok(choice)
}

/// Free-text field. Empty answers are allowed so validation stays with the caller.
pub fn ask_text(prompt: &str) -> Result<String> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}
