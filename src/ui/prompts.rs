use anyhow::Result;
use dialoguer::{Input, Select};

/// Prompt for one operand, pre-filled with its current text.
/// Empty input is accepted so validation can report it.
pub fn prompt_operand(position: usize, current: &str) -> Result<String> {
    let text = Input::<String>::new()
        .with_prompt(format!("Operand {}", position + 1))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}

/// Arrow-key selection over displayable items, returning the chosen index
pub fn prompt_select<T: ToString>(prompt: &str, items: &[T], default: usize) -> Result<usize> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()?;
    Ok(selection)
}

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}
