use anyhow::Result;
use dialoguer::{Input, Select};

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
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

/// Ask for a search query. Empty input is returned as-is so the caller can
/// warn about it instead of re-prompting silently.
pub fn prompt_query() -> Result<String> {
    let query = Input::<String>::new()
        .with_prompt("🔍 Search a compatible model")
        .allow_empty(true)
        .interact_text()?;
    Ok(query)
}

/// Let the user pick a column when auto-detection found none
///
/// # Arguments
/// * `role` - What the column is for, e.g. "compatible"
/// * `headers` - Column names to choose from
///
/// # Returns
/// * `Ok(usize)` - Index of the selected column
pub fn prompt_column_selection(role: &str, headers: &[String]) -> Result<usize> {
    let selection = Select::new()
        .with_prompt(format!("Choose {} column", role))
        .items(headers)
        .default(0)
        .interact()?;

    Ok(selection)
}

/// Simple text input prompt with optional default value
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_prompt = Input::<String>::new().with_prompt(prompt);

    if let Some(default_val) = default {
        input_prompt = input_prompt.default(default_val.to_string());
    }

    Ok(input_prompt.interact_text()?)
}
