use anyhow::{Context, Result};
use inquire::Text;
use std::path::PathBuf;

/// Ask for the location of the merchant's notes
pub fn prompt_input_file() -> Result<PathBuf> {
    let location = Text::new("Enter file location:")
        .with_help_message("A text file with one statement or question per line")
        .with_validator(|input: &str| {
            let path = std::path::Path::new(input.trim());
            if path.is_file() {
                Ok(inquire::validator::Validation::Valid)
            } else {
                Ok(inquire::validator::Validation::Invalid(
                    format!("'{}' is not a readable file", input.trim()).into(),
                ))
            }
        })
        .prompt()
        .context("Failed to get file location")?;

    Ok(PathBuf::from(location.trim()))
}
