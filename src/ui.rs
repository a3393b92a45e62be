// Prompt layer: thin wrappers over `dialoguer` for the two kinds of
// questions the installer asks. Yes/no questions insist on the literal
// words "yes" or "no", so a stray keypress cannot authorize an install.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dialoguer::Input;

/// Parse a yes/no answer. Accepts the two words in any casing, with
/// surrounding whitespace; rejects everything else.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question, re-prompting until one of the two words is
/// given.
pub fn ask_yes_no(prompt: &str) -> Result<bool> {
    loop {
        let answer: String = Input::new()
            .with_prompt(format!("{prompt} [yes|no]"))
            .allow_empty(true)
            .interact_text()
            .context("failed to read answer")?;
        match parse_yes_no(&answer) {
            Some(choice) => return Ok(choice),
            None => println!("Please answer 'yes' or 'no'."),
        }
    }
}

/// Ask for a path, offering a default that an empty answer (plain ENTER)
/// accepts. The answer is absolutized; the path does not have to exist.
pub fn ask_path(prompt: &str, default: &Path) -> Result<PathBuf> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .default(default.display().to_string())
        .interact_text()
        .context("failed to read path")?;
    absolutize(Path::new(answer.trim()))
}

/// Absolutize without requiring the path to exist yet.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("could not resolve path {}", path.display()))
}
