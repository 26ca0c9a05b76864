#![allow(dead_code)]

use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Joins answers into the text a user would type, one per line.
pub fn script(answers: &[&str]) -> String {
    let mut text = answers.join("\n");
    text.push('\n');
    text
}

/// Writes the answers to a temporary file that the binary can replay.
pub fn script_file(answers: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(script(answers).as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Answers that queue one bank customer with the given BIN.
pub fn card_holder(bin: &str) -> Vec<&str> {
    vec!["1", "yes", bin]
}

/// Answers that queue one visitor without a bank card.
pub fn walk_in(aged_or_disabled: bool) -> Vec<&'static str> {
    vec!["1", "no", if aged_or_disabled { "yes" } else { "no" }]
}
