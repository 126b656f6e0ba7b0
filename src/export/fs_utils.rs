// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Interpreta la risposta dell'utente: solo "y" / "yes" confermano.
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask on stdout, read the answer from `input`.
fn confirm_overwrite<R: BufRead>(path: &Path, input: &mut R) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

/// Make sure `path` can be written.
///
/// - parent directories are created when missing
/// - an existing file is replaced only with `force` or after confirmation
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    if !path.exists() || force {
        return Ok(());
    }

    if confirm_overwrite(path, &mut io::stdin().lock())? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
