use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::fs;
use std::process::Command;

const REQUIRED_FIELDS: [&str; 4] = ["api_url", "attendance_prefix", "database", "time_format"];

/// Names of the known fields absent from a YAML config document.
pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
    let value: serde_yaml::Value = if content.trim().is_empty() {
        serde_yaml::Value::Null
    } else {
        serde_yaml::from_str(content)?
    };

    Ok(REQUIRED_FIELDS
        .into_iter()
        .filter(|f| value.get(*f).is_none())
        .collect())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        messages::header(format!("Current configuration ({})", path.display()));
        println!("{}", serde_yaml::to_string(&ctx.cfg)?);
    }

    if *check {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist: run `wfclock init` first",
                path.display()
            )));
        }
        let content = fs::read_to_string(&path)?;
        let missing = missing_fields(&content)?;
        if missing.is_empty() {
            messages::success("Configuration file is complete");
        } else {
            for field in &missing {
                messages::warning(format!("Missing field '{field}' (default applies)"));
            }
        }
    }

    if *edit_config {
        edit(&path, editor.clone())?;
    }

    Ok(())
}

fn edit(path: &std::path::Path, requested: Option<String>) -> AppResult<()> {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor = requested.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor).arg(path).status() {
        Ok(s) if s.success() => {
            messages::success(format!("Configuration file edited using '{editor}'"));
            return Ok(());
        }
        _ => messages::warning(format!(
            "Editor '{editor}' not available, falling back to '{default_editor}'"
        )),
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            messages::success(format!(
                "Configuration file edited using fallback '{default_editor}'"
            ));
            Ok(())
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file using '{default_editor}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_absent_fields() {
        let missing = missing_fields("api_url: http://hr.local/api\ndatabase: /tmp/x.sqlite\n").unwrap();
        assert_eq!(missing, vec!["attendance_prefix", "time_format"]);
    }

    #[test]
    fn empty_file_misses_everything() {
        assert_eq!(missing_fields("").unwrap().len(), REQUIRED_FIELDS.len());
    }
}
