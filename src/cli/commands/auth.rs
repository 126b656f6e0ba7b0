use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::auth::AuthLogic;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::io::{self, BufRead, IsTerminal, Write};

/// Prompt without echo on a terminal; piped input is read as one line.
fn read_password() -> AppResult<String> {
    if io::stdin().is_terminal() {
        return Ok(rpassword::prompt_password("Password: ")?);
    }

    print!("Password: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Handle `login`, `logout` and `whoami`.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let api = ctx.api()?;

    match cmd {
        Commands::Login { username, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => read_password()?,
            };
            if password.is_empty() {
                return Err(AppError::Config("password must not be empty".into()));
            }

            let user = AuthLogic::login(&api, &ctx.creds, username, &password)?;
            audit(&ctx.cfg.database, "login", user.display_name().as_str(), "Logged in");
            messages::success(format!("Logged in as {}", user.display_name()));
        }
        Commands::Logout => {
            AuthLogic::logout(&api, &ctx.creds)?;
            audit(&ctx.cfg.database, "logout", "-", "Logged out");
            messages::success("Logged out");
        }
        Commands::Whoami => {
            let user = AuthLogic::whoami(&api, &ctx.creds)?;
            println!("{}", user.display_name());
            if let Some(email) = &user.email {
                println!("  email: {email}");
            }
            if let Some(role) = &user.role {
                println!("  role:  {role}");
            }
        }
        _ => {}
    }

    Ok(())
}
