//! wfclock main entrypoint.

use wfclock::errors::AppError;
use wfclock::run;
use wfclock::ui::messages;

fn main() {
    match run() {
        Ok(()) => {}
        // Refused actions carry the server's own wording.
        Err(AppError::Rejected(msg)) => {
            messages::error(msg);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
