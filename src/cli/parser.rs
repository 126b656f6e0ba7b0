use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for wfclock
#[derive(Parser, Debug)]
#[command(
    name = "wfclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance from the terminal: check in, take your lunch break and check out",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL (e.g. http://localhost:8001/api)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Override the local audit database path
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the button is pressed at this time of day (HH:MM)
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the configuration file and the local audit database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in to the backend and store the access token
    Login {
        #[arg(long, short = 'u')]
        username: String,

        /// Password (read from stdin when omitted)
        #[arg(long, short = 'p', env = "WFCLOCK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log out and forget the stored token
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Show today's attendance and the available action
    Status,

    /// Check in for today
    Checkin,

    /// Start a lunch break, resume from a break, or check out for the day
    Checkout,

    /// Press the attendance button: does whatever the current state allows
    Press,

    /// Keep the status on screen with a live clock
    Watch {
        /// Stop after this many seconds
        #[arg(long, hide = true)]
        ticks: Option<u64>,
    },

    /// Show the attendance history of a month
    History {
        #[arg(long, short = 'm', help = "Month to show (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(long, value_name = "FILE", help = "Export the records instead of printing them")]
        file: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f', requires = "file", help = "Overwrite without asking")]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "op", help = "Only rows of this operation (checkin, checkout, ...)")]
        operation: Option<String>,
    },
}
