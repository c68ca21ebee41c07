use crate::export::ExportFormat;
use crate::models::Satisfaction;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSurvey
/// CLI client for the customer-service satisfaction survey backend
#[derive(Parser)]
#[command(
    name = "rsurvey",
    version = env!("CARGO_PKG_VERSION"),
    about = "Customer-service satisfaction survey client: tickets, ratings and the admin backlog",
    long_about = None
)]
pub struct Cli {
    /// Override local database path (session store + internal log)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the backend base URL
    #[arg(global = true, long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the local database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (overrides $EDITOR/$VISUAL)")]
        editor: Option<String>,
    },

    /// Log in and store the session
    Login {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,
    },

    /// Create a staff account
    Signup {
        #[arg(long)]
        name: Option<String>,

        #[arg(long = "last-name")]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long = "confirm-password")]
        confirm_password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Resolve a client route (/, /signup, /rating/:id, /home, /backlog) through the guard
    Open {
        /// Route path, e.g. /backlog
        path: String,
    },

    /// Open a new service ticket (attendant area)
    Ticket {
        /// Type of service
        #[arg(long = "type")]
        kind: Option<String>,

        /// Register the service was filed under
        #[arg(long)]
        register: Option<String>,
    },

    /// Answer the satisfaction survey for a ticket
    Rate {
        /// Ticket number handed to the customer
        ticket: i64,

        #[arg(long, value_enum)]
        atendimento: Option<Satisfaction>,

        #[arg(long, value_enum)]
        tempo: Option<Satisfaction>,

        #[arg(long, value_enum)]
        solucao: Option<Satisfaction>,

        #[arg(long, value_enum)]
        postura: Option<Satisfaction>,

        /// Never prompt: missing answers are an error
        #[arg(long = "no-input")]
        no_input: bool,
    },

    /// Browse the ticket backlog (administrator area)
    Backlog {
        #[command(flatten)]
        filter: FilterArgs,

        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Page size: 5, 10 or 25 (default from config)
        #[arg(long = "page-size")]
        page_size: Option<usize>,

        /// List the attendants instead of the tickets
        #[arg(long)]
        users: bool,
    },

    /// Export the filtered backlog (all pages)
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        /// Output file (absolute path)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the logged-in user and the tickets they attended
    Whoami,

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

/// Backlog filter flags shared by `backlog` and `export`.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Keep only tickets of this attendant id
    #[arg(long)]
    pub attendant: Option<i64>,

    /// First creation day to include (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Last creation day to include (YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,
}
