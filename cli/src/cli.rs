use std::fmt::{self, Formatter};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub(crate) enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Parser)]
/// Jira utility - look up issues, users and activity, and keep issue attachments up to date
///
/// Connection details are read from the configuration file, see `jira config update`.
/// Without a configuration file the environment variables JIRA_HOST, JIRA_USER and JIRA_TOKEN
/// are used.
#[command(author, version, about)] // Read from Cargo.toml
pub(crate) struct Opts {
    #[command(subcommand)]
    pub cmd: Command,

    #[arg(global = true, short, long)]
    pub verbosity: Option<LogLevel>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Show a single issue
    Issue(IssueOpts),
    /// List issues assigned to a user, one page at a time
    Search(Search),
    /// Show a user
    User(UserOpts),
    /// Show the user you are authenticated as
    Whoami,
    /// Show the activity stream of a user
    Activity(ActivityOpts),
    /// Subcommands for issue attachments
    Attachment(Attachment),
    /// Subcommands for configuration
    Config(Config),
}

#[derive(Args)]
pub(crate) struct IssueOpts {
    /// Key or numeric id of the issue, i.e. TIME-148
    pub issue: String,
}

#[derive(Args)]
pub(crate) struct Search {
    /// User name of the assignee
    pub user: String,
    #[arg(short, long, default_value_t = 50)]
    pub max_results: u32,
    /// Index of the first issue to list
    #[arg(short, long, default_value_t = 0)]
    pub start_at: u32,
}

#[derive(Args)]
pub(crate) struct UserOpts {
    pub username: String,
}

#[derive(Args)]
pub(crate) struct ActivityOpts {
    pub user: String,
    /// Number of entries to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub(crate) struct Attachment {
    #[command(subcommand)]
    pub cmd: AttachmentCommand,
}

#[derive(Subcommand)]
pub(crate) enum AttachmentCommand {
    /// Print the id of the attachment with the given file name
    Find {
        issue: String,
        filename: String,
    },
    /// Attach a file, fails if the issue already has an attachment with the same name
    Add {
        issue: String,
        path: PathBuf,
    },
    /// Attach a file, replacing any attachment with the same name
    Update {
        issue: String,
        path: PathBuf,
    },
    /// Delete an attachment by id
    Remove {
        attachment_id: String,
    },
    /// Download an attachment, overwriting any local file with the same name
    Download {
        issue: String,
        filename: String,
        /// Directory to download into, default is the current directory
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Args)]
pub(crate) struct Config {
    #[command(subcommand)]
    pub cmd: ConfigCommand,
}

/// Create, modify or list the configuration file.
#[derive(Subcommand, Clone)]
pub(crate) enum ConfigCommand {
    /// Update the configuration file, creating it if needed
    Update(UpdateConfiguration),
    /// write current configuration to standard output
    List,
    /// Remove the current configuration
    Remove,
}

#[derive(Args, Clone)]
pub(crate) struct UpdateConfiguration {
    /// The Jira security API token or password
    #[arg(short, long)]
    pub token: Option<String>,
    /// Your user name or email address
    #[arg(short, long)]
    pub user: Option<String>,
    /// The base url of your Jira, typically <https://jira.yourcompany.com>
    #[arg(long)]
    pub url: Option<String>,
    /// Path of the REST API relative to the url
    #[arg(long)]
    pub api_path: Option<String>,
    /// Path of the activity stream relative to the url
    #[arg(long)]
    pub activity_path: Option<String>,
}
