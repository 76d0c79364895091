//! # The Jira Command Line Utility
//!
//! Looks up issues, users and activity streams, and keeps issue attachments in sync with
//! local files.
//!
//! ## Configuration
//! Before using the tool, configure it with your Jira credentials:
//! ```bash
//! jira config update --token YOUR_API_TOKEN --user fred --url https://jira.yourcompany.com
//! ```
//! Alternatively set `JIRA_HOST`, `JIRA_USER` and `JIRA_TOKEN`.
//!
//! ## Usage Examples
//!
//! ```bash
//! jira issue TIME-148
//! jira search fred --max-results 20 --start-at 40
//! jira activity fred --limit 10
//! jira attachment update TIME-148 target/report.xlsx
//! jira attachment download TIME-148 report.xlsx --dir /tmp
//! ```
use std::env;
use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Command, Opts};
use env_logger::Env;
use jira_rest::{models::user::User, Jira, JiraBuilder};
use log::debug;

mod cli;
mod commands;
mod config;

/// Sent as `User-Agent` with every request
const USER_AGENT: &str = concat!("jira/", env!("CARGO_PKG_VERSION"));

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    configure_logging(&opts); // Handles the -v option

    run(opts.cmd)
}

fn run(cmd: Command) -> Result<()> {
    match cmd {
        Command::Config(config) => commands::configuration::execute(config.cmd)?,
        Command::Issue(opts) => {
            let issue = create_client()?.get_issue(&opts.issue)?;
            println!("{} {}", issue.key, issue.fields.summary);
            if let Some(assignee) = &issue.fields.assignee {
                println!("Assignee: {}", assignee.display_name);
            }
            if let Some(created) = issue.created_at() {
                println!("Created:  {}", created.format("%Y-%m-%d %H:%M"));
            }
            for attachment in issue.attachments() {
                println!(
                    "  {:>10} {:>10} {}",
                    attachment.id, attachment.size, attachment.filename
                );
            }
        }
        Command::Search(search) => {
            let result = create_client()?.search_issues_by_assignee(
                &search.user,
                search.max_results,
                search.start_at,
            )?;
            for issue in &result.issues {
                println!("{:<12} {}", issue.key, issue.fields.summary);
            }
            println!(
                "Page {} of {} ({} issues)",
                result.pagination.page + 1,
                result.pagination.page_count.max(1),
                result.total
            );
        }
        Command::User(opts) => print_user(&create_client()?.get_user(&opts.username)?),
        Command::Whoami => print_user(&create_client()?.get_current_user()?),
        Command::Activity(opts) => {
            let feed = create_client()?.user_activity(&opts.user)?;
            let limit = opts.limit.unwrap_or(feed.entries.len());
            for entry in feed.entries.iter().take(limit) {
                let updated = entry
                    .updated
                    .map(|u| u.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                println!("{updated:<16} {}", entry.title.body);
            }
        }
        Command::Attachment(attachment) => {
            commands::attachment::execute(&create_client()?, attachment.cmd)?;
        }
    }
    Ok(())
}

fn print_user(user: &User) {
    println!("{} <{}>", user.display_name, user.email_address);
    if !user.name.is_empty() {
        println!("Name:      {}", user.name);
    }
    if let Some(account_id) = &user.account_id {
        println!("Account:   {account_id}");
    }
    println!("Time zone: {}", user.time_zone);
}

/// Client from the configuration file, or from the environment if there is none
fn create_client() -> Result<Jira> {
    let builder = match config::load_if_present()? {
        Some(app_config) => {
            debug!("Using Jira configuration for {}", app_config.jira.jira_url);
            JiraBuilder::new().configuration(&app_config.jira)
        }
        None => JiraBuilder::new().from_env(),
    };
    builder
        .configure_client(|client| client.user_agent(USER_AGENT))
        .build()
        .context(
            "Unable to create the Jira client. Use 'jira config update' or set JIRA_HOST, JIRA_USER and JIRA_TOKEN",
        )
}

fn configure_logging(opts: &Opts) {
    let mut log_file = env::temp_dir();
    log_file.push("jira.log");

    if opts.verbosity.is_some() {
        println!("Logging to {}", &log_file.to_string_lossy());
    }

    // If nothing else was specified in RUST_LOG, use 'warn'
    let mut builder = env_logger::Builder::from_env(
        Env::default().default_filter_or(opts.verbosity.map_or("warn".to_string(), |lvl| lvl.to_string())),
    );
    match File::create(&log_file) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => eprintln!("Unable to log to {}: {e}", log_file.display()),
    }
    builder.init();
    debug!("Logging started");
}
