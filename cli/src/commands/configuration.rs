use anyhow::Result;

use crate::cli::{ConfigCommand, UpdateConfiguration};
use crate::config;

fn list() -> Result<()> {
    println!("Configuration file {}:\n", config::configuration_file()?.display());
    match config::load_if_present()? {
        Some(cfg) => println!("{}", config::application_config_to_string(&cfg)?),
        None => println!("Config file does not exist. Use 'jira config update' to create it"),
    }
    Ok(())
}

fn update(update: UpdateConfiguration) -> Result<()> {
    let mut app_config = config::load_or_default()?;

    if let Some(user) = update.user {
        app_config.jira.user = user;
    }
    if let Some(token) = update.token {
        app_config.jira.token = token;
    }
    if let Some(url) = update.url {
        app_config.jira.jira_url = url;
    }
    if let Some(api_path) = update.api_path {
        app_config.jira.api_path = api_path;
    }
    if let Some(activity_path) = update.activity_path {
        app_config.jira.activity_path = activity_path;
    }
    if !app_config.jira.has_valid_jira_token() {
        eprintln!("WARNING: the configuration does not hold a usable token, use --token to set it");
    }

    config::save(&app_config)?;
    println!("Configuration saved to {}", config::configuration_file()?.display());
    Ok(())
}

pub(crate) fn execute(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Update(opts) => update(opts),
        ConfigCommand::List => list(),
        ConfigCommand::Remove => {
            config::remove()?;
            println!("Configuration file {} removed", config::configuration_file()?.display());
            Ok(())
        }
    }
}
