//! The TOML configuration file of the command line utility
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use jira_rest::config::JiraClientConfiguration;
use log::debug;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "jira.toml";

/// Application configuration struct
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct ApplicationConfig {
    /// Holds the URL and credentials of the Jira instance we are running against
    pub jira: JiraClientConfiguration,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "jira_rest", "jira")
        .ok_or_else(|| anyhow!("Unable to determine the home directory"))
}

/// Filename holding the application configuration parameters
pub fn configuration_file() -> Result<PathBuf> {
    Ok(project_dirs()?.preference_dir().join(CONFIG_FILE_NAME))
}

/// Reads the `ApplicationConfig` from the supplied TOML file
fn read(path: &Path) -> Result<ApplicationConfig> {
    let mut file = File::open(path)
        .with_context(|| format!("Unable to open configuration file {}", path.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Unable to read configuration file {}", path.display()))?;
    toml::from_str::<ApplicationConfig>(&contents)
        .with_context(|| format!("Unable to parse configuration file {}", path.display()))
}

fn write(cfg: &ApplicationConfig, path: &Path) -> Result<()> {
    if let Some(directory) = path.parent() {
        fs::create_dir_all(directory)?;
    }
    let mut file = File::create(path)?;
    file.write_all(application_config_to_string(cfg)?.as_bytes())?;
    debug!("Configuration written to {}", path.display());
    Ok(())
}

/// The configuration file if there is one
#[allow(clippy::missing_errors_doc)]
pub fn load_if_present() -> Result<Option<ApplicationConfig>> {
    let path = configuration_file()?;
    if path.is_file() {
        Ok(Some(read(&path)?))
    } else {
        Ok(None)
    }
}

/// Loads the current configuration file or hands out the default values
#[allow(clippy::missing_errors_doc)]
pub fn load_or_default() -> Result<ApplicationConfig> {
    Ok(load_if_present()?.unwrap_or_default())
}

#[allow(clippy::missing_errors_doc)]
pub fn save(cfg: &ApplicationConfig) -> Result<()> {
    write(cfg, &configuration_file()?)
}

#[allow(clippy::missing_errors_doc)]
pub fn remove() -> Result<()> {
    let path = configuration_file()?;
    match fs::remove_file(&path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(anyhow!("There is no configuration file {}", path.display()))
        }
        other => Ok(other?),
    }
}

#[allow(clippy::missing_errors_doc)]
pub fn application_config_to_string(cfg: &ApplicationConfig) -> Result<String> {
    Ok(toml::to_string::<ApplicationConfig>(cfg)?)
}
