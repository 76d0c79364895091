use serde::{Deserialize, Serialize};

use crate::{DEFAULT_ACTIVITY_PATH, DEFAULT_API_PATH};

/// Placeholder written into fresh configuration files
pub const JIRA_TOKEN_PLACEHOLDER: &str = "<your secret jira token goes here>";

/// What it takes to connect to a Jira instance
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct JiraClientConfiguration {
    /// Base url of the Jira instance, i.e. `https://jira.example.com`
    pub jira_url: String,
    pub user: String,
    pub token: String,
    /// Path of the REST API relative to `jira_url`
    #[serde(default = "default_api_path")]
    pub api_path: String,
    /// Path of the activity stream relative to `jira_url`
    #[serde(default = "default_activity_path")]
    pub activity_path: String,
}

fn default_api_path() -> String {
    DEFAULT_API_PATH.to_string()
}

fn default_activity_path() -> String {
    DEFAULT_ACTIVITY_PATH.to_string()
}

impl Default for JiraClientConfiguration {
    fn default() -> Self {
        JiraClientConfiguration {
            jira_url: "https://jira.example.com".into(),
            user: "user.name@example.com".into(),
            token: JIRA_TOKEN_PLACEHOLDER.into(),
            api_path: default_api_path(),
            activity_path: default_activity_path(),
        }
    }
}

impl JiraClientConfiguration {
    /// Does the token look like a valid Jira Security token?
    #[must_use]
    pub fn has_valid_jira_token(&self) -> bool {
        !(self.token.trim().is_empty()
            || self.token == JiraClientConfiguration::default().token
            || self.token.contains("secret"))
    }
}
