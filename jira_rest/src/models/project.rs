use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The project an issue belongs to
#[derive(Clone, Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Project {
    #[serde(alias = "self")]
    pub url: String,
    /// Unique numeric identity of a jira project
    pub id: String,
    /// The jira project key, typically a short upper-case abbreviation
    pub key: String,
    /// The name of the jira project
    pub name: String,
    #[serde(alias = "avatarUrls")]
    pub avatar_urls: BTreeMap<String, String>,
}
