use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A Jira user, as returned by `/user`, `/myself` and embedded in issues and attachments.
///
/// Jira Server identifies users by `name`, Jira Cloud by `account_id`; whichever is missing
/// is left empty.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    #[serde(alias = "self")]
    pub self_url: String,
    pub name: String,
    #[serde(alias = "accountId")]
    pub account_id: Option<String>,
    #[serde(alias = "emailAddress")]
    pub email_address: String,
    #[serde(alias = "displayName")]
    pub display_name: String,
    pub active: bool,
    #[serde(alias = "timeZone")]
    pub time_zone: String,
    #[serde(alias = "avatarUrls")]
    pub avatar_urls: BTreeMap<String, String>,
    pub expand: Option<String>,
}
