use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{attachment::Attachment, project::Project, user::User};
use crate::pagination::Pagination;

/// Layout of the timestamps Jira puts in `fields.created`, i.e. `2024-03-05T10:15:30.123+0100`
pub const JIRA_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Represents a page of Jira issues retrieved by a JQL search
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct IssueList {
    #[serde(default)]
    pub expand: Option<String>,
    #[serde(alias = "startAt")]
    pub start_at: u32,
    #[serde(alias = "maxResults")]
    pub max_results: u32,
    pub total: u32,
    #[serde(default)]
    pub issues: Vec<Issue>,
    /// Derived from the three raw counters above once the page has been received
    #[serde(skip)]
    pub pagination: Pagination,
}

/// Represents a jira issue
#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct Issue {
    /// Numeric id of the jira issue
    pub id: String,
    /// The key of the jira issue, typically used and referenced by the user.
    pub key: String,
    #[serde(alias = "self", default)]
    pub self_url: String,
    #[serde(default)]
    pub expand: Option<String>,
    #[serde(default)]
    pub fields: IssueFields,
}

impl Issue {
    /// Parsed value of `fields.created`, if present and well formed
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        self.fields
            .created
            .as_deref()
            .and_then(|created| DateTime::parse_from_str(created, JIRA_DATE_FORMAT).ok())
    }

    /// Attachments are listed in the order Jira returns them
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.fields.attachment
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct IssueFields {
    #[serde(alias = "issuetype")]
    pub issue_type: Option<IssueType>,
    pub summary: String,
    pub description: Option<String>,
    pub reporter: Option<User>,
    pub assignee: Option<User>,
    pub project: Option<Project>,
    pub attachment: Vec<Attachment>,
    pub created: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct IssueType {
    #[serde(alias = "self")]
    pub url: String,
    pub id: String,
    pub description: String,
    #[serde(alias = "iconUrl")]
    pub icon_url: String,
    pub name: String,
    pub subtask: bool,
}
