use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by Jira for 4xx responses
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Errors {
    #[serde(rename = "errorMessages", default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

#[derive(Error, Debug)]
pub enum JiraError {
    #[error("Issue [{0}] has not been found")]
    IssueNotFound(String),

    #[error("Attachment {filename} has not been found on issue {issue}")]
    AttachmentNotFound { issue: String, filename: String },

    #[error("Not found: '{0}'")]
    NotFound(String),

    #[error("Jira issue {issue} already has an attachment named {filename}")]
    AlreadyExists { issue: String, filename: String },

    #[error("Failed to add attachment. Status code is {status}")]
    UploadFailed { status: StatusCode },

    #[error("Failed to delete attachment {id}: {status}")]
    DeleteFailed { id: String, status: StatusCode },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not authorized")]
    Unauthorized,

    #[error("Jira Client Error ({status}):\n{errors:#?}")]
    Fault { status: StatusCode, errors: Errors },

    #[error("Unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Internal error in reqwest library: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Could not serialize/deserialize: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not parse activity feed: {0}")]
    Feed(#[from] quick_xml::DeError),

    #[error("Invalid Jira url: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JiraError {
    /// Maps a non-successful status and its body onto the error taxonomy.
    /// `resource` names what was requested and ends up in [`JiraError::NotFound`].
    pub(crate) fn from_status(status: StatusCode, body: &[u8], resource: &str) -> JiraError {
        match status {
            StatusCode::UNAUTHORIZED => JiraError::Unauthorized,
            StatusCode::NOT_FOUND => JiraError::NotFound(resource.to_string()),
            client_err if client_err.is_client_error() => JiraError::Fault {
                status,
                // Not every 4xx carries a Jira error document
                errors: serde_json::from_slice::<Errors>(body).unwrap_or_default(),
            },
            _ => JiraError::UnexpectedStatus(status),
        }
    }
}
