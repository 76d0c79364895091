use serde::{Deserialize, Serialize};

use super::user::User;

/// A file attached to an issue, as listed in `fields.attachment`
#[derive(Clone, Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Attachment {
    #[serde(alias = "self")]
    pub self_url: String,
    pub id: String,
    pub filename: String,
    pub author: Option<User>,
    pub size: u64,
    #[serde(alias = "mimeType", alias = "mimetype")]
    pub mime_type: String,
    /// Absolute URL of the attachment content
    pub content: String,
    pub created: Option<String>,
}

impl Attachment {
    /// Jira treats attachment names case-insensitively, so do we.
    #[must_use]
    pub fn has_filename(&self, filename: &str) -> bool {
        self.filename.to_lowercase() == filename.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_comparison_ignores_case() {
        let attachment = Attachment {
            filename: "Report.PDF".to_string(),
            ..Attachment::default()
        };
        assert!(attachment.has_filename("report.pdf"));
        assert!(attachment.has_filename("REPORT.PDF"));
        assert!(!attachment.has_filename("report.pd"));
    }

    #[test]
    fn parses_jira_attachment() {
        let attachment: Attachment = serde_json::from_str(
            r#"{
                "self": "https://jira.example.com/rest/api/2/attachment/10001",
                "id": "10001",
                "filename": "notes.txt",
                "author": {"name": "fred", "displayName": "Fred F"},
                "created": "2024-03-05T10:15:30.123+0100",
                "size": 42,
                "mimeType": "text/plain",
                "content": "https://jira.example.com/secure/attachment/10001/notes.txt"
            }"#,
        )
        .unwrap();
        assert_eq!(attachment.id, "10001");
        assert_eq!(attachment.size, 42);
        assert_eq!(attachment.mime_type, "text/plain");
        assert_eq!(attachment.author.unwrap().display_name, "Fred F");
    }
}
