use jira_rest::{Credentials, Jira};
use mockito::Server;

pub const USER: &str = "fred";
pub const TOKEN: &str = "secret";
/// `fred:secret`, base64 encoded
pub const BASIC_AUTH: &str = "Basic ZnJlZDpzZWNyZXQ=";

/// Client talking to the mock server with basic authentication
pub fn create_jira_client(server: &Server) -> Jira {
    let _ = env_logger::builder().is_test(true).try_init();
    Jira::new(server.url(), Credentials::Basic(USER.to_string(), TOKEN.to_string()))
        .expect("Error initializing jira client")
}

/// Issue `TIME-148` carrying the given `(id, filename)` attachments, whose content lives on
/// the mock server
pub fn issue_json(server: &Server, attachments: &[(&str, &str)]) -> String {
    let list: Vec<String> = attachments
        .iter()
        .map(|(id, name)| {
            format!(
                r#"{{"self": "{url}/rest/api/2/attachment/{id}", "id": "{id}", "filename": "{name}",
                    "size": 14, "mimeType": "text/plain",
                    "content": "{url}/secure/attachment/{id}/{name}"}}"#,
                url = server.url()
            )
        })
        .collect();
    format!(
        r#"{{
            "expand": "renderedFields",
            "id": "10002",
            "self": "{url}/rest/api/2/issue/10002",
            "key": "TIME-148",
            "fields": {{
                "summary": "Monthly report",
                "assignee": {{"name": "fred", "displayName": "Fred F"}},
                "attachment": [{list}],
                "created": "2024-03-05T10:15:30.123+0100"
            }}
        }}"#,
        url = server.url(),
        list = list.join(",")
    )
}
