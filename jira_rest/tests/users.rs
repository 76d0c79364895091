mod test_helpers;

use jira_rest::JiraError;
use mockito::{Matcher, Server};
use test_helpers::jira_client::create_jira_client;

#[test]
fn fetch_myself_success() -> Result<(), JiraError> {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/rest/api/2/myself")
        .with_status(200)
        .with_body(
            r#"{
                "self": "foo",
                "accountId": "foo",
                "emailAddress": "foo@bar.com",
                "displayName": "foo",
                "timeZone": "local"
            }"#,
        )
        .create();

    let user = create_jira_client(&server).get_current_user()?;

    assert_eq!(user.email_address, "foo@bar.com");
    assert_eq!(user.account_id.as_deref(), Some("foo"));
    Ok(())
}

#[test]
fn fetch_myself_forbidden() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/rest/api/2/myself")
        .with_status(403)
        .with_body(
            r#"{
                "errorMessages": ["foo"],
                "errors": {}
            }"#,
        )
        .create();

    match create_jira_client(&server).get_current_user() {
        Err(JiraError::Fault { status, errors }) => {
            assert_eq!(status, 403);
            assert_eq!(errors.error_messages[0], "foo");
        }
        other => panic!("Expected a fault, got {other:?}"),
    }
}

#[test]
fn fetch_user_by_name() -> Result<(), JiraError> {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/rest/api/2/user")
        .match_query(Matcher::UrlEncoded("username".into(), "fred f".into()))
        .with_status(200)
        .with_body(
            r#"{
                "self": "https://jira.example.com/rest/api/2/user?username=fred",
                "name": "fred f",
                "emailAddress": "fred@example.com",
                "displayName": "Fred F",
                "active": true,
                "timeZone": "Europe/Oslo",
                "avatarUrls": {"48x48": "https://jira.example.com/a48.png"}
            }"#,
        )
        .create();

    let user = create_jira_client(&server).get_user("fred f")?;

    m.assert();
    assert_eq!(user.display_name, "Fred F");
    assert!(user.active);
    Ok(())
}
