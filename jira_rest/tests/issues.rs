mod test_helpers;

use jira_rest::JiraError;
use mockito::{Matcher, Server};
use test_helpers::jira_client::{create_jira_client, issue_json, BASIC_AUTH};

#[test]
fn get_issue_success() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/rest/api/2/issue/TIME-148")
        .match_header("authorization", BASIC_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(issue_json(&server, &[("1", "Report.PDF")]))
        .create();

    let jira = create_jira_client(&server);
    let issue = jira.get_issue("TIME-148")?;

    m.assert();
    assert_eq!(issue.key, "TIME-148");
    assert_eq!(issue.fields.summary, "Monthly report");
    assert_eq!(issue.attachments()[0].filename, "Report.PDF");
    assert!(issue.created_at().is_some());
    Ok(())
}

#[test]
fn get_issue_not_found() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/rest/api/2/issue/NOPE-1")
        .with_status(404)
        .with_body(r#"{"errorMessages": ["Issue does not exist"], "errors": {}}"#)
        .create();

    let jira = create_jira_client(&server);
    match jira.get_issue("NOPE-1") {
        Err(JiraError::IssueNotFound(id)) => assert_eq!(id, "NOPE-1"),
        other => panic!("Expected IssueNotFound, got {other:?}"),
    }
}

#[test]
fn search_by_assignee_computes_pagination() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("jql".into(), "assignee=\"fred\"".into()),
            Matcher::UrlEncoded("startAt".into(), "50".into()),
            Matcher::UrlEncoded("maxResults".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body(format!(
            r#"{{"expand": "schema,names", "startAt": 50, "maxResults": 50, "total": 101, "issues": [{}]}}"#,
            issue_json(&server, &[])
        ))
        .create();

    let jira = create_jira_client(&server);
    let result = jira.search_issues_by_assignee("fred", 50, 50)?;

    m.assert();
    assert_eq!(result.total, 101);
    assert_eq!(result.start_at, 50);
    assert_eq!(result.max_results, 50);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.pagination.page, 1);
    assert_eq!(result.pagination.page_count, 3);
    assert_eq!(result.pagination.pages, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn search_fault_carries_jira_messages() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"errorMessages": ["The value 'nobody' does not exist for the field 'assignee'."], "errors": {}}"#)
        .create();

    let jira = create_jira_client(&server);
    match jira.search_issues_by_assignee("nobody", 10, 0) {
        Err(JiraError::Fault { status, errors }) => {
            assert_eq!(status, 400);
            assert!(errors.error_messages[0].contains("nobody"));
        }
        other => panic!("Expected a fault, got {other:?}"),
    }
}

#[test]
fn unauthorized_is_reported() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/rest/api/2/issue/TIME-148")
        .with_status(401)
        .create();

    let jira = create_jira_client(&server);
    assert!(matches!(jira.get_issue("TIME-148"), Err(JiraError::Unauthorized)));
}
