//!
//! `jira_rest` is a blocking client for the Jira REST interface and the Jira activity stream.
//!
//! It covers issue lookup, searching for issues assigned to a user, user lookup, reading
//! activity feeds and keeping named attachments on an issue in sync with local files.
//!
//! ```rust,ignore
//! let jira = Jira::builder()
//!     .host("https://jira.example.com")
//!     .basic_auth("fred", "secret")
//!     .build()?;
//!
//! let page = jira.search_issues_by_assignee("fred", 50, 0)?;
//! println!("page {} of {}", page.pagination.page + 1, page.pagination.page_count);
//!
//! jira.update_attachment("TIME-148", "target/report.xlsx")?;
//! ```
//!
//! Every operation performs its requests in sequence on the calling thread. The HTTP layer is
//! the [`Transport`] handed to the client, which makes it possible to run the client against
//! something other than a live Jira.
use log::debug;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use config::JiraClientConfiguration;
use models::{issue::{Issue, IssueList}, user::User};

pub mod activity;
pub mod attachment;
pub mod builder;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod transport;

pub use builder::{JiraBuilder, JiraBuilderError};
pub use error::{Errors, JiraError};
pub use pagination::Pagination;
pub use transport::{Credentials, HttpTransport, Payload, Request, Response, Transport};

pub type Result<T> = std::result::Result<T, JiraError>;

pub const DEFAULT_API_PATH: &str = "rest/api/2";
pub const DEFAULT_ACTIVITY_PATH: &str = "activity";

#[derive(Clone, Debug)]
pub struct Jira<T: Transport = HttpTransport> {
    host: Url,
    api_path: String,
    activity_path: String,
    transport: T,
}

impl Jira<HttpTransport> {
    /// Client for `host` using the default API and activity paths
    #[allow(clippy::missing_errors_doc)]
    pub fn new<H>(host: H, credentials: Credentials) -> Result<Jira>
    where
        H: Into<String>,
    {
        let client = reqwest::blocking::Client::builder().build()?;
        Jira::with_transport(host, HttpTransport::new(client, credentials))
    }

    /// Client for the instance described by a stored configuration
    #[allow(clippy::missing_errors_doc)]
    pub fn from_config(cfg: &JiraClientConfiguration) -> std::result::Result<Jira, JiraBuilderError> {
        Jira::builder().configuration(cfg).build()
    }

    /// Create a Jira client builder
    #[must_use]
    pub fn builder() -> JiraBuilder {
        JiraBuilder::new()
    }
}

impl<T: Transport> Jira<T> {
    /// Client for `host` sending all its requests through `transport`
    #[allow(clippy::missing_errors_doc)]
    pub fn with_transport<H>(host: H, transport: T) -> Result<Jira<T>>
    where
        H: Into<String>,
    {
        Jira::assemble(&host.into(), DEFAULT_API_PATH, DEFAULT_ACTIVITY_PATH, transport)
    }

    pub(crate) fn assemble(
        host: &str,
        api_path: &str,
        activity_path: &str,
        transport: T,
    ) -> Result<Jira<T>> {
        // A host without trailing slash would have its last path segment replaced by `join`
        let mut host = Url::parse(host)?;
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }
        Ok(Jira {
            host,
            api_path: api_path.trim_matches('/').to_string(),
            activity_path: activity_path.trim_matches('/').to_string(),
            transport,
        })
    }

    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute url of a REST resource, `endpoint` being something like `/issue/TIME-1`
    #[allow(clippy::missing_errors_doc)]
    pub fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.host.join(&format!("{}{endpoint}", self.api_path))?)
    }

    fn activity_url(&self) -> Result<Url> {
        Ok(self.host.join(&self.activity_path)?)
    }

    fn send(&self, request: Request) -> Result<Response> {
        debug!("{} {}", request.method, request.url);
        self.transport.execute(request)
    }

    fn request<D>(&self, method: Method, endpoint: &str) -> Result<D>
    where
        D: DeserializeOwned,
    {
        let url = self.api_url(endpoint)?;
        let response = self.send(Request::new(method, url.clone()))?;

        if !response.status.is_success() {
            return Err(JiraError::from_status(response.status, &response.body, url.as_str()));
        }
        let data: &[u8] = if response.body.is_empty() { b"null" } else { &response.body };
        Ok(serde_json::from_slice::<D>(data)?)
    }

    /// GETs any REST resource below the API path and deserializes the answer
    #[allow(clippy::missing_errors_doc)]
    pub fn get<D>(&self, endpoint: &str) -> Result<D>
    where
        D: DeserializeOwned,
    {
        self.request::<D>(Method::GET, endpoint)
    }

    /// Issues a DELETE and hands back the status, leaving its interpretation to the caller
    fn delete(&self, endpoint: &str) -> Result<StatusCode> {
        let url = self.api_url(endpoint)?;
        Ok(self.send(Request::new(Method::DELETE, url))?.status)
    }

    /// Retrieves an issue by its id or key
    ///
    /// # Errors
    /// [`JiraError::IssueNotFound`] if Jira answers 404
    pub fn get_issue(&self, id: &str) -> Result<Issue> {
        match self.get::<Issue>(&format!("/issue/{id}")) {
            Err(JiraError::NotFound(_)) => Err(JiraError::IssueNotFound(id.to_string())),
            other => other,
        }
    }

    /// Searches for issues assigned to `user`, one page at a time.
    ///
    /// The returned list holds the raw counters reported by Jira together with the
    /// [`Pagination`] computed from them.
    ///
    /// # Errors
    /// [`JiraError::InvalidArgument`] if `max_results` is zero, before anything is sent
    pub fn search_issues_by_assignee(
        &self,
        user: &str,
        max_results: u32,
        start_at: u32,
    ) -> Result<IssueList> {
        if max_results == 0 {
            return Err(JiraError::InvalidArgument(
                "max_results must be greater than zero".to_string(),
            ));
        }
        let jql = format!("assignee=\"{user}\"");
        let resource = format!(
            "/search?jql={}&startAt={start_at}&maxResults={max_results}",
            urlencoding::encode(&jql)
        );

        let mut issues = self.get::<IssueList>(&resource)?;
        issues.pagination =
            Pagination::compute(issues.total, issues.start_at, issues.max_results)?;
        debug!(
            "Found {} issues assigned to {}, page {} of {}",
            issues.total, user, issues.pagination.page, issues.pagination.page_count
        );
        Ok(issues)
    }

    /// Looks up a user by user name
    #[allow(clippy::missing_errors_doc)]
    pub fn get_user(&self, username: &str) -> Result<User> {
        self.get::<User>(&format!("/user?username={}", urlencoding::encode(username)))
    }

    /// The user the client is authenticated as
    #[allow(clippy::missing_errors_doc)]
    pub fn get_current_user(&self) -> Result<User> {
        self.get::<User>("/myself")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    impl Transport for Unreachable {
        fn execute(&self, _request: Request) -> Result<Response> {
            panic!("no request expected")
        }

        fn download(
            &self,
            _url: &Url,
            _sink: &mut dyn std::io::Write,
        ) -> Result<(StatusCode, u64)> {
            panic!("no download expected")
        }
    }

    #[test]
    fn api_url_keeps_context_path() -> Result<()> {
        let jira = Jira::with_transport("https://example.com/jira", Unreachable)?;
        assert_eq!(
            jira.api_url("/issue/TIME-1")?.as_str(),
            "https://example.com/jira/rest/api/2/issue/TIME-1"
        );
        Ok(())
    }

    #[test]
    fn paths_are_normalised() -> Result<()> {
        let jira = Jira::assemble("https://example.com/", "/rest/api/latest/", "/plugins/activity/", Unreachable)?;
        assert_eq!(
            jira.api_url("/myself")?.as_str(),
            "https://example.com/rest/api/latest/myself"
        );
        assert_eq!(
            jira.activity_url()?.as_str(),
            "https://example.com/plugins/activity"
        );
        Ok(())
    }

    #[test]
    fn invalid_host_is_rejected() {
        assert!(matches!(
            Jira::with_transport("not a url", Unreachable),
            Err(JiraError::Url(_))
        ));
    }

    #[test]
    fn zero_page_size_is_rejected_before_searching() {
        let jira = Jira::with_transport("https://example.com", Unreachable).unwrap();
        assert!(matches!(
            jira.search_issues_by_assignee("fred", 0, 0),
            Err(JiraError::InvalidArgument(_))
        ));
    }
}
