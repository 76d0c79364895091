//!
//! ```rust,ignore
//! // 1. Using the builder with explicit configuration
//! let jira = Jira::builder()
//!     .host("https://jira.example.com")
//!     .basic_auth("username", "your_api_token")
//!     .timeout(30)
//!     .build()?;
//!
//! // 2. Using environment variables
//! let jira = Jira::builder()
//!     .from_env()
//!     .build()?;
//!
//! // 3. From a stored configuration, with a tweaked reqwest client
//! let jira = Jira::builder()
//!     .configuration(&cfg)
//!     .configure_client(|client| client.user_agent("my-tool/1.0"))
//!     .build()?;
//!
//! // 4. Bringing your own transport, credentials are then the transport's business
//! let jira = Jira::builder()
//!     .host("https://jira.example.com")
//!     .build_with(my_transport)?;
//! ```
use std::env;
use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, ClientBuilder};
use thiserror::Error;

use crate::{
    config::JiraClientConfiguration, Credentials, HttpTransport, Jira, JiraError, Transport, DEFAULT_ACTIVITY_PATH,
    DEFAULT_API_PATH,
};

/// Error type for JiraBuilder operations
#[derive(Error, Debug)]
pub enum JiraBuilderError {
    #[error("Environment variable {0} not set")]
    EnvVarNotSet(String),

    #[error("Invalid Jira host: {0}")]
    InvalidHost(#[source] JiraError),

    #[error("Jira client initialization error: {0}")]
    ClientInitError(#[from] reqwest::Error),

    #[error("Timeout must be positive")]
    InvalidTimeout,
}

/// Names of the environment variables used for Jira configuration
pub struct JiraEnvVars;

impl JiraEnvVars {
    pub const HOST: &'static str = "JIRA_HOST";
    pub const USER: &'static str = "JIRA_USER";
    pub const TOKEN: &'static str = "JIRA_TOKEN";
    pub const API_PATH: &'static str = "JIRA_API_PATH";
    pub const ACTIVITY_PATH: &'static str = "JIRA_ACTIVITY_PATH";
}

type ClientConfig = Box<dyn Fn(ClientBuilder) -> ClientBuilder>;

/// Builder for creating Jira client instances with flexible configuration options
#[derive(Default)]
pub struct JiraBuilder {
    host: Option<String>,
    api_path: Option<String>,
    activity_path: Option<String>,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
    client_config: Option<ClientConfig>,
}

impl JiraBuilder {
    /// Creates a new JiraBuilder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Jira host URL
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the path of the REST API, relative to the host (default is `rest/api/2`)
    #[must_use]
    pub fn api_path(mut self, path: impl Into<String>) -> Self {
        self.api_path = Some(path.into());
        self
    }

    /// Sets the path of the activity stream, relative to the host (default is `activity`)
    #[must_use]
    pub fn activity_path(mut self, path: impl Into<String>) -> Self {
        self.activity_path = Some(path.into());
        self
    }

    /// Sets basic authentication credentials
    #[must_use]
    pub fn basic_auth(mut self, username: impl Into<String>, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Basic(username.into(), token.into()));
        self
    }

    /// Sets OAuth/bearer token authentication
    #[must_use]
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Bearer(token.into()));
        self
    }

    /// Sets an overall request timeout, in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(Duration::from_secs(seconds));
        self
    }

    /// Advanced configuration of the underlying reqwest client
    #[must_use]
    pub fn configure_client<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(ClientBuilder) -> ClientBuilder + 'static,
    {
        self.client_config = Some(Box::new(config_fn));
        self
    }

    /// Takes host, credentials and paths from a stored client configuration
    #[must_use]
    pub fn configuration(self, cfg: &JiraClientConfiguration) -> Self {
        self.host(cfg.jira_url.as_str())
            .basic_auth(cfg.user.as_str(), cfg.token.as_str())
            .api_path(cfg.api_path.as_str())
            .activity_path(cfg.activity_path.as_str())
    }

    /// Picks up whatever configuration is found in the environment
    #[must_use]
    pub fn from_env(self) -> Self {
        let host = env::var(JiraEnvVars::HOST).ok();
        let user = env::var(JiraEnvVars::USER).ok();
        let token = env::var(JiraEnvVars::TOKEN).ok();
        let api_path = env::var(JiraEnvVars::API_PATH).ok();
        let activity_path = env::var(JiraEnvVars::ACTIVITY_PATH).ok();

        let mut builder = self;

        if let Some(host) = host {
            builder = builder.host(host);
        }
        if let Some(api_path) = api_path {
            builder = builder.api_path(api_path);
        }
        if let Some(activity_path) = activity_path {
            builder = builder.activity_path(activity_path);
        }
        if let (Some(user), Some(token)) = (user, token) {
            builder = builder.basic_auth(user, token);
        }

        builder
    }

    /// Builds a Jira client talking HTTP with the configured credentials
    ///
    /// # Errors
    /// When the host or the credentials are missing, the host is not a URL or the reqwest
    /// client can not be initialised.
    pub fn build(mut self) -> Result<Jira, JiraBuilderError> {
        let credentials = self.credentials.take().ok_or_else(|| {
            JiraBuilderError::EnvVarNotSet(format!("{} and {}", JiraEnvVars::USER, JiraEnvVars::TOKEN))
        })?;

        let mut client_builder = Client::builder();
        if let Some(timeout) = self.timeout {
            if timeout.is_zero() {
                return Err(JiraBuilderError::InvalidTimeout);
            }
            client_builder = client_builder.timeout(timeout);
        }
        if let Some(config_fn) = self.client_config.take() {
            client_builder = config_fn(client_builder);
        }
        let client = client_builder.build()?;

        self.build_with(HttpTransport::new(client, credentials))
    }

    /// Builds a Jira client sending its requests through `transport`.
    /// Credentials and timeout are ignored, as they belong to the transport.
    ///
    /// # Errors
    /// When the host is missing or not a URL
    pub fn build_with<T: Transport>(self, transport: T) -> Result<Jira<T>, JiraBuilderError> {
        let host = self
            .host
            .ok_or_else(|| JiraBuilderError::EnvVarNotSet(JiraEnvVars::HOST.to_string()))?;
        let api_path = self.api_path.unwrap_or_else(|| DEFAULT_API_PATH.to_string());
        let activity_path = self
            .activity_path
            .unwrap_or_else(|| DEFAULT_ACTIVITY_PATH.to_string());

        let jira = Jira::assemble(&host, &api_path, &activity_path, transport)
            .map_err(JiraBuilderError::InvalidHost)?;
        debug!("Created Jira client for {}", jira.host());

        Ok(jira)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_host_is_reported() {
        let err = JiraBuilder::new().basic_auth("fred", "t").build().unwrap_err();
        assert!(matches!(err, JiraBuilderError::EnvVarNotSet(ref name) if name == JiraEnvVars::HOST));
    }

    #[test]
    fn missing_credentials_are_reported() {
        let err = JiraBuilder::new().host("https://jira.example.com").build().unwrap_err();
        assert!(matches!(err, JiraBuilderError::EnvVarNotSet(_)));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = JiraBuilder::new()
            .host("https://jira.example.com")
            .bearer_auth("t")
            .timeout(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, JiraBuilderError::InvalidTimeout));
    }

    #[test]
    fn custom_paths_are_used() -> Result<(), Box<dyn std::error::Error>> {
        let jira = JiraBuilder::new()
            .host("https://jira.example.com")
            .api_path("rest/api/latest")
            .credentials(Credentials::Anonymous)
            .build()?;
        assert_eq!(
            jira.api_url("/myself")?.as_str(),
            "https://jira.example.com/rest/api/latest/myself"
        );
        Ok(())
    }

    #[test]
    fn garbage_host_is_rejected() {
        let err = JiraBuilder::new()
            .host("jira.example.com")
            .credentials(Credentials::Anonymous)
            .build()
            .unwrap_err();
        assert!(matches!(err, JiraBuilderError::InvalidHost(JiraError::Url(_))));
    }
}
