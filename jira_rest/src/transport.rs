//! The HTTP seam of the client.
//!
//! [`Jira`](crate::Jira) never talks to the network itself; it hands a [`Request`] to whatever
//! [`Transport`] it was created with. [`HttpTransport`] is the blocking `reqwest` implementation
//! used in production, tests inject their own.
use std::{
    fs::File,
    io::{self, Write},
};

use log::debug;
use reqwest::{
    blocking::{
        multipart::{Form, Part},
        Client, RequestBuilder,
    },
    header::ACCEPT,
    Method, StatusCode,
};
use url::Url;

use crate::Result;

/// Name of the multipart field Jira expects uploaded attachments in
pub const ATTACHMENT_FIELD: &str = "file";

#[derive(Clone, Debug)]
pub enum Credentials {
    Anonymous,
    Basic(String, String),
    Bearer(String),
}

impl Credentials {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::Anonymous => request,
            Credentials::Basic(ref user, ref pass) => {
                request.basic_auth(user.to_owned(), Some(pass.to_owned()))
            }
            Credentials::Bearer(ref token) => request.bearer_auth(token.to_owned()),
        }
    }
}

/// Body of an outgoing request
#[derive(Debug)]
pub enum Payload {
    Empty,
    /// A single file sent as `multipart/form-data`.
    /// The handle is owned by the payload and closed once the request has been sent.
    File { file_name: String, file: File },
}

#[derive(Debug)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    /// Value of the `Accept` header
    pub accept: &'static str,
    pub payload: Payload,
}

impl Request {
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Request {
            method,
            url,
            accept: "application/json",
            payload: Payload::Empty,
        }
    }

    #[must_use]
    pub fn accepting(mut self, media_type: &'static str) -> Self {
        self.accept = media_type;
        self
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }
}

/// Raw outcome of a request, before any interpretation of the status
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Performs a single authenticated, blocking request.
///
/// Implementations must not retry and must not interpret the status code; a transport error
/// is only reported when no response was obtained at all.
pub trait Transport {
    #[allow(clippy::missing_errors_doc)]
    fn execute(&self, request: Request) -> Result<Response>;

    /// Issues a GET against `url` and streams the body into `sink`.
    ///
    /// The body is only copied when the status is a success, in which case the number of bytes
    /// written is returned alongside it.
    #[allow(clippy::missing_errors_doc)]
    fn download(&self, url: &Url, sink: &mut dyn Write) -> Result<(StatusCode, u64)>;
}

/// [`Transport`] backed by the blocking `reqwest` client
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    credentials: Credentials,
}

impl HttpTransport {
    #[must_use]
    pub fn new(client: Client, credentials: Credentials) -> Self {
        HttpTransport {
            client,
            credentials,
        }
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: Request) -> Result<Response> {
        let mut builder = self
            .credentials
            .apply(self.client.request(request.method, request.url))
            .header(ACCEPT, request.accept);

        builder = match request.payload {
            Payload::Empty => builder,
            Payload::File { file_name, file } => {
                let length = file.metadata()?.len();
                let part = Part::reader_with_length(file, length).file_name(file_name);
                builder
                    .header("X-Atlassian-Token", "nocheck")
                    .multipart(Form::new().part(ATTACHMENT_FIELD, part))
            }
        };
        debug!("request '{:?}'", builder);

        let response = builder.send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        debug!("status {:?} body '{}'", status, String::from_utf8_lossy(&body));

        Ok(Response { status, body })
    }

    fn download(&self, url: &Url, sink: &mut dyn Write) -> Result<(StatusCode, u64)> {
        debug!("Downloading {}", url);
        let mut response = self.credentials.apply(self.client.get(url.clone())).send()?;
        let status = response.status();
        if !status.is_success() {
            debug!("Download of {} answered {}", url, status);
            return Ok((status, 0));
        }
        let written = io::copy(&mut response, sink)?;
        debug!("{} bytes downloaded.", written);
        Ok((status, written))
    }
}
