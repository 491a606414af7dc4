pub mod request;
pub mod response;

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client, RequestBuilder,
};
use serde::Deserialize;
use std::ops::Deref;
use thiserror::Error;

pub const DEFAULT_USER_AGENT: &str = "hypersonic";
const GITHUB_API_VERSION: &str = "2022-11-28";

pub struct HttpClient {
    client: Client,
    token: String,
    user_agent: String,
}

impl HttpClient {
    pub fn new(token: impl Into<String>, user_agent: Option<&str>) -> Self {
        HttpClient {
            client: Client::new(),
            token: token.into(),
            user_agent: user_agent.unwrap_or(DEFAULT_USER_AGENT).to_owned(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, client: &HttpClient) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, client: &HttpClient) -> RequestBuilder {
        self.bearer_auth(client.token())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, client.user_agent())
            .header(CONTENT_TYPE, "application/json")
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("path '{0}' points to a directory")]
    Directory(String),
    #[error("failed to decode file content: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("file content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("graphql request failed: {0}")]
    GraphQl(String),
}

impl Error {
    /// HTTP status reported by the API, if the failure came with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn error_message(text: &str) -> String {
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(body) => body.message,
        Err(_) => text.trim().to_owned(),
    }
}

pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        Ok(text)
    }
}

/// Percent-encodes every segment of a repository path, keeping the slashes.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

macro_rules! get {
    ($client:expr, $url:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        let client: &$crate::http::HttpClient = $client;
        client
            .get($url)
            .default_headers(client)
            .send()
            .await
            .handle()
            .await
    }};
}

macro_rules! post {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        let client: &$crate::http::HttpClient = $client;
        client
            .post($url)
            .default_headers(client)
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

macro_rules! put {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        let client: &$crate::http::HttpClient = $client;
        client
            .put($url)
            .default_headers(client)
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

pub(crate) use {get, post, put};
