use crate::{
    error::{Error, Result},
    github::github_client::DEFAULT_BASE_URL,
    pull_request::{PartialPullRequestConfig, PrConfigInput, PullRequestConfig},
};
use serde::{Deserialize, Serialize};
use std::{env, path::Path};

const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
const BASE_URL_ENV_VAR: &str = "GITHUB_API_URL";

pub const DEFAULT_MANIFEST_FILE_NAME: &str = "hypersonic.yaml";

/// Settings shared by every call made through one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub github_token: String,
    pub base_url: String,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub default_pr_config: PartialPullRequestConfig,
}

impl ClientConfig {
    pub fn new(github_token: impl Into<String>) -> Self {
        ClientConfig {
            github_token: github_token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            app_name: None,
            default_pr_config: PartialPullRequestConfig::default(),
        }
    }

    /// Reads the token from `GITHUB_TOKEN` and, if set, the API host from
    /// `GITHUB_API_URL`.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_ENV_VAR)
            .map_err(|_| Error::Configuration(format!("{} must be set", TOKEN_ENV_VAR)))?;

        let config = ClientConfig::new(token);

        Ok(match env::var(BASE_URL_ENV_VAR) {
            Ok(base_url) if !base_url.is_empty() => config.base_url(base_url),
            _ => config,
        })
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn default_pr_config(mut self, config: impl Into<PartialPullRequestConfig>) -> Self {
        self.default_pr_config = config.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.github_token.is_empty() {
            return Err(Error::Configuration("GitHub token is required".to_owned()));
        }

        if self.base_url.is_empty() {
            return Err(Error::Configuration("base URL is required".to_owned()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub local: String,
    pub remote: String,
}

/// Description of one pull request, as read by the `hypersonic` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub repository: String,
    pub base_url: Option<String>,
    pub app_name: Option<String>,
    #[serde(default)]
    pub defaults: PartialPullRequestConfig,
    pub pull_request: Option<PullRequestConfig>,
    pub overrides: Option<PartialPullRequestConfig>,
    #[serde(default)]
    pub contents: Vec<ContentEntry>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

impl Manifest {
    pub async fn load(path: impl AsRef<Path>) -> Result<Manifest> {
        let path = path.as_ref();
        let manifest_string =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| Error::LocalIo {
                    path: path.to_path_buf(),
                    source,
                })?;

        Manifest::parse(&manifest_string)
    }

    pub fn parse(manifest: &str) -> Result<Manifest> {
        serde_yaml::from_str::<Manifest>(manifest)
            .map_err(|err| Error::Configuration(format!("invalid manifest: {}", err)))
    }

    /// Applies the manifest's host, app name and defaults on top of `config`.
    pub fn client_config(&self, config: ClientConfig) -> ClientConfig {
        let config = match &self.base_url {
            Some(base_url) => config.base_url(base_url),
            None => config,
        };
        let config = match &self.app_name {
            Some(app_name) => config.app_name(app_name),
            None => config,
        };

        config.default_pr_config(self.defaults.clone())
    }

    pub fn pr_input(&self) -> Result<PrConfigInput> {
        PrConfigInput::from_parts(self.pull_request.clone(), self.overrides.clone())
    }
}
