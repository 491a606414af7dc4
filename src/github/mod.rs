//! Remote repository operations the pull request flow is built from.
//!
//! [`Gateway`] is the seam between the orchestration in
//! [`crate::client`] and the wire; [`GithubGateway`] implements it
//! against the GitHub REST and GraphQL APIs.

pub mod dto;
pub mod github_client;

use crate::pull_request::MergeStrategy;
use dto::pull_request_dto::PullRequestDto;
use std::fmt;

pub use crate::http::Error as GatewayError;
pub use github_client::GithubGateway;

/// `owner/name` pair. Anything after the first `/` is the name; malformed
/// identifiers are passed through and rejected by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl RepositoryId {
    pub fn parse(repo: &str) -> Self {
        let (owner, name) = repo.split_once('/').unwrap_or((repo, ""));

        RepositoryId {
            owner: owner.to_owned(),
            name: name.to_owned(),
        }
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

pub trait Gateway {
    async fn get_default_branch(&self, repo: &RepositoryId) -> Result<String, GatewayError>;

    /// Creates `branch` pointing at the head commit of `base`.
    async fn create_branch(
        &self,
        repo: &RepositoryId,
        branch: &str,
        base: &str,
    ) -> Result<(), GatewayError>;

    async fn get_file_content(
        &self,
        repo: &RepositoryId,
        path: &str,
        reference: Option<&str>,
    ) -> Result<String, GatewayError>;

    /// Creates the file, or updates it when it already exists on `branch`.
    async fn upsert_file(
        &self,
        repo: &RepositoryId,
        path: &str,
        content: &str,
        message: &str,
        branch: &str,
    ) -> Result<(), GatewayError>;

    /// Opens the pull request and returns its HTML URL.
    async fn create_pull_request(
        &self,
        repo: &RepositoryId,
        pull_request: PullRequestDto,
    ) -> Result<String, GatewayError>;

    async fn add_labels(
        &self,
        repo: &RepositoryId,
        number: u64,
        labels: &[String],
    ) -> Result<(), GatewayError>;

    async fn add_reviewers(
        &self,
        repo: &RepositoryId,
        number: u64,
        reviewers: &[String],
        team_reviewers: &[String],
    ) -> Result<(), GatewayError>;

    async fn enable_auto_merge(
        &self,
        repo: &RepositoryId,
        number: u64,
        strategy: MergeStrategy,
    ) -> Result<(), GatewayError>;
}
