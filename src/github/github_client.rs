use super::{dto::pull_request_dto::PullRequestDto, Gateway, GatewayError, RepositoryId};
use crate::{
    http::{
        encode_path, get, post, put,
        request::{
            AutoMergeRequest, BranchRefRequest, LabelsRequest, PullRequestRequest,
            ReviewersRequest, SerializeRequest, UpsertFileRequest,
        },
        response::{
            ContentResponse, GraphQlResponse, PullRequest, RefResponse, RepositoryResponse,
        },
        HttpClient,
    },
    pull_request::MergeStrategy,
};
use base64::{prelude::BASE64_STANDARD, Engine};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
const ENTERPRISE_REST_SUFFIX: &str = "/api/v3";

/// [`Gateway`] over the GitHub REST API, scoped to one token and host.
pub struct GithubGateway {
    http: HttpClient,
    base_url: String,
}

impl GithubGateway {
    pub fn new(
        token: impl Into<String>,
        base_url: impl Into<String>,
        user_agent: Option<&str>,
    ) -> Self {
        let base_url: String = base_url.into();

        GithubGateway {
            http: HttpClient::new(token, user_agent),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn repo_url(&self, repo: &RepositoryId) -> String {
        format!(
            "{}/repos/{}/{}",
            self.base_url,
            urlencoding::encode(&repo.owner),
            urlencoding::encode(&repo.name)
        )
    }

    fn contents_url(&self, repo: &RepositoryId, path: &str, reference: Option<&str>) -> String {
        let uri = format!("{}/contents/{}", self.repo_url(repo), encode_path(path));

        match reference {
            Some(reference) => format!("{}?ref={}", uri, urlencoding::encode(reference)),
            None => uri,
        }
    }

    /// GitHub Enterprise serves REST under `/api/v3` and GraphQL under
    /// `/api/graphql`.
    fn graphql_url(&self) -> String {
        match self.base_url.strip_suffix(ENTERPRISE_REST_SUFFIX) {
            Some(host) => format!("{}/api/graphql", host),
            None => format!("{}/graphql", self.base_url),
        }
    }

    async fn file_sha(
        &self,
        repo: &RepositoryId,
        path: &str,
        branch: &str,
    ) -> Result<Option<String>, GatewayError> {
        let uri = self.contents_url(repo, path, Some(branch));

        let response = match get!(&self.http, &uri) {
            Ok(response) => response,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };

        match serde_json::from_str::<ContentResponse>(&response)? {
            ContentResponse::Directory(_) => Err(GatewayError::Directory(path.to_owned())),
            ContentResponse::File(file) => Ok(Some(file.sha)),
        }
    }
}

impl Gateway for GithubGateway {
    async fn get_default_branch(&self, repo: &RepositoryId) -> Result<String, GatewayError> {
        log::debug!("Getting default branch of {}", repo);
        let response = get!(&self.http, &self.repo_url(repo))?;

        let repository = serde_json::from_str::<RepositoryResponse>(&response)?;

        Ok(repository.default_branch)
    }

    async fn create_branch(
        &self,
        repo: &RepositoryId,
        branch: &str,
        base: &str,
    ) -> Result<(), GatewayError> {
        log::debug!("Creating branch {} from {}", branch, base);
        let uri = format!(
            "{}/git/ref/heads/{}",
            self.repo_url(repo),
            encode_path(base)
        );

        let response = get!(&self.http, &uri)?;
        let base_ref = serde_json::from_str::<RefResponse>(&response)?;

        let uri = format!("{}/git/refs", self.repo_url(repo));
        let body = BranchRefRequest::new(branch, base_ref.object.sha).into_request()?;

        post!(&self.http, &uri, body)?;

        Ok(())
    }

    async fn get_file_content(
        &self,
        repo: &RepositoryId,
        path: &str,
        reference: Option<&str>,
    ) -> Result<String, GatewayError> {
        let response = get!(&self.http, &self.contents_url(repo, path, reference))?;

        match serde_json::from_str::<ContentResponse>(&response)? {
            ContentResponse::Directory(_) => Err(GatewayError::Directory(path.to_owned())),
            ContentResponse::File(file) => {
                let encoded = file
                    .content
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>();
                let bytes = BASE64_STANDARD.decode(encoded)?;

                Ok(String::from_utf8(bytes)?)
            }
        }
    }

    async fn upsert_file(
        &self,
        repo: &RepositoryId,
        path: &str,
        content: &str,
        message: &str,
        branch: &str,
    ) -> Result<(), GatewayError> {
        let sha = self.file_sha(repo, path, branch).await?;

        if sha.is_some() {
            log::debug!("Updating file {}", path);
        } else {
            log::debug!("Creating new file {}", path);
        }

        let body = UpsertFileRequest::new(message, content, branch, sha).into_request()?;

        put!(&self.http, &self.contents_url(repo, path, None), body)?;

        Ok(())
    }

    async fn create_pull_request(
        &self,
        repo: &RepositoryId,
        pull_request: PullRequestDto,
    ) -> Result<String, GatewayError> {
        log::debug!("Creating pull request {} -> {}", pull_request.head, pull_request.base);
        let uri = format!("{}/pulls", self.repo_url(repo));

        let body = PullRequestRequest::new(
            pull_request.title,
            pull_request.head,
            pull_request.base,
            pull_request.body,
            pull_request.draft,
        )
        .into_request()?;

        let response = post!(&self.http, &uri, body)?;
        let pr = serde_json::from_str::<PullRequest>(&response)?;

        Ok(pr.html_url)
    }

    async fn add_labels(
        &self,
        repo: &RepositoryId,
        number: u64,
        labels: &[String],
    ) -> Result<(), GatewayError> {
        let uri = format!("{}/issues/{}/labels", self.repo_url(repo), number);
        let body = LabelsRequest::new(labels.to_vec()).into_request()?;

        post!(&self.http, &uri, body)?;

        Ok(())
    }

    async fn add_reviewers(
        &self,
        repo: &RepositoryId,
        number: u64,
        reviewers: &[String],
        team_reviewers: &[String],
    ) -> Result<(), GatewayError> {
        let uri = format!("{}/pulls/{}/requested_reviewers", self.repo_url(repo), number);
        let body =
            ReviewersRequest::new(reviewers.to_vec(), team_reviewers.to_vec()).into_request()?;

        post!(&self.http, &uri, body)?;

        Ok(())
    }

    async fn enable_auto_merge(
        &self,
        repo: &RepositoryId,
        number: u64,
        strategy: MergeStrategy,
    ) -> Result<(), GatewayError> {
        log::debug!("Enabling {} auto-merge on #{}", strategy, number);
        let uri = format!("{}/pulls/{}", self.repo_url(repo), number);

        let response = get!(&self.http, &uri)?;
        let pr = serde_json::from_str::<PullRequest>(&response)?;

        let body = AutoMergeRequest::new(pr.node_id, strategy.graphql_name()).into_request()?;
        let response = post!(&self.http, &self.graphql_url(), body)?;

        let response = serde_json::from_str::<GraphQlResponse>(&response)?;
        match response.error_message() {
            Some(message) => Err(GatewayError::GraphQl(message)),
            None => Ok(()),
        }
    }
}
