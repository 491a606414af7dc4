use crate::{
    config::ClientConfig,
    error::{Error, Result, Stage},
    fs::{FileSystem, TokioFileSystem},
    github::{dto::pull_request_dto::PullRequestDto, Gateway, GithubGateway, RepositoryId},
    pull_request::{
        pull_request_number, resolve, working_branch_name, ChangeSet, PrConfigInput,
        PullRequestConfig,
    },
};
use std::path::Path;

/// Opens pull requests from in-memory content or local files.
///
/// Every operation runs one sequential chain of remote calls: resolve the
/// base branch, create a working branch, commit each file, open the pull
/// request, then attach labels, reviewers and auto-merge as configured. A
/// failing step ends the call; whatever was already created remotely is left
/// in place.
pub struct Hypersonic<G = GithubGateway, F = TokioFileSystem> {
    config: ClientConfig,
    github: G,
    fs: F,
}

impl Hypersonic {
    /// Client for the public GitHub API.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let github = GithubGateway::new(
            &config.github_token,
            &config.base_url,
            config.app_name.as_deref(),
        );

        Ok(Hypersonic {
            config,
            github,
            fs: TokioFileSystem,
        })
    }
}

impl<G, F> Hypersonic<G, F>
where
    G: Gateway,
    F: FileSystem,
{
    pub fn from_parts(config: ClientConfig, github: G, fs: F) -> Result<Self> {
        config.validate()?;

        Ok(Hypersonic { config, github, fs })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn create_pr_from_content(
        &self,
        repo: &str,
        content: impl Into<String>,
        path: impl Into<String>,
        input: impl Into<PrConfigInput>,
    ) -> Result<String> {
        let changes = ChangeSet::new().with(path, content);

        self.create_pr(repo, changes, input.into()).await
    }

    pub async fn create_pr_from_multiple_contents(
        &self,
        repo: &str,
        contents: impl Into<ChangeSet>,
        input: impl Into<PrConfigInput>,
    ) -> Result<String> {
        let changes = contents.into();
        if changes.is_empty() {
            return Err(Error::Validation("No files provided".to_owned()));
        }

        self.create_pr(repo, changes, input.into()).await
    }

    pub async fn create_pr_from_file(
        &self,
        repo: &str,
        local_path: impl AsRef<Path>,
        remote_path: impl Into<String>,
        input: impl Into<PrConfigInput>,
    ) -> Result<String> {
        let content = self.read_local_file(local_path.as_ref()).await?;

        self.create_pr_from_content(repo, content, remote_path, input)
            .await
    }

    /// Reads every `local -> remote` file before touching the repository, so
    /// a single unreadable file aborts the whole call.
    pub async fn create_pr_from_files<I, P, S>(
        &self,
        repo: &str,
        files: I,
        input: impl Into<PrConfigInput>,
    ) -> Result<String>
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<Path>,
        S: Into<String>,
    {
        let files = files.into_iter().collect::<Vec<_>>();
        if files.is_empty() {
            return Err(Error::Validation("No files provided".to_owned()));
        }

        let changes = self.read_files_into(ChangeSet::new(), files).await?;

        self.create_pr(repo, changes, input.into()).await
    }

    /// Appends the content of each `local -> remote` file to `changes`, in
    /// order. A remote path already present keeps its position.
    pub async fn read_files_into<I, P, S>(&self, mut changes: ChangeSet, files: I) -> Result<ChangeSet>
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<Path>,
        S: Into<String>,
    {
        for (local_path, remote_path) in files {
            let content = self.read_local_file(local_path.as_ref()).await?;
            changes.insert(remote_path, content);
        }

        Ok(changes)
    }

    pub async fn get_file_content(
        &self,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<String> {
        let repo = RepositoryId::parse(repo);

        self.github
            .get_file_content(&repo, path, reference)
            .await
            .map_err(Error::gateway(Stage::ReadRemoteFile(path.to_owned())))
    }

    async fn read_local_file(&self, path: &Path) -> Result<String> {
        log::debug!("Reading {}", path.display());

        self.fs
            .read_text_file(path)
            .await
            .map_err(|source| Error::LocalIo {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn create_pr(&self, repo: &str, changes: ChangeSet, input: PrConfigInput) -> Result<String> {
        let repo = RepositoryId::parse(repo);
        let config = resolve(&self.config.default_pr_config, &input);

        let base = match config.explicit_base_branch() {
            Some(base) => base.to_owned(),
            None => self
                .github
                .get_default_branch(&repo)
                .await
                .map_err(Error::gateway(Stage::ResolveBaseBranch))?,
        };

        let branch = working_branch_name();
        log::debug!("Working on {} from {} in {}", branch, base, repo);
        self.github
            .create_branch(&repo, &branch, &base)
            .await
            .map_err(Error::gateway(Stage::CreateBranch(branch.clone())))?;

        for (path, content) in changes.iter() {
            let message = config.commit_message_for(path, content);

            self.github
                .upsert_file(&repo, path, content, &message, &branch)
                .await
                .map_err(Error::gateway(Stage::UpdateFile(path.to_owned())))?;
        }

        let pull_request = PullRequestDto::new(
            &config.title,
            config.description.as_deref().unwrap_or_default(),
            &branch,
            &base,
            config.draft,
        );
        let url = self
            .github
            .create_pull_request(&repo, pull_request)
            .await
            .map_err(Error::gateway(Stage::CreatePullRequest))?;

        log::info!("Opened pull request {}", url);

        self.apply_extras(&repo, &url, &config).await?;

        Ok(url)
    }

    async fn apply_extras(&self, repo: &RepositoryId, url: &str, config: &PullRequestConfig) -> Result<()> {
        let number = pull_request_number(url)?;

        if !config.labels.is_empty() {
            log::debug!("Adding labels to #{}", number);
            self.github
                .add_labels(repo, number, &config.labels)
                .await
                .map_err(Error::gateway(Stage::AddLabels))?;
        }

        if !config.reviewers.is_empty() {
            log::debug!("Requesting reviewers for #{}", number);
            self.github
                .add_reviewers(repo, number, &config.reviewers, &config.team_reviewers)
                .await
                .map_err(Error::gateway(Stage::AddReviewers))?;
        }

        if config.auto_merge {
            self.github
                .enable_auto_merge(repo, number, config.merge_strategy)
                .await
                .map_err(Error::gateway(Stage::EnableAutoMerge))?;
        }

        Ok(())
    }
}
