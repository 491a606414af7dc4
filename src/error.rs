use crate::github::GatewayError;
use std::{fmt, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("{0}")]
    Validation(String),
    #[error("failed to {stage}: {source}")]
    Gateway {
        stage: Stage,
        #[source]
        source: GatewayError,
    },
    #[error("invalid PR reference format: {reference}")]
    Protocol { reference: String },
    #[error("failed to read {}: {source}", path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("git operation failed: {0}")]
    Git(#[from] git2::Error),
}

impl Error {
    pub(crate) fn gateway(stage: Stage) -> impl FnOnce(GatewayError) -> Error {
        move |source| Error::Gateway { stage, source }
    }

    /// HTTP status of the underlying gateway failure, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Gateway { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn stage(&self) -> Option<&Stage> {
        match self {
            Error::Gateway { stage, .. } => Some(stage),
            _ => None,
        }
    }
}

/// Steps of a pull request creation, in the order they run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    ResolveBaseBranch,
    CreateBranch(String),
    UpdateFile(String),
    CreatePullRequest,
    AddLabels,
    AddReviewers,
    EnableAutoMerge,
    ReadRemoteFile(String),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ResolveBaseBranch => write!(f, "resolve default branch"),
            Stage::CreateBranch(branch) => write!(f, "create branch '{}'", branch),
            Stage::UpdateFile(path) => write!(f, "update file '{}'", path),
            Stage::CreatePullRequest => write!(f, "create pull request"),
            Stage::AddLabels => write!(f, "add labels"),
            Stage::AddReviewers => write!(f, "add reviewers"),
            Stage::EnableAutoMerge => write!(f, "enable auto-merge"),
            Stage::ReadRemoteFile(path) => write!(f, "read remote file '{}'", path),
        }
    }
}
