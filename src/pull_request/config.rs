use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_TITLE: &str = "Automated changes";
const DEFAULT_BASE_BRANCH_NAME: &str = "main";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    Merge,
    #[default]
    Squash,
    Rebase,
}

impl MergeStrategy {
    /// Name of the matching `PullRequestMergeMethod` GraphQL enum value.
    pub fn graphql_name(&self) -> &'static str {
        match self {
            MergeStrategy::Merge => "MERGE",
            MergeStrategy::Squash => "SQUASH",
            MergeStrategy::Rebase => "REBASE",
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStrategy::Merge => write!(f, "merge"),
            MergeStrategy::Squash => write!(f, "squash"),
            MergeStrategy::Rebase => write!(f, "rebase"),
        }
    }
}

/// How a pull request is opened and what happens to it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestConfig {
    #[serde(default = "PullRequestConfig::default_title")]
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "PullRequestConfig::default_base_branch_name")]
    pub base_branch: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub reviewers: Vec<String>,
    #[serde(default)]
    pub team_reviewers: Vec<String>,
    #[serde(default)]
    pub merge_strategy: MergeStrategy,
    #[serde(default = "PullRequestConfig::default_delete_branch_on_merge")]
    pub delete_branch_on_merge: bool,
    #[serde(default)]
    pub auto_merge: bool,
    pub commit_message: Option<String>,
}

impl Default for PullRequestConfig {
    fn default() -> Self {
        PullRequestConfig {
            title: PullRequestConfig::default_title(),
            description: None,
            base_branch: PullRequestConfig::default_base_branch_name(),
            draft: false,
            labels: vec![],
            reviewers: vec![],
            team_reviewers: vec![],
            merge_strategy: MergeStrategy::default(),
            delete_branch_on_merge: PullRequestConfig::default_delete_branch_on_merge(),
            auto_merge: false,
            commit_message: None,
        }
    }
}

impl PullRequestConfig {
    fn default_title() -> String {
        DEFAULT_TITLE.to_owned()
    }

    fn default_base_branch_name() -> String {
        DEFAULT_BASE_BRANCH_NAME.to_owned()
    }

    fn default_delete_branch_on_merge() -> bool {
        true
    }

    /// Commit message for one file of the change set.
    pub fn commit_message_for(&self, path: &str, content: &str) -> String {
        match &self.commit_message {
            Some(message) => message.to_owned(),
            None if content.is_empty() => format!("Delete {}", path),
            None => format!("Update {}", path),
        }
    }
}

/// A configuration layer where every field may be left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialPullRequestConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub base_branch: Option<String>,
    pub draft: Option<bool>,
    pub labels: Option<Vec<String>>,
    pub reviewers: Option<Vec<String>>,
    pub team_reviewers: Option<Vec<String>>,
    pub merge_strategy: Option<MergeStrategy>,
    pub delete_branch_on_merge: Option<bool>,
    pub auto_merge: Option<bool>,
    pub commit_message: Option<String>,
}

impl PartialPullRequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn base_branch(mut self, base_branch: impl Into<String>) -> Self {
        self.base_branch = Some(base_branch.into());
        self
    }

    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn reviewers<I, S>(mut self, reviewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reviewers = Some(reviewers.into_iter().map(Into::into).collect());
        self
    }

    pub fn team_reviewers<I, S>(mut self, team_reviewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team_reviewers = Some(team_reviewers.into_iter().map(Into::into).collect());
        self
    }

    pub fn merge_strategy(mut self, merge_strategy: MergeStrategy) -> Self {
        self.merge_strategy = Some(merge_strategy);
        self
    }

    pub fn delete_branch_on_merge(mut self, delete_branch_on_merge: bool) -> Self {
        self.delete_branch_on_merge = Some(delete_branch_on_merge);
        self
    }

    pub fn auto_merge(mut self, auto_merge: bool) -> Self {
        self.auto_merge = Some(auto_merge);
        self
    }

    pub fn commit_message(mut self, commit_message: impl Into<String>) -> Self {
        self.commit_message = Some(commit_message.into());
        self
    }
}

impl From<PullRequestConfig> for PartialPullRequestConfig {
    fn from(config: PullRequestConfig) -> Self {
        PartialPullRequestConfig {
            title: Some(config.title),
            description: config.description,
            base_branch: Some(config.base_branch),
            draft: Some(config.draft),
            labels: Some(config.labels),
            reviewers: Some(config.reviewers),
            team_reviewers: Some(config.team_reviewers),
            merge_strategy: Some(config.merge_strategy),
            delete_branch_on_merge: Some(config.delete_branch_on_merge),
            auto_merge: Some(config.auto_merge),
            commit_message: config.commit_message,
        }
    }
}

/// Per-call configuration: either a complete config or a set of overrides,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrConfigInput {
    Config(PullRequestConfig),
    Overrides(PartialPullRequestConfig),
}

impl PrConfigInput {
    /// Builds the input from sources that may carry both shapes at once.
    pub fn from_parts(
        config: Option<PullRequestConfig>,
        overrides: Option<PartialPullRequestConfig>,
    ) -> Result<Self> {
        match (config, overrides) {
            (Some(_), Some(_)) => Err(Error::Configuration(
                "cannot provide both a full config and discrete overrides".to_owned(),
            )),
            (Some(config), None) => Ok(PrConfigInput::Config(config)),
            (None, overrides) => Ok(PrConfigInput::Overrides(overrides.unwrap_or_default())),
        }
    }
}

impl Default for PrConfigInput {
    fn default() -> Self {
        PrConfigInput::Overrides(PartialPullRequestConfig::default())
    }
}

impl From<PullRequestConfig> for PrConfigInput {
    fn from(config: PullRequestConfig) -> Self {
        PrConfigInput::Config(config)
    }
}

impl From<PartialPullRequestConfig> for PrConfigInput {
    fn from(overrides: PartialPullRequestConfig) -> Self {
        PrConfigInput::Overrides(overrides)
    }
}
