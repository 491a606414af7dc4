mod change_set;
mod config;
mod reference;
mod resolver;

pub use change_set::ChangeSet;
pub use config::{MergeStrategy, PartialPullRequestConfig, PrConfigInput, PullRequestConfig};
pub use reference::{pull_request_number, working_branch_name};
pub use resolver::{resolve, ResolvedConfig};
