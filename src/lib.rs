//! Opens GitHub pull requests from in-memory content or local files.
//!
//! ```no_run
//! # async fn run() -> hypersonic::Result<()> {
//! use hypersonic::{Hypersonic, PartialPullRequestConfig};
//!
//! let client = Hypersonic::new("ghp_token")?;
//! let url = client
//!     .create_pr_from_content(
//!         "owner/repo",
//!         "hello",
//!         "docs/hello.txt",
//!         PartialPullRequestConfig::new().title("Add greeting"),
//!     )
//!     .await?;
//! println!("{}", url);
//! # Ok(())
//! # }
//! ```

mod http;

pub mod client;
pub mod config;
pub mod error;
pub mod fs;
pub mod git;
pub mod github;
pub mod pull_request;

pub use client::Hypersonic;
pub use config::{ClientConfig, Manifest};
pub use error::{Error, Result, Stage};
pub use fs::{FileSystem, TokioFileSystem};
pub use git::{apply_diff, local_diff};
pub use github::{Gateway, GatewayError, GithubGateway, RepositoryId};
pub use pull_request::{
    ChangeSet, MergeStrategy, PartialPullRequestConfig, PrConfigInput, PullRequestConfig,
};
