mod auto_merge_request;
mod branch_ref_request;
mod labels_request;
mod pull_request_request;
mod reviewers_request;
mod upsert_file_request;

pub use auto_merge_request::AutoMergeRequest;
pub use branch_ref_request::BranchRefRequest;
pub use labels_request::LabelsRequest;
pub use pull_request_request::PullRequestRequest;
pub use reviewers_request::ReviewersRequest;
pub use upsert_file_request::UpsertFileRequest;

use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String, serde_json::Error>
    where
        Self: Serialize + Sized,
    {
        serde_json::to_string(&self)
    }
}

impl SerializeRequest for AutoMergeRequest {}
impl SerializeRequest for BranchRefRequest {}
impl SerializeRequest for LabelsRequest {}
impl SerializeRequest for PullRequestRequest {}
impl SerializeRequest for ReviewersRequest {}
impl SerializeRequest for UpsertFileRequest {}
