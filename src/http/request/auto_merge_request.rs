use serde::Serialize;

const ENABLE_AUTO_MERGE_MUTATION: &str = "mutation($pullRequestId: ID!, $mergeMethod: PullRequestMergeMethod!) { enablePullRequestAutoMerge(input: {pullRequestId: $pullRequestId, mergeMethod: $mergeMethod}) { clientMutationId } }";

/// GraphQL body for `enablePullRequestAutoMerge`; the REST API has no
/// equivalent endpoint.
#[derive(Debug, Serialize)]
pub struct AutoMergeRequest {
    pub query: &'static str,
    pub variables: AutoMergeVariables,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoMergeVariables {
    pub pull_request_id: String,
    pub merge_method: &'static str,
}

impl AutoMergeRequest {
    pub fn new(pull_request_id: impl Into<String>, merge_method: &'static str) -> Self {
        Self {
            query: ENABLE_AUTO_MERGE_MUTATION,
            variables: AutoMergeVariables {
                pull_request_id: pull_request_id.into(),
                merge_method,
            },
        }
    }
}
