use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct BranchRefRequest {
    pub r#ref: String,
    pub sha: String,
}

impl BranchRefRequest {
    pub fn new(branch: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            r#ref: format!("refs/heads/{}", branch.into()),
            sha: sha.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefix_branch_with_heads_ref() {
        let request = BranchRefRequest::new("update-1", "abc123");

        assert_eq!(request.r#ref, "refs/heads/update-1");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"ref":"refs/heads/update-1","sha":"abc123"}"#
        );
    }
}
