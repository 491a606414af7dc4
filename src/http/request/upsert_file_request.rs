use base64::{prelude::BASE64_STANDARD, Engine};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UpsertFileRequest {
    pub message: String,
    pub content: String,
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl UpsertFileRequest {
    /// `content` is the plain file text; it is base64 encoded here.
    pub fn new(
        message: impl Into<String>,
        content: &str,
        branch: impl Into<String>,
        sha: Option<String>,
    ) -> Self {
        Self {
            message: message.into(),
            content: BASE64_STANDARD.encode(content.as_bytes()),
            branch: branch.into(),
            sha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_content_and_skip_missing_sha() {
        let request = UpsertFileRequest::new("Update a.txt", "hello", "update-1", None);

        assert_eq!(request.content, "aGVsbG8=");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "message": "Update a.txt",
                "content": "aGVsbG8=",
                "branch": "update-1"
            })
        );
    }

    #[test]
    fn should_encode_empty_content_as_empty_string() {
        let request =
            UpsertFileRequest::new("Delete a.txt", "", "update-1", Some("sha1".to_owned()));

        assert_eq!(request.content, "");
        assert_eq!(request.sha.as_deref(), Some("sha1"));
    }
}
