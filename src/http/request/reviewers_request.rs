use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewersRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team_reviewers: Vec<String>,
}

impl ReviewersRequest {
    pub fn new(reviewers: Vec<String>, team_reviewers: Vec<String>) -> Self {
        Self {
            reviewers,
            team_reviewers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_omit_empty_team_reviewers() {
        let request = ReviewersRequest::new(vec!["octocat".to_owned()], vec![]);

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"reviewers":["octocat"]}"#
        );
    }
}
