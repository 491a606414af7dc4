use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub html_url: String,
    #[serde(default)]
    pub node_id: String,
}
