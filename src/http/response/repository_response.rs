use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RepositoryResponse {
    pub default_branch: String,
}
