use serde::{de::IgnoredAny, Deserialize};

/// `GET /contents/{path}` answers with an object for a file and with an
/// array for a directory.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContentResponse {
    Directory(Vec<IgnoredAny>),
    File(FileContentResponse),
}

#[derive(Debug, Deserialize)]
pub struct FileContentResponse {
    pub sha: String,
    #[serde(default)]
    pub content: String,
}
