use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl GraphQlResponse {
    pub fn error_message(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }

        Some(
            self.errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
