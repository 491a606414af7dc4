mod content_response;
mod graphql_response;
mod object;
mod pull_request_response;
mod ref_response;
mod repository_response;

pub use content_response::{ContentResponse, FileContentResponse};
pub use graphql_response::GraphQlResponse;
pub use object::Object;
pub use pull_request_response::PullRequest;
pub use ref_response::RefResponse;
pub use repository_response::RepositoryResponse;
