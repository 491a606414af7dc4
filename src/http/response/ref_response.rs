use super::object::Object;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RefResponse {
    pub object: Object,
}
