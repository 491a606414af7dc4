pub mod pull_request_dto;
