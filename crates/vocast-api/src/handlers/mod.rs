pub mod catalog;
pub mod delete;
pub mod health;
pub mod stream;
pub mod upload_request;
