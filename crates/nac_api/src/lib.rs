pub mod auth;
pub mod client;
pub mod error;
pub mod instances;
pub mod paging;
pub mod retry;
pub mod tasks;
pub mod users;
pub mod workflows;

pub use auth::{BearerToken, Credentials};
pub use client::NacClient;
pub use error::NacApiError;
pub use retry::RetryPolicy;
