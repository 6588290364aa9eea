mod access_token_service;
mod dto;
mod error;
mod google_access_token_service;

pub use access_token_service::*;
pub use dto::{GoogleAccessTokenServiceConfig, ServiceAccountKey};
pub use error::*;
pub use google_access_token_service::*;
