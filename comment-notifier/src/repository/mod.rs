mod error;
mod vendor_tokens_repository;

pub use error::*;
pub use vendor_tokens_repository::*;
