mod dto;
mod entity;
mod vendor_tokens_repository;
mod vendor_tokens_repository_impl;

pub use dto::VendorToken;
pub use vendor_tokens_repository::*;
pub use vendor_tokens_repository_impl::*;
