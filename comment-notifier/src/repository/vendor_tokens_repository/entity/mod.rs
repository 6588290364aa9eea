mod vendor_token_find_entity;

pub use vendor_token_find_entity::*;
