mod vendor_token;

pub use vendor_token::*;
