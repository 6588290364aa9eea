mod assertion_claims;
mod google_access_token_service_config;
mod service_account_key;
mod token_response;

pub use assertion_claims::*;
pub use google_access_token_service_config::*;
pub use service_account_key::*;
pub use token_response::*;
