mod caller;
mod jwt_claims;

pub use caller::*;
pub use jwt_claims::*;
