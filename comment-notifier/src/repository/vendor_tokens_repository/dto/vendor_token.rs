use crate::repository::{vendor_tokens_repository::entity::VendorTokenFindEntity, Error};
use bson::Bson;

#[derive(Debug, Clone, PartialEq)]
pub struct VendorToken {
    pub product_id: String,

    /// Opaque push destination
    pub token: String,
}

impl TryFrom<VendorTokenFindEntity> for VendorToken {
    type Error = Error;

    fn try_from(value: VendorTokenFindEntity) -> Result<Self, Self::Error> {
        match value.token {
            Some(Bson::String(token)) if !token.is_empty() => Ok(Self {
                product_id: value._id,
                token,
            }),
            Some(Bson::String(_)) => Err(Error::MalformedDocument("token is empty")),
            Some(_) => Err(Error::MalformedDocument("token is not a string")),
            None => Err(Error::MalformedDocument("token is missing")),
        }
    }
}
