use bson::Bson;
use serde::Deserialize;

///
/// Raw token record. `token` is kept untyped so that
/// a malformed record can be reported instead of failing the whole query.
///
#[derive(Deserialize)]
pub struct VendorTokenFindEntity {
    pub _id: String,

    pub token: Option<Bson>,
}
