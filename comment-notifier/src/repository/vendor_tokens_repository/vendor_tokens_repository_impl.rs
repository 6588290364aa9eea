use super::{entity::VendorTokenFindEntity, VendorToken, VendorTokensRepository};
use crate::repository;
use axum::async_trait;
use bson::doc;
use mongodb::Database;

const VENDOR_TOKENS: &str = "vendor_tokens";

pub struct VendorTokensRepositoryImpl {
    database: Database,
}

impl VendorTokensRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl VendorTokensRepository for VendorTokensRepositoryImpl {
    async fn find(&self, product_id: &str) -> Result<Option<VendorToken>, repository::Error> {
        let entity = self
            .database
            .collection::<VendorTokenFindEntity>(VENDOR_TOKENS)
            .find_one(doc! {
                "_id": product_id,
            })
            .await?;

        entity.map(VendorToken::try_from).transpose()
    }
}
