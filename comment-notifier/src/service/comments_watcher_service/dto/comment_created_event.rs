use crate::dto::input;
use bson::{Bson, Document};
use serde::Deserialize;

///
/// Trigger context built from a document inserted into `comments`
///
#[derive(Debug, PartialEq)]
pub struct CommentCreatedEvent {
    pub product_id: String,
    pub comment_id: String,
    pub comment: input::Comment,
}

#[derive(Deserialize)]
struct CommentInsertedEntity {
    _id: Bson,
    product_id: String,
    username: String,
    comment: String,
}

impl TryFrom<Document> for CommentCreatedEvent {
    type Error = bson::de::Error;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        let entity = bson::from_document::<CommentInsertedEntity>(value)?;

        let comment_id = match entity._id {
            Bson::String(id) => id,
            Bson::ObjectId(id) => id.to_hex(),
            id => id.to_string(),
        };

        Ok(Self {
            product_id: entity.product_id,
            comment_id,
            comment: input::Comment {
                username: entity.username,
                comment: entity.comment,
            },
        })
    }
}
