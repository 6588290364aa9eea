#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed document: {0}")]
    MalformedDocument(&'static str),

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
