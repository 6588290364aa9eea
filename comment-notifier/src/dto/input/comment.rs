use serde::Deserialize;

///
/// Snapshot of a newly created comment.
/// Fields are used verbatim, without any validation.
///
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub username: String,
    pub comment: String,
}
