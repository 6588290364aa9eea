use serde::Serialize;

const NEW_COMMENT_TITLE: &str = "New Comment";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PushNotification {
    pub title: String,
    pub body: String,
}

impl PushNotification {
    /// `username` and `comment` are interpolated verbatim
    pub fn new_comment(username: &str, comment: &str) -> Self {
        Self {
            title: NEW_COMMENT_TITLE.to_string(),
            body: format!(r#"{username} commented: "{comment}""#),
        }
    }
}
