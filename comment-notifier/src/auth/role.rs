use strum::{AsRefStr, IntoStaticStr};

#[derive(AsRefStr, IntoStaticStr)]
pub enum Role {
    /// Allowed to deliver comment creation events
    #[strum(serialize = "comment_notifier_trigger")]
    TriggerNotifications,
}
