use super::PushNotification;
use serde::Serialize;

///
/// Body of FCM HTTP v1 `messages:send`
///
#[derive(Serialize)]
pub struct FcmSendRequest<'a> {
    pub message: FcmMessage<'a>,
}

#[derive(Serialize)]
pub struct FcmMessage<'a> {
    pub token: &'a str,
    pub notification: &'a PushNotification,
}
