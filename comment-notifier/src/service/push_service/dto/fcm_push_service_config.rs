use url::Url;

pub struct FcmPushServiceConfig {
    pub base_url: Url,
    pub project_id: String,
}
