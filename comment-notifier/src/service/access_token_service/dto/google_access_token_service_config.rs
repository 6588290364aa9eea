use super::ServiceAccountKey;

pub struct GoogleAccessTokenServiceConfig {
    pub service_account_key: ServiceAccountKey,
    pub scope: String,
}
