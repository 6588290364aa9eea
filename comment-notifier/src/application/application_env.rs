use super::parse_log_rotation;
use crate::auth::{parse_jwt_algorithms, parse_jwt_key};
use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::{net::SocketAddr, path::PathBuf, time::Duration};
use tracing_appender::rolling::Rotation;
use url::Url;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,
    pub log_rotation: Rotation,

    pub bind_address: SocketAddr,
    pub max_http_content_len: usize,

    pub db_connection_string: String,
    pub db_name: String,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,

    /// Must end with '/' so relative API paths are appended to it
    pub fcm_base_url: Url,
    pub fcm_credentials_file: PathBuf,

    pub watch_comments: bool,
    pub watch_retry_interval: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("COMMENT_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("COMMENT_NOTIFIER_LOG_FILENAME")?;
        let log_rotation = parse_log_rotation(&Self::env_var("COMMENT_NOTIFIER_LOG_ROTATION")?)?;
        let bind_address = Self::env_var("COMMENT_NOTIFIER_BIND_ADDRESS")?.parse()?;
        let max_http_content_len =
            Self::env_var("COMMENT_NOTIFIER_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let db_connection_string = Self::env_var("COMMENT_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("COMMENT_NOTIFIER_DB_NAME")?;
        let jwt_algorithms =
            parse_jwt_algorithms(&Self::env_var("COMMENT_NOTIFIER_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "COMMENT_NOTIFIER_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, &Self::env_var("COMMENT_NOTIFIER_JWT_KEY")?)?;
        let fcm_base_url = Url::parse(&Self::env_var("COMMENT_NOTIFIER_FCM_BASE_URL")?)?;
        if !fcm_base_url.path().ends_with('/') {
            anyhow::bail!("COMMENT_NOTIFIER_FCM_BASE_URL must end with '/'");
        }
        let fcm_credentials_file = Self::env_var("COMMENT_NOTIFIER_FCM_CREDENTIALS_FILE")?.into();
        let watch_comments = Self::env_var("COMMENT_NOTIFIER_WATCH_COMMENTS")?.parse()?;
        let watch_retry_interval =
            Self::env_var("COMMENT_NOTIFIER_WATCH_RETRY_INTERVAL")?.parse()?;
        let watch_retry_interval = Duration::from_secs(watch_retry_interval);

        Ok(Self {
            log_directory,
            log_filename,
            log_rotation,
            bind_address,
            max_http_content_len,
            db_connection_string,
            db_name,
            jwt_algorithms,
            jwt_key,
            fcm_base_url,
            fcm_credentials_file,
            watch_comments,
            watch_retry_interval,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
