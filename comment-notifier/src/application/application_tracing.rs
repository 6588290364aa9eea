use super::ApplicationEnv;
use anyhow::anyhow;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Used when `RUST_LOG` is not set. Dependencies (mongodb, hyper) stay at `info`.
const DEFAULT_CONSOLE_DIRECTIVES: &str = "info,comment_notifier=debug";

pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<()> {
    let console_directives = std::env::var(EnvFilter::DEFAULT_ENV)
        .unwrap_or_else(|_| DEFAULT_CONSOLE_DIRECTIVES.to_string());
    let console_filter = EnvFilter::builder().parse(console_directives)?;
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(console_filter);

    let file_appender =
        RollingFileAppender::new(env.log_rotation.clone(), &env.log_directory, &env.log_filename);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(())
}

pub fn parse_log_rotation(rotation: &str) -> anyhow::Result<Rotation> {
    match rotation.trim().to_ascii_lowercase().as_str() {
        "minutely" => Ok(Rotation::MINUTELY),
        "hourly" => Ok(Rotation::HOURLY),
        "daily" => Ok(Rotation::DAILY),
        "never" => Ok(Rotation::NEVER),
        other => Err(anyhow!("unknown log rotation: {other}")),
    }
}
