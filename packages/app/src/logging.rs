use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with an env-filtered stdout layer.
/// `log_level` is the fallback directive when `JIBU_LOG` is unset.
pub fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_env("JIBU_LOG")
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .init();
}
