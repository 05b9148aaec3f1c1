use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::env::get_env_bool;

const DEFAULT_LOG_FILTER: &str = "info";

pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    let builder = if get_env_bool("LOG_PERF").unwrap_or(false) {
        builder.with_span_events(FmtSpan::CLOSE)
    } else {
        builder
    };

    if get_env_bool("LOG_JSON").unwrap_or(false) {
        builder.json().init();
    } else {
        builder.init();
    };
}
