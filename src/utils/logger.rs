use crate::config::LogFormat;
use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins; otherwise our own crate at info, or debug when verbose.
fn log_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "skill_board=debug,info"
    } else {
        "skill_board=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn plain_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

fn build_subscriber(
    verbose: bool,
    format: LogFormat,
) -> impl Subscriber + Send + Sync + 'static {
    let (compact, json) = match format {
        LogFormat::Compact => (Some(plain_layer().compact()), None),
        LogFormat::Json => (None, Some(plain_layer().json())),
    };

    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(compact)
        .with(json)
}

/// 依設定選擇 compact 或 JSON 輸出
pub fn init_logger(verbose: bool, format: LogFormat) {
    build_subscriber(verbose, format).init();
}
