use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "chromeify=info";

/// Install a stderr `fmt` subscriber. `verbose` raises the default level to
/// debug; `RUST_LOG` still wins when set. Safe to call more than once.
pub fn init(verbose: bool) {
    let default = if verbose {
        "chromeify=debug"
    } else {
        DEFAULT_FILTER
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
