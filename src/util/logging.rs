use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Installs the global subscriber. `RUST_LOG` wins; `fallback` applies when it is unset.
pub fn init_logging(fallback: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(fallback.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true) // shows the module path
        .with_level(true)
        .with_writer(std::io::stderr) // stdout carries the response payload
        .init();
}
