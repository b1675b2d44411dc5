/// Set up the tracing subscriber for the whole process.
/// Safe to call more than once; only the first call installs the subscriber,
/// so test binaries can initialize freely.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .json()
        );

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::info!("Logging ready");
    }
}
