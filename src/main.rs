//! saltrun CLI entry point

fn main() {
    // Structured logging on stderr so stdout carries only records; RUST_LOG overrides the default filter
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    saltrun::cli::run();
}
