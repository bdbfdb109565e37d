use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "fridgefriend_match=warn",
        Verbosity::Normal => "fridgefriend_match=info",
        Verbosity::Verbose => "fridgefriend_match=debug",
    }
}

/// Installs the stderr fmt subscriber. `RUST_LOG` wins unless a flag was given.
pub fn init(verbosity: Verbosity) {
    let filter = match verbosity {
        Verbosity::Normal => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity))),
        _ => EnvFilter::new(default_directive(verbosity)),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
