use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Log lines go to stderr so they never mix
/// with table or JSON output on stdout.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` when verbose.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
