use tracing::Level;

// Logs go to stderr so they never interleave with the menu printed on stdout.
pub fn setup_tracing(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
