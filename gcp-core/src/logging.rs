use tracing_subscriber::fmt::format::FmtSpan;

// Chart values go to stdout, so all the logs have to go somewhere else
pub fn setup_for_cli(env_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(env_filter)
        .without_time()
        .compact()
        .init();
}
