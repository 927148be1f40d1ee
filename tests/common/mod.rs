use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the codec.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see why messages fail to decode:
///   RUST_LOG=DEBUG
///
/// Or to follow every section and compression pointer:
///   RUST_LOG=dns_datagram=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
