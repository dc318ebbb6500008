//! Logging setup for tests.

/// Install the env_logger backend.  Safe to call from every test; only the
/// first call does anything.
pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}
