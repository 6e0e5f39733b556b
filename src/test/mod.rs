//! Helpers shared by the unit tests.


/// Routes `log` output through the test harness so it shows up with `--nocapture`. Safe to call
/// from every test; only the first call installs the logger.
pub(crate) fn init_logging() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}
