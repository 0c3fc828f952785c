
use simplelog::{Config, LevelFilter, TestLogger};

/// Route the crate's log output through the test harness
fn init_logger() {
    // Only the first call in the process succeeds
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
