use std::sync::Once;

use simplelog::{Config, LevelFilter, TestLogger};

static INIT: Once = Once::new();

/// Routes `log` output through the test harness's captured stdout.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = TestLogger::init(LevelFilter::Debug, Config::default());
    });
}
