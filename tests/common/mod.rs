use std::sync::Once;

static INIT: Once = Once::new();

/// Route library log output through env_logger once per test binary
pub fn init_logs() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
