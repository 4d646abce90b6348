//! Logger bootstrap
//!
//! Library code logs through the `log` facade only. The browser build routes
//! records to the developer console; native builds use `env_logger`, which
//! honors `RUST_LOG`. Calling [`init`] more than once is harmless.

use log::LevelFilter;

/// Default level when nothing else is configured
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};
    use wasm_bindgen::JsValue;
    use web_sys::console;

    pub struct ConsoleLogger;

    pub static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
            match record.level() {
                Level::Error => console::error_1(&line),
                Level::Warn => console::warn_1(&line),
                Level::Info => console::info_1(&line),
                Level::Debug | Level::Trace => console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }
}

/// Install the console logger at `level`
#[cfg(target_arch = "wasm32")]
pub fn init_with_level(level: LevelFilter) {
    if log::set_logger(&console::LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Install `env_logger`, falling back to `level` when `RUST_LOG` is unset
#[cfg(not(target_arch = "wasm32"))]
pub fn init_with_level(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

pub fn init() {
    init_with_level(DEFAULT_LEVEL);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_level(LevelFilter::Debug);
        log::info!("logger initialized twice without panicking");
    }
}
