pub use log::Level;

/// Anything that can take a diagnostic line.
pub trait Logger {
    fn log(&self, level: Level, message: &str);
}

/// Forwards to the `log` facade.
pub struct LogFacade;

impl Logger for LogFacade {
    fn log(&self, level: Level, message: &str) {
        log::log!(level, "{message}");
    }
}

/// Installs `env_logger` writing to stdout. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();
}
