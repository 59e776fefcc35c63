use std::sync::{Mutex, MutexGuard};

/// Every variable `ServerConfig::from_env` reads.
pub const CONFIG_VARS: [&str; 5] = ["THERMO_CONFIG", "HOST", "PORT", "APP_PORT", "RUST_LOG"];

static CONFIG_ENV: Mutex<()> = Mutex::new(());

/// Runs `f` with every configuration variable cleared, then `vars` applied.
///
/// Only names from [`CONFIG_VARS`] may be set. The host's values come back
/// once `f` returns or panics, and callers queue on a process-wide lock.
pub fn with_clean_config_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _env = ConfigEnv::isolate();
    for (name, value) in vars {
        assert!(
            CONFIG_VARS.contains(name),
            "{} is not a configuration variable",
            name
        );
        if let Some(value) = value {
            std::env::set_var(name, value);
        }
    }
    f()
}

/// Holds the lock and the host's configuration values for the duration of a test.
struct ConfigEnv {
    host: [Option<String>; 5],
    _lock: MutexGuard<'static, ()>,
}

impl ConfigEnv {
    fn isolate() -> Self {
        let lock = CONFIG_ENV
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let host = CONFIG_VARS.map(|name| std::env::var(name).ok());
        for name in CONFIG_VARS {
            std::env::remove_var(name);
        }
        Self { host, _lock: lock }
    }
}

impl Drop for ConfigEnv {
    fn drop(&mut self) {
        for (name, value) in CONFIG_VARS.iter().zip(self.host.iter_mut()) {
            match value.take() {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}
