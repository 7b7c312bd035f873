use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

fn lock(cell: &'static OnceLock<Mutex<()>>) -> MutexGuard<'static, ()> {
    cell.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Serializes tests that touch process environment variables.
pub fn env_lock() -> MutexGuard<'static, ()> {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    lock(&ENV_LOCK)
}

/// Serializes tests that read back the shared message line.
pub fn message_lock() -> MutexGuard<'static, ()> {
    static MESSAGE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    lock(&MESSAGE_LOCK)
}

/// Serializes tests that drive the shared progress indicator.
pub fn progress_lock() -> MutexGuard<'static, ()> {
    static PROGRESS_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    lock(&PROGRESS_LOCK)
}

pub struct EnvVarGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: String) -> Self {
        let original = env::var(key).ok();
        env::set_var(key, value);
        Self { key, original }
    }

    pub fn remove(key: &'static str) -> Self {
        let original = env::var(key).ok();
        env::remove_var(key);
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(value) = &self.original {
            env::set_var(self.key, value);
        } else {
            env::remove_var(self.key);
        }
    }
}
