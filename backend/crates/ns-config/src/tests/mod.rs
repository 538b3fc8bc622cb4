
use std::env;

use tempfile::TempDir;

/// Variables that `Config::load` reads and a developer shell may already export
const IDENTITY_ENV_VARS: [&str; 2] = ["AZURE_AD_TENANT_ID", "NILESEAT_ADMIN_EMAIL"];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point NS_CONFIG_DIR at it and hide
/// identity-provider variables inherited from the shell.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set("NS_CONFIG_DIR", temp.path().to_str().unwrap())];
    guards.extend(IDENTITY_ENV_VARS.into_iter().map(EnvGuard::remove));
    (temp, guards)
}

pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
}
