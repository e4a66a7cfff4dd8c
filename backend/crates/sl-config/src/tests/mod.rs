
use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads, cleared per test so the host
/// environment cannot leak into assertions.
const OVERRIDE_VARS: &[&str] = &[
    "AZURE_DEVOPS_ORGANIZATION",
    "AZURE_DEVOPS_PROJECT",
    "AZURE_DEVOPS_PAT",
    "AZURE_DEVOPS_AREA_PATH",
    "AZURE_DEVOPS_ITERATION_PATH",
    "AZURE_DEVOPS_API_VERSION",
    "AZURE_DEVOPS_BASE_URL",
    "AZURE_DEVOPS_AUTH_SCHEME",
    "AZURE_DEVOPS_TIMEOUT_SECS",
    "STORYLINE_MODE",
    "STORYLINE_TRANSPORT",
    "STORYLINE_HTTP_HOST",
    "STORYLINE_HTTP_PORT",
    "STORYLINE_LOG_LEVEL",
    "STORYLINE_LOG_FILE",
    "STORYLINE_LOG_COLORED",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        unsafe { env::set_var(key, value) };
        Self { key, original }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let original = env::var(key).ok();
        unsafe { env::remove_var(key) };
        Self { key, original }
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

/// Temp config directory wired through STORYLINE_CONFIG_DIR, with every
/// override variable cleared. Keep the returned guards alive for the test.
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestEnv {
    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = OVERRIDE_VARS.iter().copied().map(EnvGuard::remove).collect();
    guards.push(EnvGuard::set(
        crate::CONFIG_DIR_ENV,
        dir.path().to_str().unwrap(),
    ));
    TestEnv {
        dir,
        _guards: guards,
    }
}
