use std::sync::LazyLock;

use derive_from_env::FromEnv;

/// Environment configuration, read once from `REGLOG_*` variables.
#[derive(FromEnv, Debug, Clone, PartialEq, Eq)]
#[from_env(prefix = "REGLOG")]
#[allow(non_snake_case)]
pub struct ReglogConfig {
    /// Upper bound, in bytes, of a single date conversion in a record header.
    #[from_env(default = "63")]
    pub DATE_FIELD_MAX_LEN: usize,
    /// Call `sync_data` on the record file after each write.
    #[from_env(default = "false")]
    pub SYNC_ON_WRITE: bool,
}

impl Default for ReglogConfig {
    fn default() -> Self {
        Self {
            DATE_FIELD_MAX_LEN: 63,
            SYNC_ON_WRITE: false,
        }
    }
}

pub static REGLOG_CONFIG: LazyLock<ReglogConfig> = LazyLock::new(|| {
    ReglogConfig::from_env().unwrap_or_else(|err| {
        log::warn!("invalid REGLOG_* environment, falling back to defaults: {err:?}");
        ReglogConfig::default()
    })
});

#[test]
fn test_default_config_matches_env_defaults() {
    let config = ReglogConfig::default();
    assert_eq!(config.DATE_FIELD_MAX_LEN, 63);
    assert!(!config.SYNC_ON_WRITE);
}
