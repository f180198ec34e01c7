use std::sync::LazyLock;

use derive_from_env::FromEnv;

use crate::level::LogLevel;

#[derive(FromEnv)]
#[from_env(prefix = "LINELOG")]
#[allow(non_snake_case)]
pub struct LinelogConfig {
    #[from_env(default = "INFO")]
    pub LEVEL: String,
}

pub static LINELOG_CONFIG: LazyLock<LinelogConfig> =
    LazyLock::new(|| LinelogConfig::from_env().unwrap());

/// Threshold used by [`Logger::new`](crate::Logger::new) when no explicit
/// level is given: `LINELOG_LEVEL` if set and recognized, `Info` otherwise.
pub fn default_level() -> LogLevel {
    LINELOG_CONFIG.LEVEL.parse().unwrap_or(LogLevel::Info)
}
