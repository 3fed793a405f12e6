use std::env;
use std::path::PathBuf;

use mouseflyer_core::DEFAULT_MAX_PROFILES;

const CONFIG_PATH_ENV: &str = "MOUSEFLYER_CONFIG_PATH";
const MAX_PROFILES_ENV: &str = "MOUSEFLYER_MAX_PROFILES";
const DEFAULT_CONFIG_PATH: &str = "config/MouseFlyer.json";
const PROFILE_LIMIT: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub config_path: PathBuf,
    pub max_profiles: usize,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let config_path = present(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let max_profiles = match present(MAX_PROFILES_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("{MAX_PROFILES_ENV} must be a whole number, got {raw:?}"))?,
            None => DEFAULT_MAX_PROFILES,
        };

        let config = Self {
            config_path,
            max_profiles,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_profiles == 0 {
            return Err(format!("{MAX_PROFILES_ENV} must be at least 1"));
        }
        if self.max_profiles > PROFILE_LIMIT {
            return Err(format!("{MAX_PROFILES_ENV} must be at most {PROFILE_LIMIT}"));
        }
        if self.config_path.as_os_str().is_empty() {
            return Err(format!("{CONFIG_PATH_ENV} must not be empty"));
        }
        Ok(())
    }
}
