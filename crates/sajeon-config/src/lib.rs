use std::env;

use serde::{Deserialize, Serialize};

use sajeon_types::types::{DictType, SearchMode};

/// Lookup client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub dict_type: DictType,
    pub search_mode: SearchMode,
    /// Browser identity string, handed through to the transport unchanged.
    pub impersonate: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            dict_type: DictType::Hanja,
            search_mode: SearchMode::Simple,
            impersonate: "chrome136".to_string(),
        }
    }
}

impl ClientConfig {
    /// Read overrides from `SAJEON_*` environment variables, keeping the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let dict_type = env::var("SAJEON_DICT")
            .ok()
            .and_then(|v| DictType::from_code(&v))
            .unwrap_or(defaults.dict_type);

        let search_mode = env::var("SAJEON_SEARCH_MODE")
            .ok()
            .and_then(|v| SearchMode::from_name(&v))
            .unwrap_or(defaults.search_mode);

        let impersonate = env::var("SAJEON_IMPERSONATE").unwrap_or(defaults.impersonate);

        Self {
            dict_type,
            search_mode,
            impersonate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.dict_type, DictType::Hanja);
        assert_eq!(config.search_mode, SearchMode::Simple);
        assert_eq!(config.impersonate, "chrome136");
    }

    // Sole test touching the SAJEON_* variables, so no cross-test races.
    #[test]
    fn test_from_env_overrides() {
        unsafe {
            env::set_var("SAJEON_DICT", "enko");
            env::set_var("SAJEON_SEARCH_MODE", "detailed");
            env::set_var("SAJEON_IMPERSONATE", "chrome101");
        }
        let config = ClientConfig::from_env();
        assert_eq!(config.dict_type, DictType::English);
        assert_eq!(config.search_mode, SearchMode::Detailed);
        assert_eq!(config.impersonate, "chrome101");

        // Unparseable values keep the defaults, set values still apply.
        unsafe {
            env::set_var("SAJEON_DICT", "klingon");
            env::set_var("SAJEON_SEARCH_MODE", "verbose");
        }
        let config = ClientConfig::from_env();
        assert_eq!(config.dict_type, DictType::Hanja);
        assert_eq!(config.search_mode, SearchMode::Simple);
        assert_eq!(config.impersonate, "chrome101");

        unsafe {
            env::remove_var("SAJEON_DICT");
            env::remove_var("SAJEON_SEARCH_MODE");
            env::remove_var("SAJEON_IMPERSONATE");
        }
        let config = ClientConfig::from_env();
        assert_eq!(config.dict_type, DictType::Hanja);
        assert_eq!(config.search_mode, SearchMode::Simple);
        assert_eq!(config.impersonate, "chrome136");
    }

    #[test]
    fn test_config_serializes() {
        let config = ClientConfig {
            dict_type: DictType::English,
            search_mode: SearchMode::Detailed,
            impersonate: "chrome101".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dict_type, DictType::English);
        assert_eq!(back.search_mode, SearchMode::Detailed);
        assert_eq!(back.impersonate, "chrome101");
    }
}
