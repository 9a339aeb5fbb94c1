use serde::{Deserialize, Serialize};
use codec::file::toml_file;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyringConfig {
    #[serde(default = "default::prefix")]
    pub default_prefix: String,
    #[serde(default = "default::l1_prefix")]
    pub l1_prefix: String,
    #[serde(default = "default::celestia_prefix")]
    pub celestia_prefix: String,
}

impl Default for KeyringConfig {
    fn default() -> Self {
        Self {
            default_prefix: default::prefix(),
            l1_prefix: default::l1_prefix(),
            celestia_prefix: default::celestia_prefix(),
        }
    }
}

pub fn load_keyring_config(path: &str) -> Result<KeyringConfig, Error> {
    let config: KeyringConfig = toml_file::toml_file_read(path).map_err(Error::load_keyring_config)?;
    Ok(config)
}

pub mod default {
    pub fn prefix() -> String {
        "init".to_string()
    }

    pub fn l1_prefix() -> String {
        "init".to_string()
    }

    pub fn celestia_prefix() -> String {
        "celestia".to_string()
    }
}

#[cfg(test)]
pub mod keyring_config_test {
    use std::path::PathBuf;

    use super::{load_keyring_config, KeyringConfig};

    #[test]
    pub fn read_keyring_config_works() {
        let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "config", "keyring.toml"].iter().collect();
        let config = load_keyring_config(path.to_str().unwrap()).unwrap();

        assert_eq!(config, KeyringConfig::default());
    }

    #[test]
    pub fn missing_fields_default_works() {
        let config: KeyringConfig = toml::from_str("default_prefix = \"cosmos\"").unwrap();

        assert_eq!(config.default_prefix, "cosmos");
        assert_eq!(config.l1_prefix, "init");
        assert_eq!(config.celestia_prefix, "celestia");
    }

    #[test]
    pub fn missing_config_file_rejected() {
        assert!(load_keyring_config("/nonexistent/keyring.toml").is_err());
    }
}
