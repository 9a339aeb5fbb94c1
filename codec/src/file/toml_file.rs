use std::fs;

use log::debug;
use serde::de::DeserializeOwned;

use super::error::FileError;

pub fn toml_file_read<T>(file_path: &str) -> Result<T, FileError>
where
    T: DeserializeOwned,
{
    debug!("reading toml file {}", file_path);
    let str_val = fs::read_to_string(file_path).map_err(|e| FileError::file_read(file_path.to_string(), e))?;

    toml::from_str(&str_val).map_err(|e| FileError::parse_toml_file_from_string(file_path.to_string(), e))
}

#[cfg(test)]
pub mod toml_file_test {
    use std::path::PathBuf;

    use serde::Deserialize;

    use super::toml_file_read;
    use crate::file::error::FileErrorDetail;

    #[derive(Debug, Deserialize)]
    struct Sample {
        prefix: String,
    }

    #[test]
    pub fn missing_file_rejected() {
        let err = toml_file_read::<Sample>("/nonexistent/codec/sample.toml").unwrap_err();
        assert!(matches!(err.detail(), FileErrorDetail::FileRead(_)));
    }

    #[test]
    pub fn toml_file_read_works() {
        let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "Cargo.toml"].iter().collect();
        let err = toml_file_read::<Sample>(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err.detail(), FileErrorDetail::ParseTomlFileFromString(_)));

        let sample: Sample = toml::from_str("prefix = \"init\"").unwrap();
        assert_eq!(sample.prefix, "init");
    }
}
