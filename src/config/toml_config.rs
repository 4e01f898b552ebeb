use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub cache_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EtlError::ConfigError {
            message: format!("Cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::parse(
            r#"
            [source]
            url = "https://example.com/words.txt"
            cache_path = "cache/words.txt"

            [output]
            path = "./out"
            "#,
        )
        .unwrap();

        assert_eq!(config.source.url.as_deref(), Some("https://example.com/words.txt"));
        assert_eq!(config.source.cache_path.as_deref(), Some("cache/words.txt"));
        assert_eq!(config.output.path.as_deref(), Some("./out"));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::parse("[output]\npath = \"dist\"\n").unwrap();
        assert!(config.source.url.is_none());
        assert_eq!(config.output.path.as_deref(), Some("dist"));

        let empty = TomlConfig::parse("").unwrap();
        assert!(empty.output.path.is_none());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::parse("[source\nurl = 1").unwrap_err();
        assert!(matches!(err, EtlError::TomlError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nurl = \"http://localhost/words.txt\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.source.url.as_deref(), Some("http://localhost/words.txt"));

        assert!(matches!(
            TomlConfig::from_file("/nonexistent/wordtiles.toml"),
            Err(EtlError::ConfigError { .. })
        ));
    }
}
