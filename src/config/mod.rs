pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

/// ASCII Brazilian-Portuguese words without diacritics.
pub const DEFAULT_WORD_LIST_URL: &str = "https://www.ime.usp.br/~pf/dicios/br-sem-acentos.txt";
pub const DEFAULT_OUTPUT_PATH: &str = ".";
pub const DEFAULT_CACHE_PATH: &str = "words.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Parser)]
#[command(name = "wordtiles")]
#[command(about = "Builds per-length word lists and letter tile distributions from a word list")]
pub struct CliConfig {
    /// URL of a newline-delimited word list
    #[arg(long)]
    pub url: Option<String>,

    /// Directory receiving words/ and the tile files
    #[arg(long)]
    pub output_path: Option<String>,

    /// Where the downloaded word list is cached
    #[arg(long)]
    pub cache_path: Option<String>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags win over the settings file, which wins over the defaults.
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(AppConfig::merge(
            self.url.clone(),
            self.output_path.clone(),
            self.cache_path.clone(),
            file,
        ))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub word_list_url: String,
    pub output_path: String,
    pub cache_path: String,
}

impl AppConfig {
    pub fn merge(
        url: Option<String>,
        output_path: Option<String>,
        cache_path: Option<String>,
        file: TomlConfig,
    ) -> Self {
        Self {
            word_list_url: url
                .or(file.source.url)
                .unwrap_or_else(|| DEFAULT_WORD_LIST_URL.to_string()),
            output_path: output_path
                .or(file.output.path)
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            cache_path: cache_path
                .or(file.source.cache_path)
                .unwrap_or_else(|| DEFAULT_CACHE_PATH.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::merge(None, None, None, TomlConfig::default())
    }
}

impl ConfigProvider for AppConfig {
    fn word_list_url(&self) -> &str {
        &self.word_list_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn cache_path(&self) -> &str {
        &self.cache_path
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.word_list_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_path("cache_path", &self.cache_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::{OutputConfig, SourceConfig};

    fn file_config() -> TomlConfig {
        TomlConfig {
            source: SourceConfig {
                url: Some("https://file.example/words.txt".to_string()),
                cache_path: None,
            },
            output: OutputConfig {
                path: Some("from-file".to_string()),
            },
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.word_list_url, DEFAULT_WORD_LIST_URL);
        assert_eq!(config.output_path, ".");
        assert_eq!(config.cache_path, "words.txt");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_file_override_defaults() {
        let config = AppConfig::merge(None, Some("from-flag".to_string()), None, file_config());
        assert_eq!(config.word_list_url, "https://file.example/words.txt");
        assert_eq!(config.output_path, "from-flag");
        assert_eq!(config.cache_path, DEFAULT_CACHE_PATH);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let config = AppConfig::merge(Some("not a url".to_string()), None, None, TomlConfig::default());
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parse_without_flags_uses_defaults() {
        use clap::Parser;

        let cli = CliConfig::parse_from(["wordtiles"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags() {
        use clap::Parser;

        let cli = CliConfig::parse_from([
            "wordtiles",
            "--url",
            "http://localhost:8080/list.txt",
            "--output-path",
            "out",
            "--verbose",
        ]);
        assert!(cli.verbose);
        let config = cli.resolve().unwrap();
        assert_eq!(config.word_list_url, "http://localhost:8080/list.txt");
        assert_eq!(config.output_path, "out");
    }
}
