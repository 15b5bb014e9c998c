use std::path::PathBuf;

use allerscan_core::domain::{
    common::{AllerscanConfig, DataConfig, MatchingConfig, OcrConfig},
    detection::matcher::MatchMode,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "allerscan-api", version, about = "Allergen detection API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub matching: MatchingArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DataArgs {
    #[arg(long = "allergens-path", env = "ALLERGENS_PATH", default_value = "data/allergens.json")]
    pub allergens_path: PathBuf,

    #[arg(long = "products-path", env = "PRODUCTS_PATH", default_value = "data/products.json")]
    pub products_path: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MatchingArgs {
    /// `substring` or `whole-word`
    #[arg(long = "match-mode", env = "MATCH_MODE", default_value = "substring")]
    pub mode: MatchMode,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OcrArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "ocr-language", env = "OCR_LANGUAGE", default_value = "en")]
    pub language: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for AllerscanConfig {
    fn from(args: Args) -> Self {
        AllerscanConfig {
            data: DataConfig {
                allergens_path: args.data.allergens_path,
                products_path: args.data.products_path,
            },
            matching: MatchingConfig {
                mode: args.matching.mode,
            },
            ocr: OcrConfig {
                gemini_api_key: args.ocr.gemini_api_key,
                gemini_model: args.ocr.gemini_model,
                language: args.ocr.language,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["allerscan-api"]).unwrap();

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "");
        assert_eq!(args.matching.mode, MatchMode::Substring);
        assert_eq!(args.data.allergens_path, PathBuf::from("data/allergens.json"));
    }

    #[test]
    fn test_parse_flags_into_config() {
        let args = Args::try_parse_from([
            "allerscan-api",
            "--match-mode",
            "whole-word",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--gemini-api-key",
            "secret",
        ])
        .unwrap();

        assert_eq!(args.server.allowed_origins, vec!["http://a.test", "http://b.test"]);

        let config = AllerscanConfig::from(args);
        assert_eq!(config.matching.mode, MatchMode::WholeWord);
        assert_eq!(config.ocr.gemini_api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_rejects_unknown_match_mode() {
        assert!(Args::try_parse_from(["allerscan-api", "--match-mode", "fuzzy"]).is_err());
    }
}
