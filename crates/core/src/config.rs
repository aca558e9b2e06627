use crate::storage::DatasetHoldout;
use std::path::PathBuf;
use std::str::FromStr;

/// How a freshly converted parse tree is normalized before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Fold single-child chains into compound labels.
    #[default]
    Compress,
    /// Drop single-child intermediate layers, keeping only the innermost node.
    Simplify,
    /// Keep every grammar rule application.
    Raw,
}

impl FromStr for Normalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compress" => Ok(Normalization::Compress),
            "simplify" => Ok(Normalization::Simplify),
            "raw" => Ok(Normalization::Raw),
            other => Err(format!(
                "unknown normalization '{}', expected compress, simplify or raw",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub output_dir: PathBuf,
    /// Emit the source file path next to each labeled tree.
    pub with_paths: bool,
    /// Emit source ranges on every node that has one.
    pub with_ranges: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("astmill-out"),
            with_paths: false,
            with_ranges: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MiningConfig {
    pub storage: StorageConfig,
    pub holdout: DatasetHoldout,
    pub normalization: Normalization,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Prefix of the rolling log files.
    pub component: String,
    /// Falls back to `~/.astmill/logs`.
    pub log_dir: Option<PathBuf>,
    pub to_stderr: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            component: "astmill".to_string(),
            log_dir: None,
            to_stderr: false,
            default_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_parses_known_names() {
        assert_eq!("simplify".parse::<Normalization>(), Ok(Normalization::Simplify));
        assert_eq!("raw".parse::<Normalization>(), Ok(Normalization::Raw));
        assert!("fold".parse::<Normalization>().is_err());
    }

    #[test]
    fn mining_config_defaults_to_compressed_unsplit_output() {
        let config = MiningConfig::default();
        assert_eq!(config.normalization, Normalization::Compress);
        assert_eq!(config.holdout, DatasetHoldout::None);
        assert!(!config.storage.with_paths);
        assert!(!config.storage.with_ranges);
    }
}
