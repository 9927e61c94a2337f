use blogify_engine::Publication;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Per-paper settings read from `blogify.toml` next to the paper.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root markup file, relative to the paper directory.
    pub root: Option<PathBuf>,
    /// Output page, relative to the paper directory.
    pub output: Option<PathBuf>,
    pub publication: Publication,
}

impl Config {
    pub const FILE_NAME: &'static str = "blogify.toml";
    /// Root files tried in order when none is configured.
    pub const DEFAULT_ROOTS: [&'static str; 2] = ["main.tex", "paper.tex"];
    pub const DEFAULT_OUTPUT: &'static str = "index.html";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured paths
        config.root = config
            .root
            .map(|path| Self::expand_path(&path).unwrap_or(path));
        config.output = config
            .output
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load_from_dir(paper_dir: &Path) -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path(paper_dir))
    }

    pub fn config_path(paper_dir: &Path) -> PathBuf {
        paper_dir.join(Self::FILE_NAME)
    }

    /// The configured root, else the first default root that exists, else
    /// `main.tex` so the caller reports a sensible missing file.
    pub fn root_file(&self, paper_dir: &Path) -> PathBuf {
        if let Some(root) = &self.root {
            return paper_dir.join(root);
        }
        Self::DEFAULT_ROOTS
            .iter()
            .map(|name| paper_dir.join(name))
            .find(|path| path.exists())
            .unwrap_or_else(|| paper_dir.join(Self::DEFAULT_ROOTS[0]))
    }

    pub fn output_file(&self, paper_dir: &Path) -> PathBuf {
        paper_dir.join(self.output.as_deref().unwrap_or(Path::new(Self::DEFAULT_OUTPUT)))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
