use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Settings read from `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// How many quarter turns a scramble uses.
    pub scramble_length: usize,
    /// Fixed seed for scrambles; a fresh one is drawn when unset.
    pub seed: Option<u64>,
    /// Paint the net with background colors.
    pub color: bool,
    /// Filler for the cells of the net outside the cross.
    pub blank: char,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            scramble_length: 20,
            seed: None,
            color: true,
            blank: ' ',
        }
    }
}

impl CliConfig {
    /// Load from `path`, or from the user config directory when no path is
    /// given. A missing default file means defaults.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<CliConfig> {
        if let Some(path) = path {
            return CliConfig::from_file(path);
        }

        match default_path() {
            Some(path) if path.exists() => CliConfig::from_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(CliConfig::default())
            }
        }
    }

    fn from_file(path: &Path) -> color_eyre::Result<CliConfig> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = CliConfig::parse(&text)
            .wrap_err_with(|| format!("Invalid configuration file {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<CliConfig, toml::de::Error> {
        toml::from_str(text)
    }

    /// A random number generator for scrambles, seeded from `seed` when one
    /// is given, else from the configured seed.
    pub fn rng(&self, seed: Option<u64>) -> fastrand::Rng {
        match seed.or(self.seed) {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

fn default_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("cube");
    path.push("config.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn partial_file() {
        let config = CliConfig::parse("scramble_length = 25\nseed = 9\nblank = '.'\n").unwrap();
        assert_eq!(
            config,
            CliConfig {
                scramble_length: 25,
                seed: Some(9),
                color: true,
                blank: '.',
            }
        );
    }

    #[test]
    fn rejects_unknown_and_mistyped_keys() {
        assert!(CliConfig::parse("colour = false").is_err());
        assert!(CliConfig::parse("scramble_length = \"many\"").is_err());
        assert!(CliConfig::parse("blank = \"..\"").is_err());
    }

    #[test]
    fn seed_override_wins() {
        let config = CliConfig {
            seed: Some(1),
            ..CliConfig::default()
        };

        assert_eq!(config.rng(Some(2)).u64(..), fastrand::Rng::with_seed(2).u64(..));
        assert_eq!(config.rng(None).u64(..), fastrand::Rng::with_seed(1).u64(..));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(CliConfig::load(Some(Path::new("/nonexistent/cube/config.toml"))).is_err());
    }
}
