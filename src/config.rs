use crate::checker::suggestions::DEFAULT_THRESHOLD;
use crate::Dictionary;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".tokenspell.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Word-list files, one `add` entry per line
    #[serde(default)]
    pub word_lists: Vec<PathBuf>,

    /// Extra words added after the word lists
    #[serde(default)]
    pub words: Vec<String>,

    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_lists: Vec::new(),
            words: Vec::new(),
            threshold: default_threshold(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

/// One config file. Scalars left out of the file keep the value from the
/// layer below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub word_lists: Vec<PathBuf>,

    #[serde(default)]
    pub words: Vec<String>,

    pub threshold: Option<f64>,

    pub max_suggestions: Option<usize>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        word_lists: Vec<PathBuf>,
        words: Vec<String>,
        threshold: Option<f64>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        config.word_lists.extend(word_lists);
        config.words.extend(words);
        if let Some(threshold) = threshold {
            config.threshold = threshold;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        // Lists accumulate, scalars override when the layer sets them
        self.word_lists.extend(layer.word_lists);
        self.words.extend(layer.words);
        if let Some(threshold) = layer.threshold {
            self.threshold = threshold;
        }
        if let Some(max_suggestions) = layer.max_suggestions {
            self.max_suggestions = max_suggestions;
        }
        self
    }

    /// Create a dictionary from the configured word lists and words.
    pub fn build_dictionary(&self) -> Result<Dictionary> {
        let mut dictionary = Dictionary::new().with_threshold(self.threshold);

        for path in &self.word_lists {
            let words = crate::dict::wordlist::read(path)?;
            dictionary.add_many(words);
        }
        dictionary.add_many(&self.words);

        debug!(entries = dictionary.len(), "built dictionary");

        Ok(dictionary)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tokenspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.threshold, 0.9);
        assert_eq!(config.max_suggestions, 5);
        assert!(config.word_lists.is_empty());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            words: vec!["cheese".to_string()],
            ..Default::default()
        };
        let override_config = ConfigLayer {
            words: vec!["Brie".to_string()],
            threshold: Some(0.8),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.words, vec!["cheese", "Brie"]);
        assert_eq!(merged.threshold, 0.8);
        assert_eq!(merged.max_suggestions, 5);
    }

    #[test]
    fn test_later_layer_can_restore_default_values() {
        let global = ConfigLayer {
            threshold: Some(0.8),
            max_suggestions: Some(2),
            ..Default::default()
        };
        let local = ConfigLayer {
            threshold: Some(0.9),
            max_suggestions: Some(5),
            ..Default::default()
        };

        let merged = Config::default().merge(global).merge(local);
        assert_eq!(merged.threshold, 0.9);
        assert_eq!(merged.max_suggestions, 5);
    }

    #[test]
    fn test_layer_without_scalars_keeps_lower_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "words = [\"brie\"]\n").unwrap();

        let global = ConfigLayer {
            threshold: Some(0.8),
            ..Default::default()
        };
        let merged = Config::default()
            .merge(global)
            .merge(ConfigLayer::from_file(&path).unwrap());
        assert_eq!(merged.threshold, 0.8);
        assert_eq!(merged.words, vec!["brie"]);
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "words = [\"Paris\", \"cheese\"]\nthreshold = 0.85\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.words, vec!["Paris", "cheese"]);
        assert_eq!(config.threshold, 0.85);
        assert_eq!(config.max_suggestions, 5);
    }

    #[test]
    fn test_from_file_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "threshold = \"high\"").unwrap();

        let err = ConfigLayer::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_build_dictionary() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("words.txt");
        fs::write(&list, "# names\nParis\n!nasa\n\ncheese\n").unwrap();

        let config = Config {
            word_lists: vec![list],
            words: vec!["brie".to_string()],
            threshold: 0.8,
            ..Default::default()
        };

        let dict = config.build_dictionary().unwrap();
        assert_eq!(dict.threshold(), 0.8);
        assert_eq!(dict.list(), vec!["!nasa", "Paris", "brie", "cheese"]);
    }
}
