use crate::error::{MenuMatchError, Result};
use menu_match_common::{MatchMode, RankOptions, ScoringWeights};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 食材カタログJSON（未設定なら組み込みカタログ）
    pub catalog_path: Option<PathBuf>,
    /// 既定の好みプロファイルJSON
    pub profile_path: Option<PathBuf>,
    pub weights_preset: String,
    pub match_mode: MatchMode,
    pub exclude_unsafe: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            profile_path: None,
            weights_preset: "standard".into(),
            match_mode: MatchMode::Substring,
            exclude_unsafe: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MenuMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("menu-match").join("config.json"))
    }

    pub fn weights(&self) -> Result<ScoringWeights> {
        ScoringWeights::from_preset(&self.weights_preset)
            .ok_or_else(|| MenuMatchError::UnknownPreset(self.weights_preset.clone()))
    }

    /// 設定からランキングオプションを組み立てる
    pub fn rank_options(&self) -> Result<RankOptions> {
        Ok(RankOptions {
            weights: self.weights()?,
            match_mode: self.match_mode,
            exclude_unsafe: self.exclude_unsafe,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.weights_preset, "standard");
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert!(!config.exclude_unsafe);

        let options = config.rank_options().unwrap();
        assert_eq!(options, RankOptions::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"match_mode":"word"}"#).unwrap();
        assert_eq!(config.match_mode, MatchMode::WordBoundary);
        assert_eq!(config.weights_preset, "standard");
    }

    #[test]
    fn test_unknown_preset() {
        let config = Config {
            weights_preset: "lenient".into(),
            ..Default::default()
        };
        assert!(matches!(config.rank_options(), Err(MenuMatchError::UnknownPreset(_))));
    }
}
