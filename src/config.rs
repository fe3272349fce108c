use crate::error::{RecipeAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// AIコマンドを上書きする環境変数
pub const AI_COMMAND_ENV: &str = "RECIPE_AI_COMMAND";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// AI CLIのコマンド名（未設定ならプロバイダ既定）
    pub ai_command: Option<String>,
    pub default_batch_size: usize,
    pub recipe_count: usize,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_command: None,
            default_batch_size: 5,
            recipe_count: 3,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
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

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 設定ディレクトリ（お気に入り・履歴もここに保存）
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecipeAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("recipe-ai"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 使用するAIコマンド名
    ///
    /// 環境変数 > 設定ファイル > プロバイダ既定 の順
    pub fn resolve_ai_command(&self, provider_default: &str) -> String {
        if let Ok(cmd) = std::env::var(AI_COMMAND_ENV) {
            if !cmd.trim().is_empty() {
                return cmd;
            }
        }
        self.ai_command
            .clone()
            .unwrap_or_else(|| provider_default.to_string())
    }

    pub fn set_ai_command(&mut self, command: String) -> Result<()> {
        self.ai_command = Some(command);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_batch_size, 5);
        assert_eq!(config.recipe_count, 3);
        assert!(config.ai_command.is_none());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_save_and_load_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            ai_command: Some("gemini".to_string()),
            recipe_count: 5,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ai_command.as_deref(), Some("gemini"));
        assert_eq!(loaded.recipe_count, 5);

        // 欠けたフィールドは既定値
        std::fs::write(&path, r#"{"recipe_count": 2}"#).unwrap();
        let partial = Config::load_from(&path).unwrap();
        assert_eq!(partial.recipe_count, 2);
        assert_eq!(partial.default_batch_size, 5);
    }

    #[test]
    fn test_resolve_ai_command_from_config() {
        let config = Config {
            ai_command: Some("my-claude".to_string()),
            ..Default::default()
        };
        if std::env::var(AI_COMMAND_ENV).is_err() {
            assert_eq!(config.resolve_ai_command("claude"), "my-claude");
            assert_eq!(Config::default().resolve_ai_command("claude"), "claude");
        }
    }

    #[test]
    fn test_resolve_ai_command_reflects_update() {
        // config --set-ai-command 直後の --show は更新後の値を表示する
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        if std::env::var(AI_COMMAND_ENV).is_err() {
            assert_eq!(config.resolve_ai_command("gemini"), "gemini");
            config.ai_command = Some("my-gemini".to_string());
            config.save_to(&path).unwrap();
            assert_eq!(config.resolve_ai_command("gemini"), "my-gemini");
            assert_eq!(Config::load_from(&path).unwrap().resolve_ai_command("gemini"), "my-gemini");
        }
    }
}
