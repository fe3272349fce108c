//! セッションファイル
//!
//! 食材・調味料の状態（PantryState）をカレントディレクトリの
//! `.recipe-session.json` に保存し、コマンド間で引き継ぐ。

use crate::error::Result;
use recipe_ai_common::PantryState;
use std::path::{Path, PathBuf};

const SESSION_FILE_NAME: &str = ".recipe-session.json";

pub fn session_path(dir: &Path) -> PathBuf {
    dir.join(SESSION_FILE_NAME)
}

/// セッションを読み込み（なければ組み込みカタログで初期化）
pub fn load(dir: &Path) -> Result<PantryState> {
    let path = session_path(dir);
    if !path.exists() {
        tracing::debug!("セッションなし、新規作成: {}", path.display());
        return Ok(PantryState::default());
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save(dir: &Path, state: &PantryState) -> Result<()> {
    let content = serde_json::to_string_pretty(state)?;
    std::fs::write(session_path(dir), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeAiError;
    use recipe_ai_common::Ingredient;

    #[test]
    fn test_load_missing_session_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let state = load(dir.path()).unwrap();
        assert!(state.confirmed_ingredients().is_empty());
        assert!(!state.seasonings().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = PantryState::default();
        state.set_detected_ingredients(vec![Ingredient::detected("なす", 0.88)]);
        state.add_manual_ingredient("ひき肉");
        state.set_seasoning_availability("miso", true);
        save(dir.path(), &state).unwrap();

        let loaded = load(dir.path()).unwrap();
        assert_eq!(loaded.confirmed_ingredients(), vec!["なす".to_string(), "ひき肉".to_string()]);
        assert!(loaded.available_seasoning_names().contains(&"味噌".to_string()));
    }

    #[test]
    fn test_load_corrupted_session() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(session_path(dir.path()), "{ broken").unwrap();
        assert!(matches!(load(dir.path()), Err(RecipeAiError::JsonParse(_))));
    }
}
