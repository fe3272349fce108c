//! お気に入り・履歴の保存
//!
//! レシピはそのままの形でJSONファイルに保存する（保存日時付き）。

use crate::config::Config;
use crate::error::Result;
use chrono::{DateTime, Utc};
use recipe_ai_common::Recipe;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 履歴の最大件数（超えたら古いものから削除）
pub const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    pub saved_at: DateTime<Utc>,
    pub recipe: Recipe,
}

#[derive(Debug)]
pub struct RecipeStore {
    path: PathBuf,
    entries: Vec<SavedRecipe>,
}

impl RecipeStore {
    pub fn open(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn favorites() -> Result<Self> {
        Self::open(&Config::config_dir()?.join("favorites.json"))
    }

    pub fn history() -> Result<Self> {
        Self::open(&Config::config_dir()?.join("history.json"))
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }

    /// idが未登録なら追加（お気に入り用）
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if self.contains(&recipe.id) {
            return false;
        }
        self.entries.push(SavedRecipe {
            saved_at: Utc::now(),
            recipe,
        });
        true
    }

    /// 無条件に追記し、上限を超えた古いものを捨てる（履歴用）
    pub fn append(&mut self, recipes: &[Recipe]) {
        let now = Utc::now();
        self.entries.extend(recipes.iter().map(|recipe| SavedRecipe {
            saved_at: now,
            recipe: recipe.clone(),
        }));
        if self.entries.len() > HISTORY_LIMIT {
            let excess = self.entries.len() - HISTORY_LIMIT;
            self.entries.drain(..excess);
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.recipe.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.recipe.id == id)
    }

    pub fn entries(&self) -> &[SavedRecipe] {
        &self.entries
    }
}
