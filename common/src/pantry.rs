//! 食材・調味料の状態ストア
//!
//! 検出食材、手動追加食材、調味料の在庫有無を保持し、
//! 派生ビュー（確定食材・使用可能な調味料）を提供する。
//! 変更は `&mut self` のメソッド経由のみ。読み出しは所有権付きのスナップショットを返す。

use crate::catalog::SeasoningCatalog;
use crate::types::{Ingredient, Seasoning};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PantryState {
    detected: Vec<Ingredient>,
    manual: Vec<String>,
    seasonings: Vec<Seasoning>,
}

impl PantryState {
    pub fn new(catalog: &SeasoningCatalog) -> Self {
        Self {
            detected: Vec::new(),
            manual: Vec::new(),
            seasonings: catalog.list_all().to_vec(),
        }
    }

    /// 検出食材を置き換える
    pub fn set_detected_ingredients(&mut self, ingredients: Vec<Ingredient>) {
        self.detected = ingredients;
    }

    pub fn detected_ingredients(&self) -> &[Ingredient] {
        &self.detected
    }

    /// 手動食材を追加（完全一致で既存なら何もしない）
    ///
    /// 追加した場合は `true`
    pub fn add_manual_ingredient(&mut self, name: &str) -> bool {
        if self.manual.iter().any(|m| m == name) {
            return false;
        }
        self.manual.push(name.to_string());
        true
    }

    pub fn remove_manual_ingredient(&mut self, name: &str) -> bool {
        let before = self.manual.len();
        self.manual.retain(|m| m != name);
        self.manual.len() != before
    }

    pub fn manual_ingredients(&self) -> &[String] {
        &self.manual
    }

    /// 検出食材名と手動食材名の和集合（重複なし）
    pub fn confirmed_ingredients(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.detected
            .iter()
            .map(|i| i.name.as_str())
            .chain(self.manual.iter().map(String::as_str))
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }

    /// 調味料の在庫有無を更新
    ///
    /// 未知のidは無視して `false` を返す
    pub fn set_seasoning_availability(&mut self, id: &str, is_available: bool) -> bool {
        match self.seasonings.iter_mut().find(|s| s.id == id) {
            Some(seasoning) => {
                seasoning.is_available = is_available;
                true
            }
            None => false,
        }
    }

    pub fn seasonings(&self) -> &[Seasoning] {
        &self.seasonings
    }

    pub fn available_seasonings(&self) -> Vec<Seasoning> {
        self.seasonings
            .iter()
            .filter(|s| s.is_available)
            .cloned()
            .collect()
    }

    pub fn available_seasoning_names(&self) -> Vec<String> {
        self.seasonings
            .iter()
            .filter(|s| s.is_available)
            .map(|s| s.name.clone())
            .collect()
    }

    /// 食材をクリア（調味料の在庫有無は保持）
    pub fn clear(&mut self) {
        self.detected.clear();
        self.manual.clear();
    }
}

impl Default for PantryState {
    fn default() -> Self {
        Self::new(&SeasoningCatalog::default_catalog())
    }
}
