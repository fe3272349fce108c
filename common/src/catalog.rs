//! 調味料カタログ
//!
//! 既知の調味料の固定リスト。チェックリスト表示と、
//! レシピ本文からの調味料キーワード検出の両方に使う。

use crate::types::{Seasoning, SeasoningCategory};
use std::collections::HashSet;

/// 組み込みカタログ: (id, 名前, カテゴリ, 初期の在庫有無)
const DEFAULT_SEASONINGS: &[(&str, &str, SeasoningCategory, bool)] = &[
    ("salt", "塩", SeasoningCategory::Basic, true),
    ("sugar", "砂糖", SeasoningCategory::Basic, true),
    ("vinegar", "酢", SeasoningCategory::Basic, false),
    ("salad-oil", "サラダ油", SeasoningCategory::Basic, true),
    ("pepper", "胡椒", SeasoningCategory::Basic, true),
    ("soy-sauce", "醤油", SeasoningCategory::Sauce, true),
    ("miso", "味噌", SeasoningCategory::Sauce, false),
    ("mirin", "みりん", SeasoningCategory::Sauce, false),
    ("sake", "料理酒", SeasoningCategory::Sauce, false),
    ("ketchup", "ケチャップ", SeasoningCategory::Sauce, false),
    ("mayonnaise", "マヨネーズ", SeasoningCategory::Sauce, false),
    ("worcester", "ウスターソース", SeasoningCategory::Sauce, false),
    ("ginger", "生姜", SeasoningCategory::Spice, false),
    ("garlic", "にんにく", SeasoningCategory::Spice, false),
    ("chili", "唐辛子", SeasoningCategory::Spice, false),
    ("butter", "バター", SeasoningCategory::Other, false),
    ("dashi", "だし", SeasoningCategory::Other, false),
];

/// 調味料カタログ（エントリの名前・カテゴリは不変）
#[derive(Debug, Clone)]
pub struct SeasoningCatalog {
    entries: Vec<Seasoning>,
}

impl SeasoningCatalog {
    /// 任意のエントリからカタログを作る。idが重複した場合は最初のものを残す
    pub fn new(entries: Vec<Seasoning>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|s| seen.insert(s.id.clone()))
            .collect();
        Self { entries }
    }

    /// 組み込みカタログ
    pub fn default_catalog() -> Self {
        let entries = DEFAULT_SEASONINGS
            .iter()
            .map(|&(id, name, category, is_available)| Seasoning {
                id: id.to_string(),
                name: name.to_string(),
                category,
                is_available,
            })
            .collect();
        Self::new(entries)
    }

    /// 宣言順の全エントリ
    pub fn list_all(&self) -> &[Seasoning] {
        &self.entries
    }

    pub fn by_category(&self, category: SeasoningCategory) -> Vec<&Seasoning> {
        self.entries.iter().filter(|s| s.category == category).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Seasoning> {
        self.entries.iter().find(|s| s.id == id)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SeasoningCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}
