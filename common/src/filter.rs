//! レシピの絞り込み・並び替え
//!
//! 検索語・難易度・最大調理時間で絞り込み、指定キーで安定ソートする。
//! 入力は変更せず、出力は入力の部分列を並べ替えたもの。

use crate::types::{Difficulty, Recipe};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DIGITS_RE: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// 難易度フィルタ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyFilter {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
}

impl DifficultyFilter {
    fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Easy => difficulty == Difficulty::Easy,
            DifficultyFilter::Medium => difficulty == Difficulty::Medium,
            DifficultyFilter::Hard => difficulty == Difficulty::Hard,
        }
    }
}

impl std::str::FromStr for DifficultyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DifficultyFilter::All),
            "easy" => Ok(DifficultyFilter::Easy),
            "medium" => Ok(DifficultyFilter::Medium),
            "hard" => Ok(DifficultyFilter::Hard),
            _ => Err(format!("Unknown difficulty: {}. Use all, easy, medium, or hard", s)),
        }
    }
}

/// 並び替えキー
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// 入力順のまま
    #[default]
    Relevance,
    Time,
    Difficulty,
    Calories,
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" => Ok(SortBy::Relevance),
            "time" => Ok(SortBy::Time),
            "difficulty" => Ok(SortBy::Difficulty),
            "calories" => Ok(SortBy::Calories),
            _ => Err(format!(
                "Unknown sort key: {}. Use relevance, time, difficulty, or calories",
                s
            )),
        }
    }
}

/// 絞り込み・並び替え条件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeFilter {
    pub search_query: String,
    pub difficulty: DifficultyFilter,
    pub max_cooking_time_minutes: Option<u32>,
    pub sort_by: SortBy,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_query(recipe)
            && self.difficulty.matches(recipe.difficulty)
            && self
                .max_cooking_time_minutes
                .map_or(true, |max| parse_cooking_minutes(&recipe.cooking_time) <= max)
    }

    fn matches_query(&self, recipe: &Recipe) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let query = self.search_query.to_lowercase();
        recipe.title.to_lowercase().contains(&query)
            || recipe.description.to_lowercase().contains(&query)
    }
}

/// 調理時間文字列から最初の数字列を分として取り出す
///
/// 数字がなければ0。u32に収まらない場合は飽和させる。
pub fn parse_cooking_minutes(cooking_time: &str) -> u32 {
    DIGITS_RE
        .find(cooking_time)
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// 条件に合うレシピを絞り込み、安定ソートして返す
pub fn filter_and_sort(recipes: &[Recipe], filter: &RecipeFilter) -> Vec<Recipe> {
    let mut visible: Vec<Recipe> = recipes
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();

    // sort_by_key は安定ソート
    match filter.sort_by {
        SortBy::Relevance => {}
        SortBy::Time => visible.sort_by_key(|r| parse_cooking_minutes(&r.cooking_time)),
        SortBy::Difficulty => visible.sort_by_key(|r| r.difficulty.rank()),
        SortBy::Calories => visible.sort_by(|a, b| {
            let a = a.calories.unwrap_or(0.0);
            let b = b.calories.unwrap_or(0.0);
            a.total_cmp(&b)
        }),
    }

    visible
}
