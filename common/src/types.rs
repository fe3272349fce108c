//! レシピ提案の型定義
//!
//! CLIとコアロジックで共有される型:
//! - Ingredient / AnalysisResult: 画像解析（食材検出）の出力
//! - Seasoning: 調味料カタログのエントリ
//! - Recipe: AIが提案するレシピ

use serde::{Deserialize, Serialize};

/// 正規化された画像座標上の矩形
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 食材（検出または手動入力）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,

    /// 検出信頼度 0..=1（手動入力の場合はNone）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

impl Ingredient {
    /// 検出された食材
    pub fn detected(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence: Some(confidence),
            bounding_box: None,
        }
    }
}

/// 画像1枚分の解析結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub file_name: String,
    pub ingredients: Vec<Ingredient>,
    pub image_url: String,
    /// 全体の信頼度
    pub confidence: f64,
    /// 処理時間（ms）
    pub processing_time: f64,
}

/// 調味料カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasoningCategory {
    Basic,
    Spice,
    Sauce,
    Other,
}

impl SeasoningCategory {
    pub const ALL: [SeasoningCategory; 4] = [
        SeasoningCategory::Basic,
        SeasoningCategory::Sauce,
        SeasoningCategory::Spice,
        SeasoningCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SeasoningCategory::Basic => "基本調味料",
            SeasoningCategory::Spice => "香辛料",
            SeasoningCategory::Sauce => "ソース・タレ",
            SeasoningCategory::Other => "その他",
        }
    }
}

/// 調味料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seasoning {
    pub id: String,
    pub name: String,
    pub category: SeasoningCategory,
    #[serde(default)]
    pub is_available: bool,
}

/// 難易度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 並び替え用のランク（easy=1, medium=2, hard=3）
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "簡単",
            Difficulty::Medium => "普通",
            Difficulty::Hard => "難しい",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" | "簡単" => Ok(Difficulty::Easy),
            "medium" | "普通" => Ok(Difficulty::Medium),
            "hard" | "難しい" => Ok(Difficulty::Hard),
            _ => Err(format!("Unknown difficulty: {}. Use easy, medium, or hard", s)),
        }
    }
}

/// レシピの材料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// 調理手順
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    pub order: u32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

/// 提案レシピ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cooking_time: String,      // 調理時間（例: "30分"）
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
}

fn default_servings() -> u32 {
    1
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            cooking_time: String::new(),
            difficulty: Difficulty::default(),
            servings: default_servings(),
            calories: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            tips: Vec::new(),
        }
    }
}
