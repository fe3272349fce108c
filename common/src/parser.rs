//! AIレスポンスパーサー
//!
//! AI CLIのレスポンスからJSONを抽出し、
//! 食材検出結果・レシピ提案をパースする

use crate::error::{Error, Result};
use crate::types::{AnalysisResult, Recipe};

/// レスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 最初の `[` から最後の `]` まで
///
/// # Examples
/// ```
/// use recipe_ai_common::extract_json;
///
/// let response = "結果です: [{\"id\": \"r1\"}]";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "[{\"id\": \"r1\"}]");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    const FENCE: &str = "```json";

    if let Some(start_marker) = response.find(FENCE) {
        let start = start_marker + FENCE.len();
        if let Some(end_offset) = response[start..].find("```") {
            return Ok(response[start..start + end_offset].trim());
        }
    }

    if let (Some(start), Some(end)) = (response.find('['), response.rfind(']')) {
        if end >= start {
            return Ok(&response[start..=end]);
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 食材検出レスポンスをパース
pub fn parse_detection_response(response: &str) -> Result<Vec<AnalysisResult>> {
    let json_str = extract_json(response)?;
    serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("食材検出 JSONパースエラー: {}", e)))
}

/// レシピ提案レスポンスをパース
///
/// 手順は `order` 順に並べ直す（同じorderは元の順を保つ）
pub fn parse_recipe_response(response: &str) -> Result<Vec<Recipe>> {
    let json_str = extract_json(response)?;
    let mut recipes: Vec<Recipe> = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("レシピ JSONパースエラー: {}", e)))?;

    for recipe in &mut recipes {
        recipe.steps.sort_by_key(|s| s.order);
    }
    Ok(recipes)
}
