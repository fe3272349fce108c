//! プロンプト生成モジュール
//!
//! - build_detection_prompt: 画像からの食材検出用プロンプト
//! - build_recipe_prompt: 食材・調味料からのレシピ提案用プロンプト

use crate::types::Seasoning;

/// 食材検出プロンプト生成
///
/// # Arguments
/// * `file_names` - 解析対象の画像ファイル名
pub fn build_detection_prompt(file_names: &[&str]) -> String {
    let photo_list = file_names
        .iter()
        .map(|name| format!("- {}", name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"あなたは料理研究家です。写真に写っている食材を特定してください。

## 出力形式（厳密にこのJSON配列形式で出力）
[
  {{
    "fileName": "ファイル名",
    "ingredients": [
      {{
        "name": "食材名（日本語）",
        "confidence": 0.0〜1.0の信頼度,
        "boundingBox": {{ "x": 0.0, "y": 0.0, "width": 0.0, "height": 0.0 }}
      }}
    ],
    "confidence": 写真全体の信頼度
  }}
]

## 注意
- 食材のみを列挙（食器・調理器具・包装は除外）
- 同じ食材が複数写っていても1件にまとめる
- boundingBoxは画像サイズを1とした正規化座標。不明なら省略
- 推測せず、見えるものだけを記載
- JSON配列のみ出力。説明文は不要

対象写真:
{photo_list}"#
    )
}

/// レシピ提案プロンプト生成
///
/// # Arguments
/// * `ingredients` - 確定食材名
/// * `seasonings` - 手元にある調味料
/// * `count` - 提案するレシピ数
pub fn build_recipe_prompt(ingredients: &[String], seasonings: &[Seasoning], count: usize) -> String {
    let ingredient_list = if ingredients.is_empty() {
        "（なし）".to_string()
    } else {
        ingredients.join("、")
    };
    let seasoning_list = if seasonings.is_empty() {
        "（なし）".to_string()
    } else {
        seasonings
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join("、")
    };

    format!(
        r#"あなたは家庭料理のプロです。手元の食材でつくれるレシピを{count}件提案してください。

## 手元の食材
{ingredient_list}

## 手元の調味料
{seasoning_list}

## 出力形式（厳密にこのJSON配列形式で出力）
[
  {{
    "id": "一意なID",
    "title": "料理名",
    "description": "料理の説明",
    "cookingTime": "30分",
    "difficulty": "easy | medium | hard",
    "servings": 2,
    "calories": 400,
    "ingredients": [{{ "name": "材料名", "amount": "1", "unit": "個", "category": "野菜" }}],
    "steps": [{{ "order": 1, "instruction": "手順", "duration": "5分", "tips": "コツ" }}],
    "tips": ["ポイント"]
  }}
]

## 注意
- 手元の食材をできるだけ多く使う
- 調味料は手元にあるものを優先し、使う調味料は手順の中で名前を明記する
- cookingTimeは「○分」の形式
- stepsはorder順に並べる
- JSON配列のみ出力。説明文は不要"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SeasoningCategory;

    #[test]
    fn test_build_detection_prompt() {
        let prompt = build_detection_prompt(&["fridge1.jpg", "fridge2.jpg"]);
        assert!(prompt.contains("- fridge1.jpg"));
        assert!(prompt.contains("- fridge2.jpg"));
        assert!(prompt.contains("\"boundingBox\""));
        assert!(prompt.contains("JSON配列のみ出力"));
    }

    #[test]
    fn test_build_recipe_prompt() {
        let seasonings = vec![Seasoning {
            id: "soy-sauce".to_string(),
            name: "醤油".to_string(),
            category: SeasoningCategory::Sauce,
            is_available: true,
        }];
        let prompt = build_recipe_prompt(&["鶏肉".to_string(), "玉ねぎ".to_string()], &seasonings, 3);
        assert!(prompt.contains("3件"));
        assert!(prompt.contains("鶏肉、玉ねぎ"));
        assert!(prompt.contains("醤油"));
        assert!(prompt.contains("\"cookingTime\""));
    }

    #[test]
    fn test_build_recipe_prompt_empty() {
        let prompt = build_recipe_prompt(&[], &[], 1);
        assert!(prompt.contains("（なし）"));
    }
}
