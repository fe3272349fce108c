//! レシピに必要な調味料の抽出
//!
//! タイトル・説明・各手順の本文にカタログの調味料名が部分一致するかで判定する。
//! 単純な部分文字列一致なので「塩昆布」のような語にも「塩」が一致する。

use crate::catalog::SeasoningCatalog;
use crate::types::Recipe;

fn searchable_text(recipe: &Recipe) -> String {
    let mut text = String::with_capacity(recipe.title.len() + recipe.description.len());
    text.push_str(&recipe.title);
    text.push('\n');
    text.push_str(&recipe.description);
    for step in &recipe.steps {
        text.push('\n');
        text.push_str(&step.instruction);
    }
    text
}

/// レシピ本文に現れる調味料名（カタログの宣言順、重複なし）
pub fn extract_required(recipe: &Recipe, catalog: &SeasoningCatalog) -> Vec<String> {
    let text = searchable_text(recipe);
    let mut required: Vec<String> = Vec::new();
    for name in catalog.names() {
        if !name.is_empty() && text.contains(name) && !required.iter().any(|r| r == name) {
            required.push(name.to_string());
        }
    }
    required
}

/// 必要な調味料のうち、手元にないもの
pub fn missing<S: AsRef<str>>(
    recipe: &Recipe,
    catalog: &SeasoningCatalog,
    available_names: &[S],
) -> Vec<String> {
    extract_required(recipe, catalog)
        .into_iter()
        .filter(|name| !available_names.iter().any(|a| a.as_ref() == name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pantry::PantryState;
    use crate::types::{RecipeStep, Seasoning, SeasoningCategory};

    fn seasoning(id: &str, name: &str) -> Seasoning {
        Seasoning {
            id: id.to_string(),
            name: name.to_string(),
            category: SeasoningCategory::Basic,
            is_available: false,
        }
    }

    #[test]
    fn test_extract_required_from_description() {
        let catalog = SeasoningCatalog::new(vec![seasoning("salt", "塩"), seasoning("soy", "醤油")]);
        let recipe = Recipe {
            id: "1".to_string(),
            title: "野菜炒め".to_string(),
            description: "塩と醤油で味付け".to_string(),
            ..Default::default()
        };

        assert_eq!(extract_required(&recipe, &catalog), vec!["塩", "醤油"]);
        assert_eq!(missing(&recipe, &catalog, &["塩"]), vec!["醤油"]);
    }

    #[test]
    fn test_extract_required_with_default_catalog() {
        let catalog = SeasoningCatalog::default_catalog();
        let recipe = Recipe {
            id: "1".to_string(),
            description: "塩と醤油で味付け".to_string(),
            ..Default::default()
        };

        assert_eq!(extract_required(&recipe, &catalog), vec!["塩", "醤油"]);

        let mut state = PantryState::new(&catalog);
        for s in catalog.list_all() {
            state.set_seasoning_availability(&s.id, false);
        }
        state.set_seasoning_availability("salt", true);
        assert_eq!(
            missing(&recipe, &catalog, &state.available_seasoning_names()),
            vec!["醤油"]
        );
    }

    #[test]
    fn test_extract_required_catalog_order() {
        let catalog = SeasoningCatalog::default_catalog();
        let recipe = Recipe {
            id: "1".to_string(),
            title: "生姜焼き".to_string(),
            steps: vec![
                RecipeStep {
                    order: 1,
                    instruction: "みりんと醤油を混ぜる".to_string(),
                    ..Default::default()
                },
                RecipeStep {
                    order: 2,
                    instruction: "最後に塩で調える。醤油を少し足す".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        // 出現順ではなくカタログの宣言順
        assert_eq!(extract_required(&recipe, &catalog), vec!["塩", "醤油", "みりん", "生姜"]);
    }

    #[test]
    fn test_extract_required_no_match() {
        let catalog = SeasoningCatalog::default_catalog();
        let recipe = Recipe {
            id: "1".to_string(),
            title: "冷奴".to_string(),
            description: "豆腐を切って盛る".to_string(),
            ..Default::default()
        };
        assert!(extract_required(&recipe, &catalog).is_empty());
        assert!(missing(&recipe, &catalog, &Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_substring_match_is_preserved() {
        let catalog = SeasoningCatalog::new(vec![seasoning("salt", "塩")]);
        let recipe = Recipe {
            id: "1".to_string(),
            description: "塩昆布和え".to_string(),
            ..Default::default()
        };
        assert_eq!(extract_required(&recipe, &catalog), vec!["塩"]);
    }
}
