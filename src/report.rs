//! 端末表示用の整形

use recipe_ai_common::{Recipe, Seasoning, SeasoningCategory};

/// レシピ1件の表示文字列（足りない調味料付き）
pub fn format_recipe(recipe: &Recipe, missing: &[String]) -> String {
    let mut lines = Vec::new();

    let mut header = format!(
        "■ {} [{}] {} / {} / {}人前",
        recipe.title,
        recipe.id,
        recipe.cooking_time,
        recipe.difficulty.label(),
        recipe.servings
    );
    if let Some(kcal) = recipe.calories {
        header.push_str(&format!(" / {:.0}kcal", kcal));
    }
    lines.push(header);

    if !recipe.description.is_empty() {
        lines.push(format!("  {}", recipe.description));
    }

    if !recipe.ingredients.is_empty() {
        let items = recipe
            .ingredients
            .iter()
            .map(|i| format!("{} {}{}", i.name, i.amount, i.unit))
            .collect::<Vec<_>>()
            .join("、");
        lines.push(format!("  材料: {}", items));
    }

    for step in &recipe.steps {
        let mut line = format!("  {}. {}", step.order, step.instruction);
        if let Some(duration) = &step.duration {
            line.push_str(&format!("（{}）", duration));
        }
        lines.push(line);
    }

    if missing.is_empty() {
        lines.push("  ✔ 調味料はそろっています".to_string());
    } else {
        lines.push(format!("  ⚠ 足りない調味料: {}", missing.join("、")));
    }

    lines.join("\n")
}

/// カテゴリ別の調味料チェックリスト
pub fn format_seasonings(seasonings: &[Seasoning]) -> String {
    let mut lines = Vec::new();
    for category in SeasoningCategory::ALL {
        let items: Vec<&Seasoning> = seasonings.iter().filter(|s| s.category == category).collect();
        if items.is_empty() {
            continue;
        }
        lines.push(format!("{}:", category.label()));
        for s in items {
            let mark = if s.is_available { "[x]" } else { "[ ]" };
            lines.push(format!("  {} {} ({})", mark, s.name, s.id));
        }
    }
    lines.join("\n")
}
