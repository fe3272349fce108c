//! 対話式の調味料チェックリスト

use crate::error::{RecipeAiError, Result};
use dialoguer::MultiSelect;
use recipe_ai_common::PantryState;

/// チェックリストで在庫有無を選び直す
///
/// 変更した調味料の数を返す
pub fn run_interactive(state: &mut PantryState) -> Result<usize> {
    let labels: Vec<String> = state
        .seasonings()
        .iter()
        .map(|s| format!("{} ({})", s.name, s.category.label()))
        .collect();
    let defaults: Vec<bool> = state.seasonings().iter().map(|s| s.is_available).collect();

    let selected = MultiSelect::new()
        .with_prompt("手元にある調味料を選択（スペースで切替、Enterで確定）")
        .items(&labels)
        .defaults(&defaults)
        .interact()
        .map_err(|e| RecipeAiError::Prompt(e.to_string()))?;

    Ok(apply_selection(state, &selected))
}

/// 選択されたインデックスを在庫ありとして反映
fn apply_selection(state: &mut PantryState, selected: &[usize]) -> usize {
    let changes: Vec<(String, bool)> = state
        .seasonings()
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.clone(), selected.contains(&i)))
        .filter(|(id, available)| {
            state
                .seasonings()
                .iter()
                .any(|s| &s.id == id && s.is_available != *available)
        })
        .collect();

    for (id, available) in &changes {
        state.set_seasoning_availability(id, *available);
    }
    changes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_selection() {
        let mut state = PantryState::default();
        let salt_idx = state.seasonings().iter().position(|s| s.id == "salt").unwrap();
        let miso_idx = state.seasonings().iter().position(|s| s.id == "miso").unwrap();

        // 塩と味噌だけを選択
        let before_available = state.available_seasonings().len();
        let changed = apply_selection(&mut state, &[salt_idx, miso_idx]);

        assert_eq!(
            state.available_seasoning_names(),
            vec!["塩".to_string(), "味噌".to_string()]
        );
        // 塩以外の在庫あり → なし、味噌 なし → あり
        assert_eq!(changed, before_available - 1 + 1);
    }

    #[test]
    fn test_apply_selection_no_change() {
        let mut state = PantryState::default();
        let current: Vec<usize> = state
            .seasonings()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_available)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(apply_selection(&mut state, &current), 0);
    }
}
