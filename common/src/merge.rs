//! 複数画像の検出食材マージ
//!
//! 食材名ごとに最も信頼度の高いエントリを残す。
//! 同値の場合は先に現れたものを残す。

use crate::types::{AnalysisResult, Ingredient};
use std::collections::HashMap;

/// 食材リスト群を名前で重複排除する
///
/// 出力順は各食材名の初出順
pub fn merge_ingredients<L>(lists: &[L]) -> Vec<Ingredient>
where
    L: AsRef<[Ingredient]>,
{
    let mut merged: Vec<Ingredient> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for ingredient in lists.iter().flat_map(|l| l.as_ref().iter()) {
        match index.get(&ingredient.name) {
            Some(&i) => {
                let stored = merged[i].confidence.unwrap_or(0.0);
                if ingredient.confidence.unwrap_or(0.0) > stored {
                    merged[i] = ingredient.clone();
                }
            }
            None => {
                index.insert(ingredient.name.clone(), merged.len());
                merged.push(ingredient.clone());
            }
        }
    }

    merged
}

pub fn merge_analysis_results(results: &[AnalysisResult]) -> Vec<Ingredient> {
    let lists: Vec<&[Ingredient]> = results.iter().map(|r| r.ingredients.as_slice()).collect();
    merge_ingredients(&lists)
}
