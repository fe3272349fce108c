//! Recipe AI Common Library
//!
//! CLIで使用される型と純粋ロジック（I/Oなし）

pub mod types;
pub mod error;
pub mod catalog;
pub mod pantry;
pub mod filter;
pub mod seasoning;
pub mod merge;
pub mod prompts;
pub mod parser;

pub use types::{
    AnalysisResult, BoundingBox, Difficulty, Ingredient, Recipe, RecipeIngredient, RecipeStep,
    Seasoning, SeasoningCategory,
};
pub use error::{Error, Result};
pub use catalog::SeasoningCatalog;
pub use pantry::PantryState;
pub use filter::{filter_and_sort, parse_cooking_minutes, DifficultyFilter, RecipeFilter, SortBy};
pub use seasoning::{extract_required, missing};
pub use merge::{merge_analysis_results, merge_ingredients};
pub use prompts::{build_detection_prompt, build_recipe_prompt};
pub use parser::{extract_json, parse_detection_response, parse_recipe_response};
