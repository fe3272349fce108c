//! recipe-ai-rust
//!
//! 食材写真をAIで解析し、手元の食材・調味料からレシピを提案するCLI

pub mod ai_provider;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod seasoning_picker;
pub mod session;
pub mod store;
