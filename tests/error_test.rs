//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use recipe_ai_rust::error::RecipeAiError;
use recipe_ai_rust::scanner;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(RecipeAiError::FolderNotFound(_))));
}

/// 画像のないフォルダをスキャンした場合
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");

    std::fs::write(dir.path().join("memo.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("recipes.json"), "[]").unwrap();

    let result = scanner::scan_folder(dir.path());
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// RecipeAiErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        RecipeAiError::Config("テスト設定エラー".to_string()),
        RecipeAiError::FileNotFound("recipes.json".to_string()),
        RecipeAiError::FolderNotFound("/path/to/folder".to_string()),
        RecipeAiError::NoImagesFound("フォルダ".to_string()),
        RecipeAiError::ApiCall("AI呼び出し失敗".to_string()),
        RecipeAiError::RecipeNotFound("r1".to_string()),
        RecipeAiError::Prompt("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 食材なしエラーのメッセージ確認
#[test]
fn test_no_ingredients_message() {
    let display = format!("{}", RecipeAiError::NoIngredients);
    assert!(display.contains("食材"));
    assert!(display.contains("recipe-ai ingredient --add"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: RecipeAiError = io_err.into();

    assert!(matches!(err, RecipeAiError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: RecipeAiError = json_err.into();

    assert!(matches!(err, RecipeAiError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = recipe_ai_common::Error::Parse("パースエラー".to_string());
    let err: RecipeAiError = common_err.into();

    assert!(matches!(err, RecipeAiError::Common(_)));
    assert_eq!(format!("{}", err), "Parse error: パースエラー");
}
