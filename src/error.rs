use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("AI呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("レシピが見つかりません: {0}")]
    RecipeNotFound(String),

    #[error("食材がありません。`recipe-ai analyze` または `recipe-ai ingredient --add` で追加してください")]
    NoIngredients,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] recipe_ai_common::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, RecipeAiError>;
