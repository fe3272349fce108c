//! AI CLI連携モジュール
//!
//! - 食材検出: 画像ファイルを読ませて食材をJSONで返させる
//! - レシピ提案: 食材・調味料からレシピをJSONで返させる
//!
//! プロンプト生成とレスポンスのパースは recipe_ai_common を使用

use crate::ai_provider::AiProvider;
use crate::error::{RecipeAiError, Result};
use crate::scanner::ImageInfo;
use recipe_ai_common::{
    build_detection_prompt, build_recipe_prompt, parse_detection_response, parse_recipe_response,
    AnalysisResult, Recipe, Seasoning,
};
use std::time::{Duration, Instant};
use tokio::process::Command;

/// AI CLIの呼び出し設定
#[derive(Debug, Clone)]
pub struct AiRunner {
    pub provider: AiProvider,
    pub command: String,
    pub timeout: Duration,
}

impl AiRunner {
    pub fn new(provider: AiProvider, command: String, timeout_seconds: u64) -> Self {
        Self {
            provider,
            command,
            timeout: Duration::from_secs(timeout_seconds),
        }
    }

    /// 1バッチ分の画像から食材を検出
    pub async fn detect_ingredients(&self, images: &[ImageInfo]) -> Result<Vec<AnalysisResult>> {
        let started = Instant::now();

        let image_list = images
            .iter()
            .map(|img| img.path.display().to_string().replace('\\', "/"))
            .collect::<Vec<_>>()
            .join(", ");
        let file_names: Vec<&str> = images.iter().map(|img| img.file_name.as_str()).collect();

        let prompt = format!(
            "Read the following image files and analyze them: {}\n\n{}",
            image_list,
            build_detection_prompt(&file_names)
        );
        tracing::debug!(chars = prompt.len(), "[検出] プロンプト生成");

        let response = self.run(&prompt).await?;
        let mut results = parse_detection_response(&response)?;

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        for result in &mut results {
            if let Some(img) = images.iter().find(|i| i.file_name == result.file_name) {
                result.image_url = img.path.display().to_string();
            }
            result.processing_time = elapsed_ms;
        }

        Ok(results)
    }

    /// レシピ提案
    pub async fn suggest_recipes(
        &self,
        ingredients: &[String],
        seasonings: &[Seasoning],
        count: usize,
    ) -> Result<Vec<Recipe>> {
        let prompt = build_recipe_prompt(ingredients, seasonings, count);
        tracing::debug!(chars = prompt.len(), "[提案] プロンプト生成");

        let response = self.run(&prompt).await?;
        Ok(parse_recipe_response(&response)?)
    }

    async fn run(&self, prompt: &str) -> Result<String> {
        let args = self.provider.prompt_args(prompt);

        #[cfg(windows)]
        let mut command = {
            let mut c = Command::new("cmd");
            c.arg("/c").arg(&self.command).args(&args);
            c
        };

        #[cfg(not(windows))]
        let mut command = {
            let mut c = Command::new(&self.command);
            c.args(&args);
            c
        };

        command.kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| {
                RecipeAiError::ApiCall(format!(
                    "{} が{}秒以内に応答しませんでした",
                    self.command,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| RecipeAiError::ApiCall(format!("{} 実行エラー: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecipeAiError::ApiCall(format!(
                "{} failed (code {:?}): {}",
                self.command,
                output.status.code(),
                stderr
            )));
        }

        let response = String::from_utf8_lossy(&output.stdout).to_string();
        let preview: String = response.chars().take(500).collect();
        tracing::debug!(chars = response.len(), "レスポンス: {}", preview);

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_missing_command() {
        let runner = AiRunner::new(AiProvider::Claude, "recipe-ai-no-such-command".to_string(), 5);
        let result = runner.suggest_recipes(&["卵".to_string()], &[], 1).await;
        assert!(matches!(result, Err(RecipeAiError::ApiCall(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_failing_command() {
        // `false` は常に終了コード1
        let runner = AiRunner::new(AiProvider::Gemini, "false".to_string(), 5);
        let result = runner.suggest_recipes(&[], &[], 1).await;
        match result {
            Err(RecipeAiError::ApiCall(msg)) => assert!(msg.contains("failed")),
            other => panic!("Expected ApiCall error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_non_json_output_is_parse_error() {
        // `echo` は引数をそのまま出力するのでプロンプトが返る（JSON配列の例を含む）
        // プロンプト内の例はJSONとして不正なのでパースエラーになる
        let runner = AiRunner::new(AiProvider::Gemini, "echo".to_string(), 5);
        let result = runner.suggest_recipes(&["卵".to_string()], &[], 1).await;
        match result {
            Err(RecipeAiError::Common(recipe_ai_common::Error::Parse(msg))) => {
                assert!(msg.contains("レシピ JSONパースエラー"))
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }
}
