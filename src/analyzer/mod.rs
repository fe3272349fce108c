mod ai_cli;
pub mod cache;

pub use ai_cli::AiRunner;
pub use cache::CacheFile;

use crate::error::Result;
use crate::scanner::ImageInfo;
use indicatif::{ProgressBar, ProgressStyle};
use recipe_ai_common::AnalysisResult;
use std::path::Path;

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("  [{bar:30}] {pos}/{len}枚 {msg}") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}

/// 画像をバッチに分けて食材検出
pub async fn analyze_images(
    runner: &AiRunner,
    images: &[ImageInfo],
    batch_size: usize,
) -> Result<Vec<AnalysisResult>> {
    let mut results = Vec::new();
    let bar = progress_bar(images.len());

    for (batch_idx, batch) in images.chunks(batch_size.max(1)).enumerate() {
        tracing::debug!("バッチ {}: {}枚", batch_idx + 1, batch.len());
        bar.set_message(format!("バッチ{}", batch_idx + 1));

        let batch_results = runner.detect_ingredients(batch).await?;
        results.extend(batch_results);
        bar.inc(batch.len() as u64);
    }

    bar.finish_and_clear();
    Ok(results)
}

/// キャッシュを使って食材検出（キャッシュ済みの画像は再解析しない）
///
/// 結果は画像のファイル名順
pub async fn analyze_images_with_cache(
    runner: &AiRunner,
    images: &[ImageInfo],
    folder: &Path,
    batch_size: usize,
) -> Result<Vec<AnalysisResult>> {
    let mut cache = CacheFile::load(folder);
    let (mut results, uncached) = cache::filter_cached_images(images, &cache);
    tracing::info!("キャッシュヒット: {}枚 / 未解析: {}枚", results.len(), uncached.len());

    if !uncached.is_empty() {
        let pending: Vec<ImageInfo> = uncached.iter().map(|(img, _)| img.clone()).collect();
        let fresh = analyze_images(runner, &pending, batch_size).await?;

        for (img, hash) in &uncached {
            if hash.is_empty() {
                continue;
            }
            if let Some(result) = fresh.iter().find(|r| r.file_name == img.file_name) {
                let file_size = std::fs::metadata(&img.path).map(|m| m.len()).unwrap_or(0);
                cache.insert(hash.clone(), img.file_name.clone(), file_size, result.clone());
            }
        }
        cache.save(folder)?;
        results.extend(fresh);
    }

    results.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(results)
}
