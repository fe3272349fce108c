use clap::Parser;
use recipe_ai_common::{
    filter_and_sort, merge_analysis_results, missing, Recipe, RecipeFilter, SeasoningCatalog,
};
use recipe_ai_rust::{analyzer, cli, config, error, report, scanner, seasoning_picker, session, store};
use cli::{Cli, Commands};
use config::Config;
use error::{RecipeAiError, Result};
use std::path::{Path, PathBuf};
use store::RecipeStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    if !path.exists() {
        return Err(RecipeAiError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_recipes(recipes: &[Recipe], available: &[String]) {
    let catalog = SeasoningCatalog::default_catalog();
    for recipe in recipes {
        let lacking = missing(recipe, &catalog, available);
        println!("{}\n", report::format_recipe(recipe, &lacking));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let work_dir = std::env::current_dir()?;
    let runner = analyzer::AiRunner::new(
        cli.ai_provider,
        config.resolve_ai_command(cli.ai_provider.command_name()),
        config.timeout_seconds,
    );

    match cli.command {
        Commands::Analyze { folder, output, batch_size, use_cache } => {
            println!("📸 recipe-ai - 食材解析\n");

            // 1. 画像スキャン
            println!("[1/3] 写真をスキャン中...");
            let images = scanner::scan_folder(&folder)?;
            if images.is_empty() {
                return Err(RecipeAiError::NoImagesFound(folder.display().to_string()));
            }
            println!("✔ {}枚の写真を検出\n", images.len());

            // 2. AI解析
            println!("[2/3] AI解析中...{}", if use_cache { " (キャッシュ有効)" } else { "" });
            let batch_size = batch_size.unwrap_or(config.default_batch_size);
            let results = if use_cache {
                analyzer::analyze_images_with_cache(&runner, &images, &folder, batch_size).await?
            } else {
                analyzer::analyze_images(&runner, &images, batch_size).await?
            };
            println!("✔ 解析完了\n");

            // 3. 画像間で食材をまとめてセッションへ
            println!("[3/3] 食材をまとめています...");
            let merged = merge_analysis_results(&results);
            info!("検出食材: {}件（{}枚）", merged.len(), results.len());

            let output = output.unwrap_or_else(|| folder.join("ingredients.json"));
            std::fs::write(&output, serde_json::to_string_pretty(&results)?)?;
            println!("✔ 結果を保存: {}", output.display());

            let mut state = session::load(&work_dir)?;
            state.set_detected_ingredients(merged);
            session::save(&work_dir, &state)?;

            for ingredient in state.detected_ingredients() {
                match ingredient.confidence {
                    Some(c) => println!("  - {} ({:.0}%)", ingredient.name, c * 100.0),
                    None => println!("  - {}", ingredient.name),
                }
            }

            println!("\n確定食材: {}", state.confirmed_ingredients().join("、"));
            println!("\n✅ 解析完了");
        }

        Commands::Ingredient { add, remove, clear } => {
            let mut state = session::load(&work_dir)?;

            if clear {
                state.clear();
                println!("✔ 食材をクリアしました");
            }
            for name in &add {
                if state.add_manual_ingredient(name) {
                    println!("✔ 追加: {}", name);
                } else {
                    println!("- 追加済み: {}", name);
                }
            }
            for name in &remove {
                if !state.remove_manual_ingredient(name) {
                    warn!("手動追加された食材ではありません: {}", name);
                }
            }
            session::save(&work_dir, &state)?;

            let confirmed = state.confirmed_ingredients();
            if confirmed.is_empty() {
                println!("確定食材: なし");
            } else {
                println!("確定食材 ({}件): {}", confirmed.len(), confirmed.join("、"));
            }
        }

        Commands::Seasoning { set, unset, interactive } => {
            let mut state = session::load(&work_dir)?;
            let catalog = SeasoningCatalog::default_catalog();

            for (ids, available) in [(&set, true), (&unset, false)] {
                for id in ids {
                    if state.set_seasoning_availability(id, available) {
                        if let Some(s) = catalog.get(id) {
                            println!("✔ {}: {}", s.name, if available { "あり" } else { "なし" });
                        }
                    } else {
                        warn!("不明な調味料ID: {}", id);
                    }
                }
            }
            if interactive {
                let changed = seasoning_picker::run_interactive(&mut state)?;
                println!("✔ {}件を更新しました\n", changed);
            }
            session::save(&work_dir, &state)?;

            println!("{}", report::format_seasonings(state.seasonings()));
        }

        Commands::Suggest { output, count } => {
            println!("🍳 recipe-ai - レシピ提案\n");

            let state = session::load(&work_dir)?;
            let ingredients = state.confirmed_ingredients();
            if ingredients.is_empty() {
                return Err(RecipeAiError::NoIngredients);
            }
            let seasonings = state.available_seasonings();
            let count = count.unwrap_or(config.recipe_count);

            println!("食材: {}", ingredients.join("、"));
            println!("AIに問い合わせ中...");
            let recipes = runner.suggest_recipes(&ingredients, &seasonings, count).await?;
            println!("✔ {}件のレシピ\n", recipes.len());

            std::fs::write(&output, serde_json::to_string_pretty(&recipes)?)?;

            let mut history = RecipeStore::history()?;
            history.append(&recipes);
            history.save()?;

            print_recipes(&recipes, &state.available_seasoning_names());
            println!("✔ 結果を保存: {}", output.display());
        }

        Commands::Recipes { input, query, difficulty, max_time, sort } => {
            let recipes = load_recipes(&input)?;
            let filter = RecipeFilter {
                search_query: query,
                difficulty,
                max_cooking_time_minutes: max_time,
                sort_by: sort,
            };
            let visible = filter_and_sort(&recipes, &filter);
            println!("{}件中 {}件\n", recipes.len(), visible.len());

            let state = session::load(&work_dir)?;
            print_recipes(&visible, &state.available_seasoning_names());
        }

        Commands::Favorite { add, from, remove } => {
            let mut favorites = RecipeStore::favorites()?;

            if let (Some(id), Some(from)) = (add, from) {
                let recipe = load_recipes(&from)?
                    .into_iter()
                    .find(|r| r.id == id)
                    .ok_or_else(|| RecipeAiError::RecipeNotFound(id.clone()))?;
                if favorites.add(recipe) {
                    println!("✔ お気に入りに追加: {}", id);
                } else {
                    println!("- 登録済み: {}", id);
                }
            }
            if let Some(id) = remove {
                if favorites.remove(&id) {
                    println!("✔ お気に入りから削除: {}", id);
                } else {
                    return Err(RecipeAiError::RecipeNotFound(id));
                }
            }
            favorites.save()?;

            println!("お気に入り ({}件):", favorites.entries().len());
            for entry in favorites.entries() {
                println!("  {} {} [{}]", entry.saved_at.format("%Y-%m-%d"), entry.recipe.title, entry.recipe.id);
            }
        }

        Commands::History { clear } => {
            let mut history = RecipeStore::history()?;
            if clear {
                history.clear();
                history.save()?;
                println!("✔ 履歴を削除しました");
            } else {
                println!("提案履歴 ({}件):", history.entries().len());
                for entry in history.entries().iter().rev() {
                    println!("  {} {} [{}]", entry.saved_at.format("%Y-%m-%d %H:%M"), entry.recipe.title, entry.recipe.id);
                }
            }
        }

        Commands::Config { set_ai_command, show } => {
            let mut config = config;

            if let Some(command) = set_ai_command {
                config.set_ai_command(command)?;
                println!("✔ AIコマンドを設定しました");
            }

            if show {
                println!("設定:");
                println!("  AIコマンド: {}", config.resolve_ai_command(cli.ai_provider.command_name()));
                println!("  バッチサイズ: {}", config.default_batch_size);
                println!("  提案レシピ数: {}", config.recipe_count);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }

        Commands::Cache { clear, folder, info } => {
            let target = folder.unwrap_or_else(|| PathBuf::from("."));
            let cache_path = analyzer::CacheFile::cache_path(&target);

            if info || !clear {
                if cache_path.exists() {
                    let cache = analyzer::CacheFile::load(&target);
                    println!("キャッシュ情報:");
                    println!("  パス: {}", cache_path.display());
                    println!("  件数: {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  サイズ: {} bytes", meta.len());
                    }
                } else {
                    println!("キャッシュファイルが存在しません: {}", cache_path.display());
                }
            }

            if clear {
                if analyzer::CacheFile::clear(&target)? {
                    println!("✔ キャッシュを削除しました: {}", cache_path.display());
                } else {
                    println!("キャッシュファイルが存在しません");
                }
            }
        }
    }

    Ok(())
}
