use clap::{Parser, Subcommand};
use crate::ai_provider::AiProvider;
use recipe_ai_common::{DifficultyFilter, SortBy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-ai")]
#[command(about = "食材写真AI解析・レシピ提案ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AIプロバイダ (claude/codex/gemini)
    #[arg(long, default_value = "claude", global = true)]
    pub ai_provider: AiProvider,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 食材写真のフォルダを解析して検出食材をJSON出力
    Analyze {
        /// 写真フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力フォルダ/ingredients.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// バッチサイズ（一度に解析する枚数。省略時は設定値）
        #[arg(short, long)]
        batch_size: Option<usize>,

        /// キャッシュを使用（再解析をスキップ）
        #[arg(long)]
        use_cache: bool,
    },

    /// 手動で食材を追加・削除し、確定食材を表示
    Ingredient {
        /// 食材を追加
        #[arg(long, value_parser = parse_ingredient_name)]
        add: Vec<String>,

        /// 食材を削除
        #[arg(long, value_parser = parse_ingredient_name)]
        remove: Vec<String>,

        /// 検出・手動食材をすべてクリア
        #[arg(long)]
        clear: bool,
    },

    /// 手元の調味料を設定・表示
    Seasoning {
        /// 在庫ありにする調味料ID
        #[arg(long)]
        set: Vec<String>,

        /// 在庫なしにする調味料ID
        #[arg(long)]
        unset: Vec<String>,

        /// チェックリストで選択
        #[arg(short, long)]
        interactive: bool,
    },

    /// 確定食材と手元の調味料からレシピを提案
    Suggest {
        /// 出力JSONファイル
        #[arg(short, long, default_value = "recipes.json")]
        output: PathBuf,

        /// 提案するレシピ数（省略時は設定値）
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// レシピJSONを絞り込み・並び替えて表示
    Recipes {
        /// レシピJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 検索語（タイトル・説明の部分一致）
        #[arg(short, long, default_value = "")]
        query: String,

        /// 難易度 (all/easy/medium/hard)
        #[arg(short, long, default_value = "all")]
        difficulty: DifficultyFilter,

        /// 最大調理時間（分）
        #[arg(short = 't', long)]
        max_time: Option<u32>,

        /// 並び順 (relevance/time/difficulty/calories)
        #[arg(short, long, default_value = "relevance")]
        sort: SortBy,
    },

    /// お気に入りの管理
    Favorite {
        /// 追加するレシピID（--from と併用）
        #[arg(long, requires = "from")]
        add: Option<String>,

        /// 追加元のレシピJSONファイル
        #[arg(long)]
        from: Option<PathBuf>,

        /// 削除するレシピID
        #[arg(long)]
        remove: Option<String>,
    },

    /// 提案履歴の表示・削除
    History {
        /// 履歴を削除
        #[arg(long)]
        clear: bool,
    },

    /// 設定を表示/編集
    Config {
        /// AI CLIのコマンド名を設定
        #[arg(long)]
        set_ai_command: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// キャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,

        /// 対象フォルダ（省略時はカレント）
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// キャッシュ情報を表示
        #[arg(long)]
        info: bool,
    },
}

/// 食材名の前後の空白を除去（空は拒否）
fn parse_ingredient_name(s: &str) -> Result<String, String> {
    let name = s.trim();
    if name.is_empty() {
        return Err("食材名が空です".to_string());
    }
    Ok(name.to_string())
}
