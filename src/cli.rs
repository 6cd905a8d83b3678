use clap::{Parser, Subcommand};
use menu_match_common::MatchMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menu-match")]
#[command(about = "好みプロファイルでメニューの料理を推薦するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// メニューの料理をランキング
    Rank {
        /// メニューテキストファイル（"-" で標準入力）
        #[arg(required = true)]
        menu: PathBuf,

        /// 好みプロファイルJSON
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// 食材カタログJSON（省略時は設定または組み込みカタログ）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// 重みプリセット (standard/strict)
        #[arg(short, long)]
        weights: Option<String>,

        /// 照合方式 (substring/word)
        #[arg(short = 'm', long)]
        match_mode: Option<MatchMode>,

        /// 避けるべき料理を結果から除外
        #[arg(long)]
        exclude_unsafe: bool,
    },

    /// テキスト中の食材を検出
    Resolve {
        /// 対象テキスト
        #[arg(required = true)]
        text: String,

        /// 食材カタログJSON
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 照合方式 (substring/word)
        #[arg(short = 'm', long)]
        match_mode: Option<MatchMode>,
    },

    /// 食材カタログを検索
    Search {
        /// 検索語（省略時は全件）
        #[arg(default_value = "")]
        query: String,

        /// 食材カタログJSON
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 好みプロファイルを検証
    Profile {
        /// 好みプロファイルJSON
        #[arg(required = true)]
        input: PathBuf,

        /// 重複を解消したプロファイルを出力
        #[arg(long)]
        normalize: bool,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 食材カタログJSON
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 推薦リクエストJSONを処理してレスポンスJSONを出力
    Recommend {
        /// リクエストJSON（menuText, profile）
        #[arg(required = true)]
        request: PathBuf,

        /// 食材カタログJSON
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 食材カタログのパスを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 既定の好みプロファイルを設定
        #[arg(long)]
        set_profile: Option<PathBuf>,

        /// 重みプリセットを設定
        #[arg(long)]
        set_weights: Option<String>,

        /// 照合方式を設定
        #[arg(long)]
        set_match_mode: Option<MatchMode>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
