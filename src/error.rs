use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("メニューが空です: {0}")]
    EmptyMenu(String),

    #[error("不明な重みプリセット: {0} (standard/strict)")]
    UnknownPreset(String),

    #[error("好みプロファイルが指定されていません。`--profile FILE` または `menu-match config --set-profile FILE` で設定してください")]
    MissingProfile,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] menu_match_common::Error),
}

pub type Result<T> = std::result::Result<T, MenuMatchError>;
