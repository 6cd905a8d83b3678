//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use menu_match::error::MenuMatchError;
use menu_match::loader;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないメニューファイル
#[test]
fn test_read_nonexistent_menu() {
    let result = loader::read_menu(Path::new("/nonexistent/path/menu.txt"));
    assert!(matches!(result, Err(MenuMatchError::FileNotFound(_))));
}

/// 重複IDを含むカタログ
#[test]
fn test_catalog_with_duplicate_ids() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"id":"i1","name":"garlic"},{"id":"i1","name":"onion"}]"#,
    )
    .unwrap();

    let err = loader::load_catalog(Some(path.as_path())).unwrap_err();
    assert!(matches!(
        err,
        MenuMatchError::Common(menu_match_common::Error::InvalidInput(_))
    ));
    assert!(format!("{}", err).contains("duplicate"));
}

/// 不正なJSONのプロファイル
#[test]
fn test_malformed_profile() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("profile.json");
    std::fs::write(&path, "{ like: ").unwrap();

    let catalog = menu_match_common::IngredientCatalog::builtin();
    let err = loader::load_profile(&path, catalog).unwrap_err();
    assert!(matches!(
        err,
        MenuMatchError::Common(menu_match_common::Error::Json(_))
    ));
}

/// MenuMatchErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        MenuMatchError::Config("テスト設定エラー".to_string()),
        MenuMatchError::FileNotFound("menu.txt".to_string()),
        MenuMatchError::EmptyMenu("menu.txt".to_string()),
        MenuMatchError::UnknownPreset("lenient".to_string()),
        MenuMatchError::MissingProfile,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingProfileエラーのメッセージ確認
#[test]
fn test_missing_profile_message() {
    let display = format!("{}", MenuMatchError::MissingProfile);
    assert!(display.contains("--profile"));
    assert!(display.contains("menu-match config"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MenuMatchError = io_err.into();

    assert!(matches!(err, MenuMatchError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MenuMatchError = json_err.into();

    assert!(matches!(err, MenuMatchError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = menu_match_common::Error::InvalidInput("menuText is required".to_string());
    let err: MenuMatchError = common_err.into();

    assert!(matches!(err, MenuMatchError::Common(_)));
    assert_eq!(format!("{}", err), "Invalid input: menuText is required");
}
