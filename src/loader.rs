//! 入力ファイルの読み込み
//!
//! メニューテキスト・好みプロファイル・食材カタログを読み込む。
//! コア側は読み込み済みのデータだけを受け取る。

use crate::error::{MenuMatchError, Result};
use menu_match_common::{IngredientCatalog, TasteProfile};
use std::borrow::Cow;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// 食材カタログを読み込む（未指定なら組み込みカタログ）
pub fn load_catalog(path: Option<&Path>) -> Result<Cow<'static, IngredientCatalog>> {
    match path {
        Some(path) => {
            ensure_exists(path)?;
            let catalog = IngredientCatalog::from_file(path)?;
            debug!(path = %path.display(), count = catalog.len(), "catalog loaded");
            Ok(Cow::Owned(catalog))
        }
        None => {
            let catalog = IngredientCatalog::builtin();
            debug!(count = catalog.len(), "using builtin catalog");
            Ok(Cow::Borrowed(catalog))
        }
    }
}

/// 好みプロファイルを読み込み、カタログにないIDを警告する
pub fn load_profile(path: &Path, catalog: &IngredientCatalog) -> Result<TasteProfile> {
    ensure_exists(path)?;
    let profile = TasteProfile::from_file(path)?;

    for overlap in profile.overlaps() {
        let buckets: Vec<String> = overlap.buckets.iter().map(|b| b.to_string()).collect();
        warn!(id = %overlap.id, buckets = %buckets.join("/"), "ingredient listed in more than one bucket");
    }
    let unknown = profile.unknown_ids(catalog);
    if !unknown.is_empty() {
        warn!(ids = %unknown.join(", "), "profile references ingredients missing from the catalog");
    }

    Ok(profile)
}

/// メニューテキストを読み込む（"-" なら標準入力）
pub fn read_menu(path: &Path) -> Result<String> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        ensure_exists(path)?;
        std::fs::read_to_string(path)?
    };

    if text.trim().is_empty() {
        return Err(MenuMatchError::EmptyMenu(path.display().to_string()));
    }
    Ok(text)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(MenuMatchError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}
