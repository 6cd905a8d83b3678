//! 推薦リクエストの入出力
//!
//! 呼び出し側（HTTP層など）から受け取ったJSONを検証し、ランキング結果を返す。

use crate::catalog::IngredientCatalog;
use crate::error::{Error, Result};
use crate::ranker::{RankOptions, Ranker};
use crate::types::{DishMatch, TasteProfile};
use serde::{Deserialize, Serialize};

/// 推薦リクエスト
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub menu_text: Option<String>,
    #[serde(default)]
    pub profile: Option<TasteProfile>,
}

impl RecommendRequest {
    pub fn new(menu_text: impl Into<String>, profile: TasteProfile) -> Self {
        Self {
            menu_text: Some(menu_text.into()),
            profile: Some(profile),
        }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidInput(format!("malformed request: {}", e)))
    }
}

/// 推薦レスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub results: Vec<DishMatch>,
    pub unsafe_count: usize,
}

/// リクエストを検証してランキングする
///
/// `menuText` または `profile` が欠けている場合は `InvalidInput`。
pub fn recommend(
    request: &RecommendRequest,
    catalog: &IngredientCatalog,
    options: &RankOptions,
) -> Result<RecommendResponse> {
    let menu_text = request
        .menu_text
        .as_deref()
        .ok_or_else(|| Error::InvalidInput("menuText is required".into()))?;
    let profile = request
        .profile
        .as_ref()
        .ok_or_else(|| Error::InvalidInput("profile is required".into()))?;

    let ranked = Ranker::with_options(catalog, options.clone()).rank(menu_text, profile);
    let unsafe_count = ranked.unsafe_count();

    Ok(RecommendResponse {
        results: ranked.into_vec(),
        unsafe_count,
    })
}
