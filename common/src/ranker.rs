//! 推薦ランキング
//!
//! メニューテキストを料理行に分割し、行ごとに食材解決と採点を行い、
//! スコア降順（同点は元の行順）に並べる。

use crate::catalog::{resolve_in_slice, IngredientCatalog, MatchMode};
use crate::scorer::{score_dish, score_dish_with, ScoringWeights};
use crate::types::{DishMatch, Ingredient, RankedResult, TasteProfile};
use serde::{Deserialize, Serialize};

/// ランキングオプション
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankOptions {
    pub weights: ScoringWeights,
    pub match_mode: MatchMode,
    /// avoid を含む料理を結果から除外する（既定では末尾に残す）
    pub exclude_unsafe: bool,
}

/// メニューテキストを料理行に分割する
///
/// 各行をトリムし、空行を除いて元の順序で返す。
pub fn split_dish_lines(menu_text: &str) -> Vec<&str> {
    menu_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// カタログを借用するランカー
#[derive(Debug, Clone)]
pub struct Ranker<'a> {
    catalog: &'a IngredientCatalog,
    options: RankOptions,
}

impl<'a> Ranker<'a> {
    pub fn new(catalog: &'a IngredientCatalog) -> Self {
        Self {
            catalog,
            options: RankOptions::default(),
        }
    }

    pub fn with_options(catalog: &'a IngredientCatalog, options: RankOptions) -> Self {
        Self { catalog, options }
    }

    pub fn options(&self) -> &RankOptions {
        &self.options
    }

    /// 1行を採点する
    pub fn score_line(&self, line: &str, profile: &TasteProfile) -> DishMatch {
        let resolved = self
            .catalog
            .resolve_in_text_with(line, self.options.match_mode);
        score_dish_with(line, &resolved, profile, &self.options.weights)
    }

    /// メニュー全体をランキングする
    pub fn rank(&self, menu_text: &str, profile: &TasteProfile) -> RankedResult {
        let dishes: Vec<DishMatch> = split_dish_lines(menu_text)
            .into_iter()
            .map(|line| self.score_line(line, profile))
            .collect();

        let ranked = RankedResult::from_unsorted(dishes);
        if self.options.exclude_unsafe {
            ranked.without_unsafe()
        } else {
            ranked
        }
    }
}

/// メニューをランキングする（標準の重み・部分一致）
///
/// カタログをスライスで受け取る簡易版。
pub fn rank_dishes(
    menu_text: &str,
    profile: &TasteProfile,
    catalog: &[Ingredient],
) -> Vec<DishMatch> {
    let dishes: Vec<DishMatch> = split_dish_lines(menu_text)
        .into_iter()
        .map(|line| score_dish(line, &resolve_in_slice(line, catalog), profile))
        .collect();

    RankedResult::from_unsorted(dishes).into_vec()
}
