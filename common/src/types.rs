//! 推薦エンジンの型定義
//!
//! CLIと共有される型:
//! - Ingredient: カタログの食材レコード
//! - TasteProfile: ユーザーの好み（好き/苦手/完全に避ける）
//! - DishMatch: 料理1行分の採点結果
//! - RankedResult: スコア降順に並べた採点結果

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 食材レコード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    /// 正規名
    pub name: String,
    /// 別名（表記ゆれ）
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// 正規名と別名を順に返す
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// ユーザーの好みプロファイル
///
/// 3つのバケットは互いに素であるべきだが、入力側では保証されない。
/// 判定順は [`TasteProfile::classify`] を参照。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasteProfile {
    pub like: BTreeSet<String>,
    pub dislike: BTreeSet<String>,
    pub avoid: BTreeSet<String>,
}

/// プロファイルに対する食材の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Avoid,
    Like,
    Dislike,
    Neutral,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Avoid => write!(f, "avoid"),
            Classification::Like => write!(f, "like"),
            Classification::Dislike => write!(f, "dislike"),
            Classification::Neutral => write!(f, "neutral"),
        }
    }
}

/// 料理1行分の採点結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishMatch {
    pub dish_text: String,
    #[serde(default)]
    pub matched_liked: Vec<String>,
    #[serde(default)]
    pub matched_disliked: Vec<String>,
    #[serde(default)]
    pub matched_avoid: Vec<String>,
    pub score: i32,
    pub explanation: String,
}

impl DishMatch {
    /// 避けるべき食材を含むか
    pub fn is_unsafe(&self) -> bool {
        !self.matched_avoid.is_empty()
    }
}

/// スコア降順（同点は元の行順）に並んだ採点結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult(Vec<DishMatch>);

impl RankedResult {
    /// 採点結果を安定ソートして生成
    pub fn from_unsorted(mut dishes: Vec<DishMatch>) -> Self {
        // sort_by は安定ソート
        dishes.sort_by(|a, b| b.score.cmp(&a.score));
        Self(dishes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DishMatch> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[DishMatch] {
        &self.0
    }

    /// 安全な料理のみ
    pub fn safe(&self) -> impl Iterator<Item = &DishMatch> {
        self.0.iter().filter(|d| !d.is_unsafe())
    }

    pub fn unsafe_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_unsafe()).count()
    }

    /// 避けるべき料理を除外する
    pub fn without_unsafe(self) -> Self {
        Self(self.0.into_iter().filter(|d| !d.is_unsafe()).collect())
    }

    pub fn into_vec(self) -> Vec<DishMatch> {
        self.0
    }
}

impl IntoIterator for RankedResult {
    type Item = DishMatch;
    type IntoIter = std::vec::IntoIter<DishMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a DishMatch;
    type IntoIter = std::slice::Iter<'a, DishMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
