//! 食材カタログモジュール
//!
//! 食材の正規名・別名を保持し、テキスト中の食材を検出する。
//! カタログはリクエスト中は読み取り専用として扱う。

use crate::error::{Error, Result};
use crate::types::Ingredient;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 組み込みカタログ（ビルド時に埋め込み）
const BUILTIN_JSON: &str = include_str!("../data/ingredients.json");

lazy_static::lazy_static! {
    static ref BUILTIN: IngredientCatalog =
        IngredientCatalog::from_json(BUILTIN_JSON).expect("組み込みカタログが不正です");
}

/// 照合方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// 部分一致（"pea" は "peanut" にも一致する）
    #[default]
    #[serde(rename = "substring")]
    Substring,
    /// 単語境界つき一致
    #[serde(rename = "word")]
    WordBoundary,
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" | "sub" => Ok(MatchMode::Substring),
            "word" | "word-boundary" | "boundary" => Ok(MatchMode::WordBoundary),
            _ => Err(format!("Unknown match mode: {}. Use substring or word", s)),
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Substring => write!(f, "substring"),
            MatchMode::WordBoundary => write!(f, "word"),
        }
    }
}

/// 照合用のタームを生成する
///
/// 小文字化・トリム済みのタームに加え、複数形（末尾 "s"、"ss" を除く）の
/// タームは単数形も返す。カタログの "peanuts" を "Peanut Satay" に一致させる。
fn term_variants(term: &str) -> Vec<String> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let mut variants = vec![term.clone()];
    if term.chars().count() > 3 && term.ends_with('s') && !term.ends_with("ss") {
        variants.push(term[..term.len() - 1].to_string());
    }
    variants
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    ingredient: Ingredient,
    /// 小文字化した正規名・別名
    terms: Vec<String>,
    /// 全タームの単語境界パターン
    boundary: Regex,
}

impl CatalogEntry {
    fn build(ingredient: Ingredient) -> Result<Self> {
        let mut terms: Vec<String> = Vec::new();
        for term in ingredient.terms() {
            for variant in term_variants(term) {
                if !terms.contains(&variant) {
                    terms.push(variant);
                }
            }
        }

        let alternation = terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let boundary = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).map_err(|e| {
            Error::InvalidInput(format!("ingredient '{}': {}", ingredient.id, e))
        })?;

        Ok(Self {
            ingredient,
            terms,
            boundary,
        })
    }

    fn contains_in(&self, lowered: &str) -> bool {
        self.terms.iter().any(|t| lowered.contains(t.as_str()))
    }

    fn matches(&self, text: &str, lowered: &str, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Substring => self.contains_in(lowered),
            MatchMode::WordBoundary => self.boundary.is_match(text),
        }
    }
}

/// 食材カタログ
#[derive(Debug, Clone)]
pub struct IngredientCatalog {
    entries: Vec<CatalogEntry>,
}

impl IngredientCatalog {
    /// カタログを構築
    ///
    /// IDの重複・空のID・空の正規名は `InvalidInput` として拒否する。
    /// 空白のみの別名は捨てる。
    pub fn new(ingredients: Vec<Ingredient>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(ingredients.len());

        for mut ingredient in ingredients {
            if ingredient.id.trim().is_empty() {
                return Err(Error::InvalidInput("ingredient id must not be empty".into()));
            }
            if ingredient.name.trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "ingredient '{}' has an empty name",
                    ingredient.id
                )));
            }
            if !seen.insert(ingredient.id.clone()) {
                return Err(Error::InvalidInput(format!(
                    "duplicate ingredient id '{}'",
                    ingredient.id
                )));
            }

            ingredient.aliases.retain(|a| !a.trim().is_empty());
            entries.push(CatalogEntry::build(ingredient)?);
        }

        Ok(Self { entries })
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let ingredients: Vec<Ingredient> = serde_json::from_str(json)?;
        Self::new(ingredients)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 組み込みカタログ（プロセス全体で1度だけ初期化）
    pub fn builtin() -> &'static IngredientCatalog {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.entries.iter().map(|e| &e.ingredient)
    }

    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.iter().find(|i| i.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// 正規名または別名に `query` を含む食材を検索（大文字小文字を区別しない）
    ///
    /// 空のクエリはカタログ全体を返す。
    pub fn search(&self, query: &str) -> Vec<&Ingredient> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.iter().collect();
        }

        self.entries
            .iter()
            .filter(|e| e.terms.iter().any(|t| t.contains(query.as_str())))
            .map(|e| &e.ingredient)
            .collect()
    }

    /// テキスト中に出現する食材を返す（部分一致）
    ///
    /// 各食材は複数回・複数の別名で出現しても1度だけ、カタログ順で返す。
    pub fn resolve_in_text(&self, text: &str) -> Vec<&Ingredient> {
        self.resolve_in_text_with(text, MatchMode::Substring)
    }

    /// 照合方式を指定してテキスト中の食材を返す
    pub fn resolve_in_text_with(&self, text: &str, mode: MatchMode) -> Vec<&Ingredient> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let lowered = text.to_lowercase();

        self.entries
            .iter()
            .filter(|e| e.matches(text, &lowered, mode))
            .map(|e| &e.ingredient)
            .collect()
    }
}

/// テキスト中の食材を解決する（部分一致）
///
/// カタログをスライスで受け取る簡易版。IDの重複チェックは行わない。
pub fn resolve_ingredients(text: &str, catalog: &[Ingredient]) -> Vec<Ingredient> {
    resolve_in_slice(text, catalog).into_iter().cloned().collect()
}

/// スライス上で食材を解決し、参照を返す
pub(crate) fn resolve_in_slice<'a>(text: &str, catalog: &'a [Ingredient]) -> Vec<&'a Ingredient> {
    let lowered = text.to_lowercase();
    catalog
        .iter()
        .filter(|ing| {
            ing.terms()
                .flat_map(term_variants)
                .any(|t| lowered.contains(t.as_str()))
        })
        .collect()
}
