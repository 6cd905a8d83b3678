//! 料理の採点
//!
//! 1行分の検出食材をプロファイルで分類し、スコアと説明文を生成する。
//!
//! ## スコア
//! - avoid が1つでもあれば固定値（センチネル）
//! - それ以外は like × 件数 + dislike × 件数

use crate::error::{Error, Result};
use crate::types::{Classification, DishMatch, Ingredient, TasteProfile};
use serde::{Deserialize, Serialize};

/// 避けるべき食材を含む料理のスコア
pub const AVOID_SENTINEL: i32 = -999;

/// 採点の重み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    /// 好きな食材1件あたり
    pub like: i32,
    /// 苦手な食材1件あたり
    pub dislike: i32,
    /// avoid を含む料理の固定スコア
    pub avoid_sentinel: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoringWeights {
    /// 標準: +2 / -1
    pub const fn standard() -> Self {
        Self {
            like: 2,
            dislike: -1,
            avoid_sentinel: AVOID_SENTINEL,
        }
    }

    /// 苦手重視: +1 / -3
    pub const fn strict() -> Self {
        Self {
            like: 1,
            dislike: -3,
            avoid_sentinel: AVOID_SENTINEL,
        }
    }

    /// プリセット名から取得
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "standard" | "default" => Some(Self::standard()),
            "strict" => Some(Self::strict()),
            _ => None,
        }
    }

    /// プリセット名から取得（不明な名前はエラー）
    pub fn preset(name: &str) -> Result<Self> {
        Self::from_preset(name).ok_or_else(|| {
            Error::Config(format!("unknown weights preset '{}' (standard/strict)", name))
        })
    }
}

/// 標準の重みで料理を採点する
pub fn score_dish(dish_text: &str, resolved: &[&Ingredient], profile: &TasteProfile) -> DishMatch {
    score_dish_with(dish_text, resolved, profile, &ScoringWeights::standard())
}

/// 重みを指定して料理を採点する
pub fn score_dish_with(
    dish_text: &str,
    resolved: &[&Ingredient],
    profile: &TasteProfile,
    weights: &ScoringWeights,
) -> DishMatch {
    let mut matched_liked = Vec::new();
    let mut matched_disliked = Vec::new();
    let mut matched_avoid = Vec::new();

    for ingredient in resolved {
        match profile.classify(&ingredient.id) {
            Classification::Avoid => matched_avoid.push(ingredient.name.clone()),
            Classification::Like => matched_liked.push(ingredient.name.clone()),
            Classification::Dislike => matched_disliked.push(ingredient.name.clone()),
            Classification::Neutral => {}
        }
    }

    let score = if matched_avoid.is_empty() {
        weights.like * matched_liked.len() as i32 + weights.dislike * matched_disliked.len() as i32
    } else {
        weights.avoid_sentinel
    };

    let explanation = explain(&matched_liked, &matched_avoid);

    DishMatch {
        dish_text: dish_text.to_string(),
        matched_liked,
        matched_disliked,
        matched_avoid,
        score,
        explanation,
    }
}

fn explain(liked: &[String], avoid: &[String]) -> String {
    if !avoid.is_empty() {
        format!("Rejected: contains avoided ingredient(s): {}", avoid.join(", "))
    } else if liked.is_empty() {
        "Liked ingredients: none".to_string()
    } else {
        format!("Liked ingredients: {}", liked.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(like: &[&str], dislike: &[&str], avoid: &[&str]) -> TasteProfile {
        TasteProfile {
            like: like.iter().map(|s| s.to_string()).collect(),
            dislike: dislike.iter().map(|s| s.to_string()).collect(),
            avoid: avoid.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ingredients() -> Vec<Ingredient> {
        vec![
            Ingredient::new("i1", "garlic"),
            Ingredient::new("i2", "basil"),
            Ingredient::new("i3", "olive"),
            Ingredient::new("i4", "peanuts"),
        ]
    }

    #[test]
    fn test_score_no_matches() {
        let result = score_dish("Plain Rice", &[], &profile(&["i1"], &[], &[]));
        assert_eq!(result.score, 0);
        assert_eq!(result.explanation, "Liked ingredients: none");
        assert!(!result.is_unsafe());
    }

    #[test]
    fn test_score_liked_and_disliked() {
        let ings = ingredients();
        let resolved: Vec<&Ingredient> = ings.iter().take(3).collect();
        let result = score_dish("Garlic Basil Olive", &resolved, &profile(&["i1", "i2"], &["i3"], &[]));

        assert_eq!(result.score, 2 + 2 - 1);
        assert_eq!(result.matched_liked, vec!["garlic", "basil"]);
        assert_eq!(result.matched_disliked, vec!["olive"]);
        assert_eq!(result.explanation, "Liked ingredients: garlic, basil");
    }

    #[test]
    fn test_avoid_forces_sentinel() {
        let ings = ingredients();
        let resolved: Vec<&Ingredient> = ings.iter().collect();
        let result = score_dish(
            "Everything Bowl",
            &resolved,
            &profile(&["i1", "i2", "i3"], &[], &["i4"]),
        );

        assert_eq!(result.score, AVOID_SENTINEL);
        assert_eq!(result.matched_avoid, vec!["peanuts"]);
        // 表示用に like は蓄積される
        assert_eq!(result.matched_liked.len(), 3);
        assert_eq!(
            result.explanation,
            "Rejected: contains avoided ingredient(s): peanuts"
        );
    }

    #[test]
    fn test_avoid_wins_over_like() {
        let ings = ingredients();
        let resolved = vec![&ings[0]];
        let result = score_dish("Garlic Bread", &resolved, &profile(&["i1"], &[], &["i1"]));

        assert_eq!(result.score, AVOID_SENTINEL);
        assert_eq!(result.matched_avoid, vec!["garlic"]);
        assert!(result.matched_liked.is_empty());
    }

    #[test]
    fn test_like_wins_over_dislike() {
        let ings = ingredients();
        let resolved = vec![&ings[1]];
        let result = score_dish("Basil Soup", &resolved, &profile(&["i2"], &["i2"], &[]));

        assert_eq!(result.score, 2);
        assert!(result.matched_disliked.is_empty());
    }

    #[test]
    fn test_strict_weights() {
        let ings = ingredients();
        let resolved: Vec<&Ingredient> = ings.iter().take(2).collect();
        let result = score_dish_with(
            "Garlic Basil",
            &resolved,
            &profile(&["i1"], &["i2"], &[]),
            &ScoringWeights::strict(),
        );
        assert_eq!(result.score, 1 - 3);
    }

    #[test]
    fn test_preset() {
        assert_eq!(ScoringWeights::from_preset("STANDARD"), Some(ScoringWeights::standard()));
        assert_eq!(ScoringWeights::from_preset("strict"), Some(ScoringWeights::strict()));
        assert!(ScoringWeights::from_preset("lenient").is_none());
        assert!(matches!(ScoringWeights::preset("lenient"), Err(Error::Config(_))));
        assert_eq!(ScoringWeights::default(), ScoringWeights::standard());
    }
}
