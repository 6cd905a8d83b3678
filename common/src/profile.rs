//! 好みプロファイルの判定・検証

use crate::catalog::IngredientCatalog;
use crate::error::{Error, Result};
use crate::types::{Classification, TasteProfile};
use std::collections::BTreeSet;

/// 複数のバケットに重複して登録されたID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOverlap {
    pub id: String,
    /// 登録されているバケット（avoid, like, dislike の順）
    pub buckets: Vec<Classification>,
}

impl TasteProfile {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        Ok(profile)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.like.is_empty() && self.dislike.is_empty() && self.avoid.is_empty()
    }

    /// 食材IDを分類する
    ///
    /// 優先順位は avoid > like > dislike。
    pub fn classify(&self, id: &str) -> Classification {
        if self.avoid.contains(id) {
            Classification::Avoid
        } else if self.like.contains(id) {
            Classification::Like
        } else if self.dislike.contains(id) {
            Classification::Dislike
        } else {
            Classification::Neutral
        }
    }

    /// 複数バケットに登録されたIDを列挙する（ID順）
    pub fn overlaps(&self) -> Vec<ProfileOverlap> {
        let all: BTreeSet<&String> = self
            .avoid
            .iter()
            .chain(self.like.iter())
            .chain(self.dislike.iter())
            .collect();

        all.into_iter()
            .filter_map(|id| {
                let mut buckets = Vec::new();
                if self.avoid.contains(id) {
                    buckets.push(Classification::Avoid);
                }
                if self.like.contains(id) {
                    buckets.push(Classification::Like);
                }
                if self.dislike.contains(id) {
                    buckets.push(Classification::Dislike);
                }
                (buckets.len() > 1).then(|| ProfileOverlap {
                    id: id.clone(),
                    buckets,
                })
            })
            .collect()
    }

    /// バケットが互いに素であることを検証
    pub fn validate(&self) -> Result<()> {
        let overlaps = self.overlaps();
        if overlaps.is_empty() {
            return Ok(());
        }

        let ids: Vec<&str> = overlaps.iter().map(|o| o.id.as_str()).collect();
        Err(Error::InvalidInput(format!(
            "profile lists ingredient(s) in more than one bucket: {}",
            ids.join(", ")
        )))
    }

    /// 重複を解消したプロファイルを返す
    ///
    /// 最も厳しいバケットだけに残す: avoid > dislike > like
    pub fn normalized(&self) -> TasteProfile {
        let avoid = self.avoid.clone();
        let dislike: BTreeSet<String> = self.dislike.difference(&avoid).cloned().collect();
        let like: BTreeSet<String> = self
            .like
            .iter()
            .filter(|id| !avoid.contains(*id) && !dislike.contains(*id))
            .cloned()
            .collect();

        TasteProfile {
            like,
            dislike,
            avoid,
        }
    }

    /// カタログに存在しないIDを返す（ID順、重複なし）
    pub fn unknown_ids(&self, catalog: &IngredientCatalog) -> Vec<String> {
        let all: BTreeSet<&String> = self
            .avoid
            .iter()
            .chain(self.like.iter())
            .chain(self.dislike.iter())
            .collect();

        all.into_iter()
            .filter(|id| !catalog.contains_id(id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ingredient;

    fn profile(like: &[&str], dislike: &[&str], avoid: &[&str]) -> TasteProfile {
        TasteProfile {
            like: like.iter().map(|s| s.to_string()).collect(),
            dislike: dislike.iter().map(|s| s.to_string()).collect(),
            avoid: avoid.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_classify_basic() {
        let p = profile(&["i1"], &["i2"], &["i3"]);
        assert_eq!(p.classify("i1"), Classification::Like);
        assert_eq!(p.classify("i2"), Classification::Dislike);
        assert_eq!(p.classify("i3"), Classification::Avoid);
        assert_eq!(p.classify("i4"), Classification::Neutral);
    }

    #[test]
    fn test_classify_precedence() {
        // avoid > like > dislike
        let p = profile(&["i1", "i2"], &["i2", "i3"], &["i1", "i3"]);
        assert_eq!(p.classify("i1"), Classification::Avoid);
        assert_eq!(p.classify("i2"), Classification::Like);
        assert_eq!(p.classify("i3"), Classification::Avoid);
    }

    #[test]
    fn test_overlaps() {
        let p = profile(&["i1", "i2"], &["i2"], &["i1"]);
        let overlaps = p.overlaps();
        assert_eq!(overlaps.len(), 2);
        assert_eq!(overlaps[0].id, "i1");
        assert_eq!(overlaps[0].buckets, vec![Classification::Avoid, Classification::Like]);
        assert_eq!(overlaps[1].id, "i2");
        assert_eq!(overlaps[1].buckets, vec![Classification::Like, Classification::Dislike]);
    }

    #[test]
    fn test_validate() {
        assert!(profile(&["i1"], &["i2"], &["i3"]).validate().is_ok());
        assert!(TasteProfile::default().validate().is_ok());

        let err = profile(&["i1"], &[], &["i1"]).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(format!("{}", err).contains("i1"));
    }

    #[test]
    fn test_normalized_keeps_strictest_bucket() {
        let p = profile(&["i1", "i2", "i4"], &["i2", "i3"], &["i1", "i3"]);
        let n = p.normalized();

        assert_eq!(n, profile(&["i4"], &["i2"], &["i1", "i3"]));
        assert!(n.validate().is_ok());
    }

    #[test]
    fn test_unknown_ids() {
        let catalog = IngredientCatalog::new(vec![Ingredient::new("i1", "garlic")]).unwrap();
        let p = profile(&["i1", "x"], &["y"], &["x"]);
        assert_eq!(p.unknown_ids(&catalog), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_from_json() {
        let p = TasteProfile::from_json(r#"{"like":["i1"],"avoid":["i2"]}"#).unwrap();
        assert_eq!(p.classify("i2"), Classification::Avoid);
        assert!(!p.is_empty());
        assert!(TasteProfile::from_json(r#""garlic""#).is_err());
    }
}
