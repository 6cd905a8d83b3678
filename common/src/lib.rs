//! Menu Match Common Library
//!
//! メニュー推薦のコア: 食材カタログ・食材解決・採点・ランキング。
//! I/O（ファイル読み込みを除く）とログ出力は行わない。

pub mod types;
pub mod catalog;
pub mod profile;
pub mod scorer;
pub mod ranker;
pub mod request;
pub mod error;

pub use types::{Classification, DishMatch, Ingredient, RankedResult, TasteProfile};
pub use catalog::{resolve_ingredients, IngredientCatalog, MatchMode};
pub use profile::ProfileOverlap;
pub use scorer::{score_dish, score_dish_with, ScoringWeights, AVOID_SENTINEL};
pub use ranker::{rank_dishes, split_dish_lines, RankOptions, Ranker};
pub use request::{recommend, RecommendRequest, RecommendResponse};
pub use error::{Error, Result};
