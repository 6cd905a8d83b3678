//! ランキング結果の出力
//!
//! - text: 順位・スコア・料理名・説明を1行ずつ
//! - json: 生成日時と件数を付けたJSON

use crate::cli::OutputFormat;
use crate::error::Result;
use menu_match_common::{DishMatch, RankedResult};
use serde::Serialize;

/// 避けるべき料理に付ける印
pub const UNSAFE_MARK: &str = "[DO NOT ORDER]";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    generated_at: String,
    total: usize,
    unsafe_count: usize,
    results: &'a [DishMatch],
}

pub fn render(ranked: &RankedResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(ranked)),
        OutputFormat::Json => render_json(ranked),
    }
}

pub fn render_text(ranked: &RankedResult) -> String {
    if ranked.is_empty() {
        return "該当する料理はありません\n".to_string();
    }

    let width = ranked
        .iter()
        .map(|d| d.score.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for (i, dish) in ranked.iter().enumerate() {
        let mark = if dish.is_unsafe() {
            format!(" {}", UNSAFE_MARK)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{:>3}. [{:>width$}] {}{}\n       {}\n",
            i + 1,
            dish.score,
            dish.dish_text,
            mark,
            dish.explanation,
            width = width,
        ));
    }

    let unsafe_count = ranked.unsafe_count();
    if unsafe_count > 0 {
        out.push_str(&format!("\n⚠ 避けるべき食材を含む料理: {}件\n", unsafe_count));
    }
    out
}

pub fn render_json(ranked: &RankedResult) -> Result<String> {
    let report = JsonReport {
        generated_at: chrono::Local::now().to_rfc3339(),
        total: ranked.len(),
        unsafe_count: ranked.unsafe_count(),
        results: ranked.as_slice(),
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}
