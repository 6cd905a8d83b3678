use clap::Parser;
use menu_match::{cli, config, error, loader, report};
use menu_match_common::{recommend, RecommendRequest, Ranker, ScoringWeights, TasteProfile};
use cli::{Cli, Commands};
use config::Config;
use error::{MenuMatchError, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    debug!(?config, "config loaded");

    match cli.command {
        Commands::Rank { menu, profile, catalog, format, weights, match_mode, exclude_unsafe } => {
            let catalog_path = catalog.or_else(|| config.catalog_path.clone());
            let catalog = loader::load_catalog(catalog_path.as_deref())?;

            let profile_path = profile
                .or_else(|| config.profile_path.clone())
                .ok_or(MenuMatchError::MissingProfile)?;
            let profile = loader::load_profile(&profile_path, &catalog)?;

            let mut options = config.rank_options()?;
            if let Some(name) = weights {
                options.weights = ScoringWeights::from_preset(&name)
                    .ok_or(MenuMatchError::UnknownPreset(name))?;
            }
            if let Some(mode) = match_mode {
                options.match_mode = mode;
            }
            options.exclude_unsafe |= exclude_unsafe;

            let menu_text = loader::read_menu(&menu)?;
            info!(
                catalog = catalog.len(),
                match_mode = %options.match_mode,
                exclude_unsafe = options.exclude_unsafe,
                "ranking menu"
            );

            let ranked = Ranker::with_options(&catalog, options).rank(&menu_text, &profile);
            info!(dishes = ranked.len(), unsafe_dishes = ranked.unsafe_count(), "ranking complete");

            print!("{}", report::render(&ranked, format)?);
        }

        Commands::Resolve { text, catalog, match_mode } => {
            let catalog_path = catalog.or_else(|| config.catalog_path.clone());
            let catalog = loader::load_catalog(catalog_path.as_deref())?;
            let mode = match_mode.unwrap_or(config.match_mode);

            let found = catalog.resolve_in_text_with(&text, mode);
            if found.is_empty() {
                println!("食材は見つかりませんでした");
            }
            for ingredient in found {
                println!("{}\t{}", ingredient.id, ingredient.name);
            }
        }

        Commands::Search { query, catalog } => {
            let catalog_path = catalog.or_else(|| config.catalog_path.clone());
            let catalog = loader::load_catalog(catalog_path.as_deref())?;

            for ingredient in catalog.search(&query) {
                if ingredient.aliases.is_empty() {
                    println!("{}\t{}", ingredient.id, ingredient.name);
                } else {
                    println!("{}\t{} ({})", ingredient.id, ingredient.name, ingredient.aliases.join(", "));
                }
            }
        }

        Commands::Profile { input, normalize, output, catalog } => {
            let catalog_path = catalog.or_else(|| config.catalog_path.clone());
            let catalog = loader::load_catalog(catalog_path.as_deref())?;
            let profile = loader::load_profile(&input, &catalog)?;

            println!("好きな食材: {}件", profile.like.len());
            println!("苦手な食材: {}件", profile.dislike.len());
            println!("避ける食材: {}件", profile.avoid.len());

            let overlaps = profile.overlaps();
            if overlaps.is_empty() {
                println!("✔ バケットの重複はありません");
            } else {
                println!("⚠ 複数のバケットに登録された食材: {}件", overlaps.len());
                for overlap in &overlaps {
                    let buckets: Vec<String> = overlap.buckets.iter().map(|b| b.to_string()).collect();
                    println!("  {}: {}", overlap.id, buckets.join(", "));
                }
            }

            if normalize {
                let normalized: TasteProfile = profile.normalized();
                let target = output.unwrap_or_else(|| input.clone());
                std::fs::write(&target, serde_json::to_string_pretty(&normalized)?)?;
                println!("✔ 正規化したプロファイルを保存: {}", target.display());
            }
        }

        Commands::Recommend { request, catalog } => {
            let catalog_path = catalog.or_else(|| config.catalog_path.clone());
            let catalog = loader::load_catalog(catalog_path.as_deref())?;

            if !request.exists() {
                return Err(MenuMatchError::FileNotFound(request.display().to_string()));
            }
            let content = std::fs::read_to_string(&request)?;
            let request = RecommendRequest::from_json(&content)?;

            let response = recommend(&request, &catalog, &config.rank_options()?)?;
            info!(dishes = response.results.len(), unsafe_dishes = response.unsafe_count, "request processed");
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Config { set_catalog, set_profile, set_weights, set_match_mode, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_catalog {
                config.catalog_path = Some(path);
                changed = true;
            }
            if let Some(path) = set_profile {
                config.profile_path = Some(path);
                changed = true;
            }
            if let Some(name) = set_weights {
                ScoringWeights::preset(&name)?;
                config.weights_preset = name;
                changed = true;
            }
            if let Some(mode) = set_match_mode {
                config.match_mode = mode;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let display_path = |p: &Option<std::path::PathBuf>| {
                    p.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "未設定".into())
                };
                println!("設定:");
                println!("  カタログ: {}", config.catalog_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "組み込み".into()));
                println!("  プロファイル: {}", display_path(&config.profile_path));
                println!("  重み: {}", config.weights_preset);
                println!("  照合方式: {}", config.match_mode);
                println!("  avoid料理の除外: {}", if config.exclude_unsafe { "する" } else { "しない" });
            }
        }
    }

    Ok(())
}

/// ログ出力を初期化（RUST_LOG が優先）
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
