use anyhow::{Context, Result};
use card_data::{CardIndex, CommanderPatterns};
use clap::{Parser, Subcommand};
use colored::Colorize;
use recommender::{DEFAULT_TOP_K, RecommendationEngine, ScoringConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use vectorizer::TfidfModel;

/// Commander Crafter - MTG commander creature recommendations
#[derive(Parser)]
#[command(name = "commander-crafter")]
#[command(about = "Recommends creatures for a commander deck", long_about = None)]
struct Cli {
    /// Path to the exported artifact directory
    #[arg(short, long, default_value = "data/processed")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get creature recommendations for a commander
    Recommend {
        /// Commander card name (exact)
        #[arg(long)]
        commander: String,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Drop known companions instead of penalizing them
        #[arg(long)]
        exclude_known: bool,

        /// Show the boost and penalty breakdown for each row
        #[arg(long)]
        explain: bool,
    },

    /// Show the consensus pattern summary for a commander
    Commander {
        /// Commander card name (exact)
        #[arg(long)]
        name: String,
    },

    /// List all commanders with training data
    Commanders {
        /// Show at most this many names
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Search the catalog by creature name
    Search {
        /// Name to search for (case-insensitive substring match)
        #[arg(long)]
        name: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the artifacts and build the engine (this may take a moment)
    println!("Loading card artifacts from {}...", cli.data_dir.display());
    let start = Instant::now();
    let engine = build_engine(&cli.data_dir)?;
    println!(
        "{} Engine ready in {:?} ({} creatures, {} commanders)",
        "✓".green(),
        start.elapsed(),
        engine.index().creatures().len(),
        engine.commander_names().len()
    );

    match cli.command {
        Commands::Recommend {
            commander,
            top_k,
            exclude_known,
            explain,
        } => handle_recommend(&engine, &commander, top_k, !exclude_known, explain),
        Commands::Commander { name } => handle_commander(&engine, &name),
        Commands::Commanders { limit } => handle_commanders(&engine, limit),
        Commands::Search { name } => handle_search(&engine, &name),
    }

    Ok(())
}

fn build_engine(data_dir: &Path) -> Result<RecommendationEngine> {
    let index = Arc::new(
        CardIndex::load_from_files(data_dir).context("Failed to load card catalog artifacts")?,
    );
    let patterns = CommanderPatterns::load_from_file(&data_dir.join("commander_patterns.json"))
        .context("Failed to load commander patterns")?;
    let model = TfidfModel::load_from_file(&data_dir.join("tfidf_model.json"))
        .context("Failed to load similarity model")?;

    RecommendationEngine::new(model, patterns, index, ScoringConfig::default())
        .context("Failed to build recommendation engine")
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &RecommendationEngine,
    commander: &str,
    top_k: usize,
    include_known: bool,
    explain: bool,
) {
    let recommendations = engine.get_recommendations(commander, top_k, include_known);

    if recommendations.is_empty() {
        // A normal "no data" state, not a failure
        println!(
            "{} No recommendation data for '{}' (not in the training set or catalog)",
            "!".yellow(),
            commander
        );
        return;
    }

    println!(
        "{}",
        format!("Top {} creatures for {}:", recommendations.len(), commander)
            .bold()
            .blue()
    );
    for (rank, rec) in recommendations.iter().enumerate() {
        let known_marker = if rec.is_known {
            " (known)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{:>3}. {:.3}  {} [{}]{}",
            rank + 1,
            rec.final_score,
            rec.creature_name.bold(),
            rec.power_toughness,
            known_marker
        );
        if explain {
            println!(
                "      similarity {:.3}, boosts: [{}], penalties: [{}]",
                rec.base_similarity,
                rec.boosts.join(", "),
                rec.penalties.join(", ")
            );
        }
    }
}

/// Handle the 'commander' command
fn handle_commander(engine: &RecommendationEngine, name: &str) {
    let Some(info) = engine.get_commander_info(name) else {
        println!("{} No training data for '{}'", "!".yellow(), name);
        return;
    };

    println!("{}", format!("Commander: {}", name).bold().blue());
    println!("{}Known companions: {}", "• ".green(), info.total_companions);

    println!("{}Consensus keywords:", "• ".green());
    for (keyword, support) in &info.consensus_keywords {
        println!("    {} ({} decks)", keyword, support);
    }

    println!("{}Consensus types:", "• ".green());
    for (secondary_type, support) in &info.consensus_types {
        println!("    {} ({} decks)", secondary_type, support);
    }

    println!(
        "{}P/T patterns: high power: {}, low power: {}, high toughness: {}",
        "• ".cyan(),
        info.pt_patterns.high_power,
        info.pt_patterns.low_power,
        info.pt_patterns.high_toughness
    );
}

/// Handle the 'commanders' command
fn handle_commanders(engine: &RecommendationEngine, limit: Option<usize>) {
    let names = engine.commander_names();
    let shown = limit.unwrap_or(names.len()).min(names.len());

    println!(
        "{}",
        format!("{} commanders with training data:", names.len())
            .bold()
            .blue()
    );
    for name in &names[..shown] {
        println!("  {}", name);
    }
    if shown < names.len() {
        println!("  ... and {} more", names.len() - shown);
    }
}

/// Handle the 'search' command
fn handle_search(engine: &RecommendationEngine, name: &str) {
    let needle = name.to_lowercase();
    let mut matches: Vec<_> = engine
        .index()
        .creatures()
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect();
    // Exact matches first, then alphabetical
    matches.sort_by_key(|c| (c.name.to_lowercase() != needle, c.name.clone()));

    println!("{}", format!("Search results for '{}':", name).bold().blue());
    for creature in matches.iter().take(20) {
        let colors: String = creature
            .color_identity
            .iter()
            .map(|c| c.symbol())
            .collect();
        let colors = if colors.is_empty() { "C".to_string() } else { colors };
        println!(
            "  {} [{}] {{{}}} {}",
            creature.name.bold(),
            creature.power_toughness(),
            colors,
            creature.secondary_types.join(" ")
        );
    }
    if matches.is_empty() {
        println!("  (no matches)");
    }
}
