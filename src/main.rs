use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

use s5match::catalog::S5Category;
use s5match::classify::ClassifierMode;
use s5match::config::Config;
use s5match::output::terminal;
use s5match::ranking::TraitVector;

/// s5match: Smart city S5 exemplar matching and personality recommendation.
///
/// Classifies a product against the five S5 categories (Smart, Sensing,
/// Sustainable, Social, Safe), suggests Big Five personality traits from
/// the closest catalog exemplar, and recommends exemplars for a trait
/// profile.
#[derive(Parser)]
#[command(name = "s5match", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a product: S5 classification, feedback, and trait suggestions
    Analyze {
        /// Product name
        #[arg(long)]
        name: String,

        /// Product description
        #[arg(long)]
        description: String,

        /// Product features, comma-separated
        #[arg(long)]
        features: String,

        /// Emit the analysis as JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Suggest personality traits from the closest catalog exemplar
    Suggest {
        /// Product name
        #[arg(long)]
        name: String,

        /// Product description
        #[arg(long)]
        description: String,

        /// Emit the suggestion as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recommend exemplars for a Big Five trait profile
    Recommend {
        /// Openness weight (0.0-1.0)
        #[arg(long, default_value = "0.5")]
        openness: f64,

        /// Conscientiousness weight (0.0-1.0)
        #[arg(long, default_value = "0.5")]
        conscientiousness: f64,

        /// Extraversion weight (0.0-1.0)
        #[arg(long, default_value = "0.5")]
        extraversion: f64,

        /// Agreeableness weight (0.0-1.0)
        #[arg(long, default_value = "0.5")]
        agreeableness: f64,

        /// Neuroticism weight (0.0-1.0)
        #[arg(long, default_value = "0.5")]
        neuroticism: f64,

        /// How many recommendations to show (default from config, 7)
        #[arg(long)]
        top_n: Option<usize>,

        /// Emit the recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the solution catalog
    Catalog {
        /// Show one entry in full detail instead of the table
        #[arg(long)]
        id: Option<u32>,

        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show engine status (catalog size, keyword counts, configured mode)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("s5match=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            name,
            description,
            features,
            json,
        } => {
            let features = split_features(&features)?;
            let analyzer = config.build_analyzer()?;
            let analysis = analyzer.analyze_product(&name, &description, &features)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                terminal::display_analysis(&analysis);
            }
        }

        Commands::Suggest {
            name,
            description,
            json,
        } => {
            let analyzer = config.build_analyzer()?;
            let suggestion = analyzer.suggest_traits(&name, &description)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                terminal::display_suggestion(&suggestion);
            }
        }

        Commands::Recommend {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
            top_n,
            json,
        } => {
            let vector = TraitVector {
                openness,
                conscientiousness,
                extraversion,
                agreeableness,
                neuroticism,
            };
            let analyzer = config.build_analyzer()?;
            let ranked = analyzer.rank_by_traits(&vector, top_n);
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                terminal::display_recommendations(&ranked);
            }
        }

        Commands::Catalog { id, json } => {
            let analyzer = config.build_analyzer()?;
            match id {
                Some(id) => {
                    let entry = analyzer
                        .list_catalog()
                        .iter()
                        .find(|e| e.id == id)
                        .ok_or_else(|| anyhow::anyhow!("No catalog entry with id {id}"))?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(entry)?);
                    } else {
                        terminal::display_entry_detail(entry);
                    }
                }
                None => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(analyzer.list_catalog())?);
                    } else {
                        terminal::display_catalog(analyzer.list_catalog());
                    }
                }
            }
        }

        Commands::Status => {
            let catalog = config.catalog()?;
            let keywords = config.keyword_table()?;
            let mode = match config.mode {
                ClassifierMode::Simple => "simple",
                ClassifierMode::Leveled => "leveled",
            };

            println!("\n{}", "=== s5match status ===".bold());
            println!("  Catalog entries:  {}", catalog.len());
            println!("  Classifier mode:  {mode}");
            println!("  Recommendations:  top {}", config.top_n);
            println!("  Keywords:");
            for category in S5Category::ALL {
                let set = keywords.set(category);
                let shape = if set.is_leveled() { "leveled" } else { "boolean" };
                println!("    {:<12} {:>3} ({shape})", category.to_string(), set.len());
            }
        }
    }

    Ok(())
}

/// Split a comma-separated feature string into trimmed, non-empty phrases.
/// Semicolon-separated input is rejected with a hint, matching the comma
/// convention the analyzer documents.
fn split_features(raw: &str) -> Result<Vec<String>> {
    if raw.contains(';') {
        warn!("Feature list contains a semicolon");
        anyhow::bail!("Please use a comma to separate the features, not a semicolon.");
    }
    Ok(raw
        .split(',')
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect())
}
