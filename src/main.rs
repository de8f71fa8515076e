use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use semblance::config::Config;
use semblance::extract;
use semblance::output::terminal;
use semblance::output::SimilarityReport;
use semblance::pipeline::batch;
use semblance::scoring::similarity::text_similarity;
use semblance::tagger::lexicon::LexiconTagger;
use semblance::taxonomy::wordnet::WordNetTaxonomy;

/// Semblance: taxonomy-based semantic similarity.
///
/// Scores how close two pieces of text are in meaning by mapping their
/// words to WordNet senses and comparing the sense sets — useful for
/// paraphrase and near-duplicate detection.
#[derive(Parser)]
#[command(name = "semblance", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score two literal lines of text against each other
    Lines {
        /// First line
        #[arg(
            long,
            default_value = "Indeed, Iran should be put on notice that efforts to try to remake Iraq in their image will be aggressively put down,\" he said."
        )]
        line1: String,

        /// Second line
        #[arg(
            long,
            default_value = "Iran should be on notice that attempts to remake Iraq in Iran's image will be aggressively put down,\" he said"
        )]
        line2: String,
    },

    /// Compare two documents line by line and report similar pairs
    Docs {
        /// Path to the first document
        file1: PathBuf,

        /// Path to the second document
        file2: PathBuf,

        /// Only report pairs scoring strictly above this value
        #[arg(long, default_value_t = 0.5)]
        threshold: f64,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show WordNet database status (location, presence, category sizes)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("semblance=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lines { line1, line2 } => {
            let taxonomy = load_taxonomy()?;
            let tagger = LexiconTagger::new(&taxonomy);

            match text_similarity(&line1, &line2, &tagger, &taxonomy) {
                Some(score) => terminal::display_line_score(&line1, &line2, score),
                None => anyhow::bail!(
                    "No comparable word senses found between the two lines — \
                     the similarity is undefined."
                ),
            }
        }

        Commands::Docs {
            file1,
            file2,
            threshold,
            json,
        } => {
            if !(0.0..=1.0).contains(&threshold) {
                anyhow::bail!("Threshold must be between 0.0 and 1.0, got {threshold}");
            }

            let taxonomy = load_taxonomy()?;
            let tagger = LexiconTagger::new(&taxonomy);

            let lines_a = extract::split_lines(&extract::read_document(&file1)?);
            let lines_b = extract::split_lines(&extract::read_document(&file2)?);
            info!(
                lines_a = lines_a.len(),
                lines_b = lines_b.len(),
                "Documents loaded"
            );

            let pairs = batch::compare_line_sets(&lines_a, &lines_b, &tagger, &taxonomy, threshold);

            if json {
                let report = SimilarityReport::new(
                    file1.display().to_string(),
                    file2.display().to_string(),
                    threshold,
                    pairs,
                );
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_pair_report(&pairs, threshold);
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            println!("WordNet directory: {}", config.wordnet_dir.display());

            if config.require_wordnet().is_err() {
                println!("  Database files: {}", "missing".yellow());
                println!(
                    "\nDownload the WordNet 3.x dict/ directory and set {}.",
                    "SEMBLANCE_WORDNET_DIR".bold()
                );
                return Ok(());
            }
            println!("  Database files: {}", "present".green());

            let taxonomy = WordNetTaxonomy::load(&config.wordnet_dir)?;
            println!();
            terminal::display_taxonomy_stats(&taxonomy.stats());
        }
    }

    Ok(())
}

/// Load the configured WordNet taxonomy, or bail with a helpful message.
fn load_taxonomy() -> Result<WordNetTaxonomy> {
    let config = Config::load()?;
    config.require_wordnet()?;
    WordNetTaxonomy::load(&config.wordnet_dir)
}
