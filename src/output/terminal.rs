// Colored terminal output for similarity results.
//
// All terminal-specific formatting lives here; main.rs delegates.

use colored::Colorize;

use crate::pipeline::batch::ScoredPair;
use crate::taxonomy::wordnet::CategoryStats;

/// Render a score as a percentage, colored by how close the match is.
fn colorize_score(score: f64) -> String {
    let formatted = format!("{:.2}%", score * 100.0);
    if score >= 0.75 {
        formatted.bright_green().bold().to_string()
    } else if score >= 0.6 {
        formatted.bright_yellow().to_string()
    } else {
        formatted.normal().to_string()
    }
}

/// Display the document comparator's matched pairs.
pub fn display_pair_report(pairs: &[ScoredPair], threshold: f64) {
    if pairs.is_empty() {
        println!("No line pairs scored above {threshold:.2}.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== {} line pairs above threshold {:.2} ===",
            pairs.len(),
            threshold
        )
        .bold()
    );
    println!();

    for pair in pairs {
        println!("  {}", pair.line_a);
        println!("  {}", pair.line_b);
        println!("  ----> {}", colorize_score(pair.score));
        println!("  {}", "-".repeat(60).dimmed());
    }
}

/// Display a single line-pair score (the `lines` command).
pub fn display_line_score(line_a: &str, line_b: &str, score: f64) {
    println!("\n{}", "=== Line similarity ===".bold());
    println!("  Line 1: {line_a}");
    println!("  Line 2: {line_b}");
    println!("  Similarity: {}", colorize_score(score));
}

/// Display per-category taxonomy statistics (the `status` command).
pub fn display_taxonomy_stats(stats: &[CategoryStats]) {
    println!(
        "  {:<12} {:>9} {:>9}",
        "Category".dimmed(),
        "Lemmas".dimmed(),
        "Synsets".dimmed()
    );
    for entry in stats {
        println!(
            "  {:<12} {:>9} {:>9}",
            entry.pos.label(),
            entry.lemmas,
            entry.synsets
        );
    }
}
