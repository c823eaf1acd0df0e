// Colored terminal output for analyses, recommendations, and the catalog.
//
// This module handles all terminal-specific formatting: colors, tables,
// summaries. The main.rs command handlers delegate here.

use colored::Colorize;

use crate::analyzer::{ProductAnalysis, TraitSuggestion};
use crate::catalog::{CatalogEntry, S5Category};
use crate::classify::{CategoryResult, ClassificationResult, ClassifierMode};
use crate::output::truncate_chars;
use crate::ranking::Ranked;

/// Display the full analyze flow for a product.
pub fn display_analysis(analysis: &ProductAnalysis) {
    println!(
        "\n{}",
        format!("=== S5 Analysis for {} ===", analysis.product_name).bold()
    );
    display_classification(&analysis.classification);

    if !analysis.feedback.is_empty() {
        println!("\n{}", "Enhancing your product for S5 compliance:".bold());
        for item in &analysis.feedback {
            println!(
                "  {} {}: {}",
                "~".yellow(),
                item.category.to_string().bold(),
                item.suggestion
            );
        }
    }

    display_suggestion(&analysis.suggestion);

    if analysis.suggestion.matched.is_some() {
        let v = &analysis.seeded_vector;
        println!("\n{}", "Seeded trait sliders:".bold());
        println!(
            "  Openness {:.1}  Conscientiousness {:.1}  Extraversion {:.1}  \
             Agreeableness {:.1}  Neuroticism {:.1}",
            v.openness, v.conscientiousness, v.extraversion, v.agreeableness, v.neuroticism
        );
    }
}

/// Display per-category classification results.
pub fn display_classification(result: &ClassificationResult) {
    println!();
    for category in &result.categories {
        match result.mode {
            ClassifierMode::Simple => {
                let mark = if category.matched {
                    "yes".green().bold()
                } else {
                    "no".red()
                };
                println!("  {:<12} {mark}", category.category.to_string());
            }
            ClassifierMode::Leveled => display_leveled_category(category),
        }
    }
}

fn display_leveled_category(category: &CategoryResult) {
    let compliance = category.compliance.unwrap_or(0.0);
    let score = colorize_compliance(compliance);
    println!("  {:<12} {score}", category.category.to_string());

    if let Some(levels) = &category.levels {
        for (level, matched) in [
            (1, &levels.level1),
            (2, &levels.level2),
            (3, &levels.level3),
        ] {
            if !matched.is_empty() {
                println!(
                    "      {} {}",
                    format!("L{level}:").dimmed(),
                    matched.join(", ").dimmed()
                );
            }
        }
    }
}

/// Display suggested traits from the best-matching exemplar.
pub fn display_suggestion(suggestion: &TraitSuggestion) {
    println!("\n{}", "Personality trait suggestions:".bold());
    match &suggestion.matched {
        Some(m) => {
            println!(
                "  Closest exemplar: {} (#{}, similarity {:.2})",
                m.name.bold(),
                m.id,
                m.score
            );
            let traits: Vec<&str> = suggestion.traits.iter().map(|t| t.as_str()).collect();
            println!("  Suggested traits: {}", traits.join(", ").green());
        }
        None => {
            println!("  No relevant match found.");
            println!("  You can set the trait sliders manually to see related solutions.");
        }
    }
}

/// Display a ranked recommendation list.
pub fn display_recommendations(ranked: &[Ranked]) {
    if ranked.is_empty() {
        println!("The catalog is empty — nothing to recommend.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Recommended Solutions ({}) ===", ranked.len()).bold()
    );
    println!();

    for (i, r) in ranked.iter().enumerate() {
        let traits: Vec<&str> = r
            .entry
            .personality_traits
            .iter()
            .map(|t| t.as_str())
            .collect();
        println!(
            "  {:>2}. {}  {}",
            i + 1,
            r.entry.name.bold(),
            format!("(match {:.2})", r.score).dimmed()
        );
        println!("      {}", truncate_chars(&r.entry.description, 76));
        println!("      {}", traits.join(", ").green());
    }
}

/// Display one catalog entry in full, S5 feature texts included.
pub fn display_entry_detail(entry: &CatalogEntry) {
    println!("\n{}", format!("#{} {}", entry.id, entry.name).bold());
    println!("  {}", entry.description);
    for category in S5Category::ALL {
        println!(
            "  {:<12} {}",
            category.to_string().dimmed(),
            entry.s5_features.text(category)
        );
    }
    let traits: Vec<&str> = entry
        .personality_traits
        .iter()
        .map(|t| t.as_str())
        .collect();
    println!("  {:<12} {}", "Traits".dimmed(), traits.join(", ").green());
}

/// Display the full catalog as a table.
pub fn display_catalog(entries: &[CatalogEntry]) {
    println!(
        "\n{}",
        format!("=== Solution Catalog ({} entries) ===", entries.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<48} {}",
        "Id".dimmed(),
        "Name".dimmed(),
        "Traits".dimmed()
    );
    println!("  {}", "-".repeat(78).dimmed());

    for entry in entries {
        let traits: Vec<&str> = entry
            .personality_traits
            .iter()
            .map(|t| t.as_str())
            .collect();
        println!(
            "  {:>4}  {:<48} {}",
            entry.id,
            truncate_chars(&entry.name, 48),
            traits.join(", ")
        );
    }
}

fn colorize_compliance(score: f64) -> String {
    let text = format!("{score:>5.1}/100");
    if score >= 67.0 {
        text.green().bold().to_string()
    } else if score > 0.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
