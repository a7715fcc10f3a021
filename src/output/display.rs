//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_letters};
use crate::commands::SurveyResult;
use crate::core::letter_count;
use crate::game::RootAnalysis;
use colored::Colorize;

/// Print every word a root word yields
pub fn print_analysis_result(result: &RootAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} playable words", result.word_count());
    println!(
        "   Max score:   {}",
        result.max_score.to_string().bright_yellow().bold()
    );

    let mut current_len = 0;
    for word in &result.words {
        let len = letter_count(word);
        if len != current_len {
            current_len = len;
            print!("\n   {} ", format!("{len} letters:").bright_cyan());
        }
        print!("{word} ");
    }
    println!();
}

/// Print the ranking produced by a survey
pub fn print_survey_result(result: &SurveyResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Roots surveyed:   {}", result.ranked.len());
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words()).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let best = result.ranked.first().map_or(0, |a| a.max_score);

    println!("\n🏆 {}", "Best roots:".bright_cyan().bold());
    for (rank, analysis) in result.ranked.iter().take(top).enumerate() {
        let bar = create_progress_bar(analysis.max_score as f64, best as f64, 30);
        println!(
            "   {:>3}. {:<12} {} {:4} pts {:4} words",
            rank + 1,
            analysis.root,
            bar.green(),
            analysis.max_score,
            analysis.word_count()
        );
    }

    let barren = result.barren();
    if !barren.is_empty() {
        println!(
            "\n⚠️  {} {}",
            "No playable words:".yellow().bold(),
            barren.join(", ")
        );
    }
}
