//! Display functions for command results

use super::formatters::{code_to_string, create_progress_bar, pegs_to_string};
use crate::commands::{ScoreResult, SecretAnalysis};
use crate::core::Palette;
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult, palette: &Palette) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret: {}", code_to_string(&result.secret, palette));
    println!("Guess:  {}", code_to_string(&result.guess, palette));
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\nPins:   {}  ({})",
        pegs_to_string(result.feedback, result.secret.len()).bright_white().bold(),
        result.feedback
    );

    println!();
    if result.is_solved() {
        println!("{}", "✅ Code broken!".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "{} of {} pins placed correctly",
                result.feedback.exact,
                result.secret.len()
            )
            .yellow()
        );
    }
}

/// Print the result of a secret distribution analysis
pub fn print_analysis_result(result: &SecretAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SECRET ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Secrets drawn:    {}", result.games);
    println!("   Secret length:    {}", result.length);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Symbol frequency:".bright_cyan().bold());
    let expected = result.expected_frequency();
    let max = result
        .frequencies
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0) as f64;

    for (label, count) in &result.frequencies {
        let bar = create_progress_bar(*count as f64, max, 40);
        let deviation = if expected > 0.0 {
            (*count as f64 - expected) / expected * 100.0
        } else {
            0.0
        };
        println!("   {label:>3}: {} {count:7} ({deviation:+5.1}%)", bar.green());
    }

    println!("\n🔁 {}", "Repeated symbols:".bright_cyan().bold());
    println!(
        "   Secrets with repeats: {} ({:.1}%)",
        result.with_repeats,
        result.repeat_share() * 100.0
    );
    println!(
        "   Uniform expectation:  {:.1}%",
        result.expected_repeat_share * 100.0
    );
}
