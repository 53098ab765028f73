// Colored terminal output for comparison results.
//
// `display_details` is the diagnostic dump behind `plagcheck check --details`:
// normalized texts, vocabulary, both vectors, and a word frequency table.
// It only reads the analysis; nothing here feeds back into the score.

use colored::Colorize;

use crate::compare::Analysis;
use crate::models::Comparison;
use crate::scoring::level::PlagiarismLevel;
use crate::storage::SlotSnapshot;

/// How much normalized text to show before truncating, unless `--full` is set.
pub const TEXT_PREVIEW_CHARS: usize = 400;

/// Display the final result of a comparison.
pub fn display_result(comparison: &Comparison, test_name: &str, reference_name: &str) {
    println!("\n{}", "=".repeat(50));
    println!("{}", "Plagiarism Check Result".bold());
    println!("  Test document:      {test_name}");
    println!("  Reference document: {reference_name}");
    println!("  Similarity:         {}", comparison.percentage().bold());
    println!("  Verdict:            {}", colorize_level(comparison.level));
    println!("{}", "=".repeat(50));
}

/// Display the intermediate steps of a comparison. Normalized texts are
/// cut at `TEXT_PREVIEW_CHARS` unless `full_text` is set.
pub fn display_details(analysis: &Analysis, full_text: bool) {
    println!("\n{}", "=== Calculation Details ===".bold());

    println!("\n{}", "Normalized text:".bold());
    println!(
        "  Test:      {}",
        text_preview(&analysis.normalized_test, full_text).dimmed()
    );
    println!(
        "  Reference: {}",
        text_preview(&analysis.normalized_reference, full_text).dimmed()
    );

    let space = &analysis.space;
    println!("\n{} {:?}", "Vocabulary:".bold(), space.vocabulary);
    println!("\n{} {:?}", "Test vector:".bold(), space.test);
    println!("{} {:?}", "Reference vector:".bold(), space.reference);

    println!("\n{}", "Word frequency table:".bold());
    println!("  {}", "-".repeat(50).dimmed());
    println!(
        "  {:<20} {:>12} {:>12}",
        "Word".dimmed(),
        "Test".dimmed(),
        "Reference".dimmed()
    );
    println!("  {}", "-".repeat(50).dimmed());
    for (word, test, reference) in space.rows() {
        println!("  {:<20} {:>12} {:>12}", word, test, reference);
    }
    println!("  {}", "-".repeat(50).dimmed());
}

/// Display what's currently sitting in the two upload slots.
pub fn display_slots(snapshot: &SlotSnapshot) {
    println!("\n{}", "=== Stored Documents ===".bold());
    for (label, slot) in [("Test", &snapshot.test), ("Reference", &snapshot.reference)] {
        match slot {
            Some(doc) => println!(
                "  {:<10} {} ({} bytes, uploaded {})",
                label, doc.filename, doc.size_bytes, doc.uploaded_at
            ),
            None => println!("  {:<10} {}", label, "empty".dimmed()),
        }
    }
}

fn text_preview(text: &str, full_text: bool) -> String {
    if full_text {
        text.to_string()
    } else {
        super::truncate_chars(text, TEXT_PREVIEW_CHARS)
    }
}

/// Colorize a plagiarism level.
fn colorize_level(level: PlagiarismLevel) -> colored::ColoredString {
    let label = level.as_str();
    match level {
        PlagiarismLevel::Heavy => label.red().bold(),
        PlagiarismLevel::Moderate => label.bright_red(),
        PlagiarismLevel::Light => label.yellow(),
        PlagiarismLevel::None => label.green(),
    }
}
