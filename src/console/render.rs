//! Plain-text rendering helpers shared by every screen.

use colored::Colorize;

use clarity::application::ActiveExercise;
use clarity::domain::decision::RankedOption;
use clarity::domain::foundation::Percentage;

const BAR_WIDTH: usize = 20;

/// Fixed-width progress bar, e.g. `[#####---------------]  25%`.
pub fn progress_bar(progress: Percentage) -> String {
    let filled = (progress.value() as usize * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.value()
    )
}

/// One line of the ranked results table.
pub fn ranked_line(position: usize, ranked: &RankedOption) -> String {
    let marker = if ranked.is_winner { "*" } else { " " };
    format!(
        "{} {}. {:<24} {:>4} pts {:>4}%",
        marker,
        position + 1,
        ranked.name,
        ranked.score,
        ranked.percentage.value()
    )
}

/// Checkbox-style row for a list item.
pub fn check_row(checked: bool, text: &str) -> String {
    if checked {
        format!("[x] {}", text)
    } else {
        format!("[ ] {}", text)
    }
}

/// Prints the heading block for the open phase.
pub fn print_header(active: &ActiveExercise, subtitle: Option<&str>) {
    let mode = active.mode();
    println!();
    println!("{}", mode.title().dimmed());
    if let Some(title) = active.phase_title() {
        println!("{}", title.bold());
    }
    if let Some(subtitle) = subtitle {
        println!("{}", subtitle.dimmed());
    }
    if let Some(progress) = active.progress() {
        println!("{}", progress_bar(progress).cyan());
    }
    println!();
}

pub fn print_notice(message: &str) {
    println!("{} {}", "!".yellow().bold(), message);
}
