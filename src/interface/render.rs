use colored::{ColoredString, Colorize};

use crate::batch::BatchSummary;
use crate::cli::ColorMode;
use crate::error::ValidationError;
use crate::models::{Grade, GradeColor};
use crate::scorer::Outcome;
use crate::state::{History, Session};

/// Turn grade coloring on or off for the rest of the process.
pub fn apply_color_mode(mode: ColorMode) {
    colored::control::set_override(mode.should_use_color());
}

/// Grade label in its display color.
pub fn paint_grade(grade: Grade) -> ColoredString {
    match grade.color() {
        GradeColor::Good => grade.label().truecolor(0x00, 0xBD, 0x1E).bold(),
        GradeColor::Poor => grade.label().red().bold(),
    }
}

/// History lines as shown under the result.
pub fn history_lines(history: &History) -> Vec<String> {
    history
        .iter()
        .map(|entry| format!("grade: {} (score: {})", entry.grade, entry.score))
        .collect()
}

/// Show the current result and the history behind it.
pub fn display_session(session: &Session) {
    let Some(current) = session.current() else {
        return;
    };

    println!();
    println!("grade: {}", paint_grade(current.grade));
    println!("exact score: {}", current.score);
    println!("{}", "(higher is cheaper!)".italic());

    if current.grade.is_anomaly() {
        println!("{}", "That score is unrealistically high. Double-check the inputs.".dimmed());
    }

    display_history(session.history());
    println!();
}

/// Show the history block, or nothing if it's empty.
pub fn display_history(history: &History) {
    if history.is_empty() {
        return;
    }

    println!();
    println!("history (most recent at top):");
    for line in history_lines(history) {
        println!("  {}", line);
    }
}

/// One-line result for the `score` command.
pub fn display_outcome(outcome: &Outcome) {
    println!(
        "grade: {}  exact score: {}  ({:.1} mL)",
        paint_grade(outcome.entry.grade),
        outcome.entry.score,
        outcome.volume_ml
    );
}

/// Tell the user why a submission was rejected.
pub fn display_rejection(err: &ValidationError) {
    println!("{}", err.to_string().yellow());
}

pub fn display_batch_summary(summary: &BatchSummary) {
    eprintln!(
        "Scored {} drinks, rejected {}.",
        summary.scored, summary.rejected
    );
}
