//! Landing screen - pick one of the three exercises.

use anyhow::Result;
use colored::Colorize;

use super::{choose, Flow};
use clarity::application::ClarityApp;
use clarity::domain::foundation::Mode;

pub fn show(app: &mut ClarityApp) -> Result<Flow> {
    println!();
    println!("{}", Mode::Landing.title().bold());
    println!("{}", Mode::Landing.tagline().dimmed());
    println!();

    let mut entries: Vec<(String, Option<Mode>)> = Mode::EXERCISES
        .iter()
        .map(|mode| (format!("{} - {}", mode.title(), mode.tagline()), Some(*mode)))
        .collect();
    entries.push(("Quit".to_string(), None));

    match choose("Choose an exercise", &entries)? {
        Some(mode) => {
            app.select_mode(mode);
            Ok(Flow::Continue)
        }
        None => Ok(Flow::Quit),
    }
}
