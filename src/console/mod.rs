//! Interactive terminal front end.
//!
//! Each screen prints the open phase, offers only the actions whose guards
//! currently hold, and applies the chosen one. All rules live in the library.

mod decision;
mod filter;
mod landing;
mod render;
mod teach;

use anyhow::{Context, Result};
use dialoguer::{Input, Select};

use clarity::application::ClarityApp;
use clarity::domain::foundation::Mode;

/// What the main loop does after a screen returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs screens until the user quits.
pub fn run(app: &mut ClarityApp) -> Result<()> {
    loop {
        let flow = match app.mode() {
            Mode::Landing => landing::show(app)?,
            Mode::Filter => filter::show(app)?,
            Mode::Decision => decision::show(app)?,
            Mode::Teach => teach::show(app)?,
        };

        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

/// Shows a menu and returns the value paired with the chosen label.
fn choose<A: Copy>(prompt: &str, entries: &[(String, A)]) -> Result<A> {
    let labels: Vec<&str> = entries.iter().map(|(label, _)| label.as_str()).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to read menu choice")?;

    entries
        .get(index)
        .map(|(_, action)| *action)
        .context("Menu choice out of range")
}

/// Free-text prompt. An empty answer is allowed.
fn ask(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")
}

/// Bounded numeric prompt for weights and scores.
fn ask_number(prompt: &str, min: u8, max: u8, current: u8) -> Result<u8> {
    Input::<u8>::new()
        .with_prompt(format!("{} ({}-{})", prompt, min, max))
        .default(current)
        .validate_with(move |value: &u8| {
            if (min..=max).contains(value) {
                Ok(())
            } else {
                Err(format!("Enter a number from {} to {}", min, max))
            }
        })
        .interact_text()
        .context("Failed to read number")
}

/// Entries appended to every exercise menu.
fn navigation<A>(menu: A, quit: A) -> [(String, A); 2] {
    [
        ("Back to menu".to_string(), menu),
        ("Quit".to_string(), quit),
    ]
}
