//! Filter screens - capture, select three, show the focus list.

use anyhow::Result;
use colored::Colorize;

use super::render::{check_row, print_header, print_notice};
use super::{ask, choose, navigation, Flow};
use clarity::application::ClarityApp;
use clarity::domain::filter::{FilterPhase, ToggleOutcome, SELECTION_CAP};

#[derive(Debug, Clone, Copy)]
enum Action {
    Add,
    Remove,
    Toggle,
    Advance,
    StartOver,
    Menu,
    Quit,
}

pub fn show(app: &mut ClarityApp) -> Result<Flow> {
    let exercise = app.filter()?;
    print_header(app.active(), Some(exercise.phase().subtitle()));

    let items: Vec<String> = exercise.items().iter().map(|i| i.to_string()).collect();
    let mut entries = Vec::new();

    match exercise.phase() {
        FilterPhase::Input => {
            if items.is_empty() {
                println!("{}", "  Nothing captured yet.".dimmed());
            }
            for (index, item) in items.iter().enumerate() {
                println!("  {}. {}", index + 1, item);
            }
            entries.push(("Add a thought".to_string(), Action::Add));
            if !items.is_empty() {
                entries.push(("Remove a thought".to_string(), Action::Remove));
            }
            if exercise.can_advance() {
                entries.push(("Filter these".to_string(), Action::Advance));
            }
        }
        FilterPhase::Select => {
            for (index, item) in items.iter().enumerate() {
                println!("  {}", check_row(exercise.is_selected(index), item));
            }
            println!(
                "\n  {} of {} chosen",
                exercise.selection().len(),
                SELECTION_CAP
            );
            entries.push(("Toggle a thought".to_string(), Action::Toggle));
            if exercise.can_advance() {
                entries.push((exercise.confirm_label(), Action::Advance));
            }
        }
        FilterPhase::Result => {
            for (rank, item) in exercise.focus().iter().enumerate() {
                println!("  {}. {}", rank + 1, item.as_str().bold());
            }
            entries.push(("Start over".to_string(), Action::StartOver));
        }
    }
    entries.extend(navigation(Action::Menu, Action::Quit));

    match choose("What next?", &entries)? {
        Action::Add => {
            let text = ask("Thought", "")?;
            if let Err(e) = app.filter_mut()?.add_item(&text) {
                print_notice(&e.to_string());
            }
        }
        Action::Remove => {
            if let Some(index) = pick_item("Remove which?", &items)? {
                app.filter_mut()?.remove_item(index)?;
            }
        }
        Action::Toggle => {
            if let Some(index) = pick_item("Toggle which?", &items)? {
                if app.filter_mut()?.toggle(index)? == ToggleOutcome::Rejected {
                    print_notice("Three is the limit. Deselect one first.");
                }
            }
        }
        Action::Advance => {
            if let Err(e) = app.advance() {
                print_notice(&e.to_string());
            }
        }
        Action::StartOver => app.reset()?,
        Action::Menu => app.back_to_landing(),
        Action::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn pick_item(prompt: &str, items: &[String]) -> Result<Option<usize>> {
    let mut entries: Vec<(String, Option<usize>)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (item.clone(), Some(index)))
        .collect();
    entries.push(("Cancel".to_string(), None));
    choose(prompt, &entries)
}
