//! Teach-back screens - topic, three levels of explanation, reflection.

use anyhow::Result;
use colored::Colorize;

use super::render::{print_header, print_notice};
use super::{ask, choose, navigation, Flow};
use clarity::application::ClarityApp;
use clarity::domain::teach::TeachPhase;

#[derive(Debug, Clone, Copy)]
enum Action {
    Topic,
    Write,
    Advance,
    StartOver,
    Menu,
    Quit,
}

pub fn show(app: &mut ClarityApp) -> Result<Flow> {
    let exercise = app.teach()?;
    let phase = exercise.phase();
    print_header(app.active(), Some(phase.subtitle()));

    let mut entries = Vec::new();
    match phase {
        TeachPhase::Topic => {
            if !exercise.topic().is_empty() {
                println!("  {}", exercise.topic().bold());
            }
            entries.push(("Choose a topic".to_string(), Action::Topic));
        }
        TeachPhase::Simple | TeachPhase::Practical | TeachPhase::Expert => {
            if let Some(prompt) = exercise.current_prompt() {
                println!("  {}\n", prompt.italic());
            }
            match exercise.current_text() {
                Some(text) if !text.trim().is_empty() => println!("  {}", text),
                _ => println!("{}", "  Nothing written yet.".dimmed()),
            }
            entries.push(("Write explanation".to_string(), Action::Write));
        }
        TeachPhase::Reflection => {
            println!("  Topic: {}\n", exercise.topic().bold());
            for (level, text) in exercise.review().unwrap_or_default() {
                println!("  {}", level.heading().cyan());
                println!("  {}\n", text);
            }
            entries.push(("Start over".to_string(), Action::StartOver));
        }
    }
    if exercise.can_advance() {
        entries.push((phase.advance_label().to_string(), Action::Advance));
    }
    entries.extend(navigation(Action::Menu, Action::Quit));

    match choose("What next?", &entries)? {
        Action::Topic => {
            let current = app.teach()?.topic().to_string();
            let text = ask("What do you want to understand?", &current)?;
            app.teach_mut()?.set_topic(&text)?;
        }
        Action::Write => {
            let current = app.teach()?.current_text().unwrap_or_default().to_string();
            let text = ask("Explanation", &current)?;
            app.teach_mut()?.write(&text)?;
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
