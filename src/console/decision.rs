//! Decision screens - options, weighted criteria, ratings, ranking.

use anyhow::Result;
use colored::Colorize;

use super::render::{print_header, print_notice, ranked_line};
use super::{ask, ask_number, choose, navigation, Flow};
use clarity::application::ClarityApp;
use clarity::domain::decision::{DecisionExercise, DecisionPhase};
use clarity::domain::foundation::{CriterionId, OptionId, Score, Weight};

#[derive(Debug, Clone, Copy)]
enum Action {
    Name,
    AddOption,
    AddCriterion,
    Reweigh,
    Rate,
    Advance,
    StartOver,
    Menu,
    Quit,
}

pub fn show(app: &mut ClarityApp) -> Result<Flow> {
    let exercise = app.decision()?;
    print_header(app.active(), Some(exercise.phase().subtitle()));

    let mut entries = Vec::new();
    match exercise.phase() {
        DecisionPhase::Setup => {
            let name = if exercise.name().is_empty() {
                "(unnamed decision)"
            } else {
                exercise.name()
            };
            println!("  {}", name.bold());
            for option in exercise.options() {
                println!("  - {}", option.name);
            }
            entries.push(("Name the decision".to_string(), Action::Name));
            entries.push(("Add an option".to_string(), Action::AddOption));
            if exercise.can_advance() {
                entries.push(("Define criteria".to_string(), Action::Advance));
            }
        }
        DecisionPhase::Criteria => {
            for criterion in exercise.criteria() {
                println!("  {:<24} weight {}", criterion.name.as_str(), criterion.weight);
            }
            entries.push(("Add a criterion".to_string(), Action::AddCriterion));
            if !exercise.criteria().is_empty() {
                entries.push(("Adjust a weight".to_string(), Action::Reweigh));
            }
            if exercise.can_advance() {
                entries.push(("Rate options".to_string(), Action::Advance));
            }
        }
        DecisionPhase::Rate => {
            print_matrix(exercise);
            entries.push(("Rate an option".to_string(), Action::Rate));
            entries.push(("Calculate result".to_string(), Action::Advance));
        }
        DecisionPhase::Result => {
            for (position, ranked) in exercise.results().iter().enumerate() {
                let line = ranked_line(position, ranked);
                if ranked.is_winner {
                    println!("  {}", line.green().bold());
                } else {
                    println!("  {}", line);
                }
            }
            println!("\n  Maximum possible: {} pts", exercise.max_score());
            entries.push(("Start over".to_string(), Action::StartOver));
        }
    }
    entries.extend(navigation(Action::Menu, Action::Quit));

    match choose("What next?", &entries)? {
        Action::Name => {
            let current = app.decision()?.name().to_string();
            let text = ask("What are you deciding?", &current)?;
            app.decision_mut()?.set_name(&text)?;
        }
        Action::AddOption => {
            let text = ask("Option", "")?;
            if let Err(e) = app.decision_mut()?.add_option(&text) {
                print_notice(&e.to_string());
            }
        }
        Action::AddCriterion => {
            let text = ask("Criterion", "")?;
            if let Err(e) = app.decision_mut()?.add_criterion(&text) {
                print_notice(&e.to_string());
            }
        }
        Action::Reweigh => reweigh(app)?,
        Action::Rate => rate(app)?,
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

fn print_matrix(exercise: &DecisionExercise) {
    for option in exercise.options() {
        println!("  {}", option.name.as_str().bold());
        for criterion in exercise.criteria() {
            println!(
                "    {:<22} {:>2}/{}",
                criterion.name.as_str(),
                option.score_for(&criterion.id).value(),
                Score::MAX
            );
        }
    }
}

fn reweigh(app: &mut ClarityApp) -> Result<()> {
    let mut entries: Vec<(String, Option<(CriterionId, u8)>)> = app
        .decision()?
        .criteria()
        .iter()
        .map(|c| (c.name.to_string(), Some((c.id, c.weight.value()))))
        .collect();
    entries.push(("Cancel".to_string(), None));

    if let Some((id, current)) = choose("Which criterion?", &entries)? {
        let value = ask_number("Importance", Weight::MIN, Weight::MAX, current)?;
        app.decision_mut()?.set_weight(&id, Weight::new(value))?;
    }
    Ok(())
}

fn rate(app: &mut ClarityApp) -> Result<()> {
    let exercise = app.decision()?;
    let mut entries: Vec<(String, Option<OptionId>)> = exercise
        .options()
        .iter()
        .map(|o| (o.name.to_string(), Some(o.id)))
        .collect();
    entries.push(("Cancel".to_string(), None));

    let Some(option_id) = choose("Which option?", &entries)? else {
        return Ok(());
    };

    let prompts: Vec<(CriterionId, String, u8)> = match exercise.option(&option_id) {
        Some(option) => exercise
            .criteria()
            .iter()
            .map(|c| (c.id, c.name.to_string(), option.score_for(&c.id).value()))
            .collect(),
        None => return Ok(()),
    };

    for (criterion_id, name, current) in prompts {
        let value = ask_number(&name, 0, Score::MAX, current)?;
        app.decision_mut()?
            .set_score(&option_id, &criterion_id, Score::new(value))?;
    }
    Ok(())
}
