//! The exercise instance behind the current mode.

use crate::domain::decision::DecisionExercise;
use crate::domain::filter::FilterExercise;
use crate::domain::foundation::{ExerciseError, Mode, Percentage, PhaseSequence};
use crate::domain::teach::TeachExercise;

/// Exercise state for the mode on screen. Landing holds none.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveExercise {
    #[default]
    Landing,
    Filter(FilterExercise),
    Decision(DecisionExercise),
    Teach(TeachExercise),
}

/// A completed phase step, as phase labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStep {
    pub from: &'static str,
    pub to: &'static str,
}

impl ActiveExercise {
    /// A fresh exercise in its initial phase for `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Landing => Self::Landing,
            Mode::Filter => Self::Filter(FilterExercise::new()),
            Mode::Decision => Self::Decision(DecisionExercise::new()),
            Mode::Teach => Self::Teach(TeachExercise::new()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Landing => Mode::Landing,
            Self::Filter(_) => Mode::Filter,
            Self::Decision(_) => Mode::Decision,
            Self::Teach(_) => Mode::Teach,
        }
    }

    pub fn phase_label(&self) -> Option<&'static str> {
        match self {
            Self::Landing => None,
            Self::Filter(e) => Some(e.phase().label()),
            Self::Decision(e) => Some(e.phase().label()),
            Self::Teach(e) => Some(e.phase().label()),
        }
    }

    pub fn phase_title(&self) -> Option<&'static str> {
        match self {
            Self::Landing => None,
            Self::Filter(e) => Some(e.phase().title()),
            Self::Decision(e) => Some(e.phase().title()),
            Self::Teach(e) => Some(e.phase().title()),
        }
    }

    pub fn progress(&self) -> Option<Percentage> {
        match self {
            Self::Landing => None,
            Self::Filter(e) => Some(e.phase().progress()),
            Self::Decision(e) => Some(e.phase().progress()),
            Self::Teach(e) => Some(e.phase().progress()),
        }
    }

    pub fn can_advance(&self) -> bool {
        match self {
            Self::Landing => false,
            Self::Filter(e) => e.can_advance(),
            Self::Decision(e) => e.can_advance(),
            Self::Teach(e) => e.can_advance(),
        }
    }

    pub fn advance(&mut self) -> Result<PhaseStep, ExerciseError> {
        match self {
            Self::Landing => Err(ExerciseError::wrong_phase("an exercise", "LANDING")),
            Self::Filter(e) => {
                let from = e.phase().label();
                Ok(PhaseStep { from, to: e.advance()?.label() })
            }
            Self::Decision(e) => {
                let from = e.phase().label();
                Ok(PhaseStep { from, to: e.advance()?.label() })
            }
            Self::Teach(e) => {
                let from = e.phase().label();
                Ok(PhaseStep { from, to: e.advance()?.label() })
            }
        }
    }

    /// Returns to the initial phase with empty data. No-op on Landing.
    pub fn reset(&mut self) {
        match self {
            Self::Landing => {}
            Self::Filter(e) => e.reset(),
            Self::Decision(e) => e.reset(),
            Self::Teach(e) => e.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_mode_starts_in_initial_phase() {
        assert_eq!(ActiveExercise::for_mode(Mode::Landing).phase_label(), None);
        assert_eq!(
            ActiveExercise::for_mode(Mode::Filter).phase_label(),
            Some("INPUT")
        );
        assert_eq!(
            ActiveExercise::for_mode(Mode::Decision).phase_label(),
            Some("SETUP")
        );
        assert_eq!(
            ActiveExercise::for_mode(Mode::Teach).phase_label(),
            Some("TOPIC")
        );
    }

    #[test]
    fn mode_round_trips_through_for_mode() {
        for mode in [Mode::Landing, Mode::Filter, Mode::Decision, Mode::Teach] {
            assert_eq!(ActiveExercise::for_mode(mode).mode(), mode);
        }
    }

    #[test]
    fn landing_cannot_advance() {
        let mut active = ActiveExercise::Landing;
        assert!(!active.can_advance());
        assert!(active.advance().is_err());
    }

    #[test]
    fn advance_reports_labels() {
        let mut filter = FilterExercise::new();
        filter.add_item("Ship the release").unwrap();
        let mut active = ActiveExercise::Filter(filter);

        let step = active.advance().unwrap();

        assert_eq!(step, PhaseStep { from: "INPUT", to: "SELECT" });
        assert_eq!(active.phase_title(), Some("What actually matters?"));
    }

    #[test]
    fn fresh_exercises_show_first_step_progress() {
        let decision = ActiveExercise::for_mode(Mode::Decision);
        assert_eq!(decision.progress().map(|p| p.value()), Some(25));

        let teach = ActiveExercise::for_mode(Mode::Teach);
        assert_eq!(teach.progress().map(|p| p.value()), Some(20));
    }
}
