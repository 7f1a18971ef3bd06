//! ClarityApp - hosts the mode router and the exercise on screen.

use std::sync::Arc;
use tracing::{debug, info};

use super::{ActiveExercise, AppError, ModeRouter, PhaseStep};
use crate::domain::decision::DecisionExercise;
use crate::domain::filter::FilterExercise;
use crate::domain::foundation::{Mode, TransitionEvent};
use crate::domain::teach::TeachExercise;
use crate::ports::{KeyValueStore, TransitionListener};

/// Application root: one persisted mode, one ephemeral exercise.
///
/// Mode changes and phase advances made through this type are announced to
/// every subscribed listener. Edits inside a phase go through the typed
/// accessors (`filter_mut`, `decision_mut`, `teach_mut`) and are silent.
pub struct ClarityApp {
    router: ModeRouter,
    active: ActiveExercise,
    listeners: Vec<Arc<dyn TransitionListener>>,
}

impl ClarityApp {
    /// Restores the persisted mode and opens a fresh exercise for it.
    pub fn start(store: Arc<dyn KeyValueStore>) -> Self {
        let router = ModeRouter::load(store);
        let active = ActiveExercise::for_mode(router.mode());
        info!(mode = %router.mode(), "Clarity started");
        Self {
            router,
            active,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Arc<dyn TransitionListener>) {
        self.listeners.push(listener);
    }

    pub fn mode(&self) -> Mode {
        self.router.mode()
    }

    pub fn active(&self) -> &ActiveExercise {
        &self.active
    }

    /// Persists `mode` and shows it.
    ///
    /// Switching to a different mode discards the current exercise and opens
    /// a fresh one. Re-selecting the mode on screen keeps its progress.
    pub fn select_mode(&mut self, mode: Mode) {
        let previous = self.router.set_mode(mode);
        if previous == mode {
            debug!(%mode, "Mode re-selected");
            return;
        }

        self.active = ActiveExercise::for_mode(mode);
        self.emit(TransitionEvent::ModeChanged {
            from: previous,
            to: mode,
        });
    }

    pub fn back_to_landing(&mut self) {
        self.select_mode(Mode::Landing);
    }

    pub fn can_advance(&self) -> bool {
        self.active.can_advance()
    }

    /// Moves the open exercise one phase forward if its guard holds.
    pub fn advance(&mut self) -> Result<PhaseStep, AppError> {
        let mode = self.mode();
        if !mode.is_exercise() {
            return Err(AppError::NoExercise(mode));
        }

        let step = self.active.advance()?;
        self.emit(TransitionEvent::PhaseAdvanced {
            mode,
            from: step.from,
            to: step.to,
        });
        Ok(step)
    }

    /// Starts the open exercise over. The mode is kept.
    pub fn reset(&mut self) -> Result<(), AppError> {
        let mode = self.mode();
        if !mode.is_exercise() {
            return Err(AppError::NoExercise(mode));
        }

        self.active.reset();
        self.emit(TransitionEvent::ExerciseReset { mode });
        Ok(())
    }

    // === Typed access ===

    pub fn filter(&self) -> Result<&FilterExercise, AppError> {
        match &self.active {
            ActiveExercise::Filter(exercise) => Ok(exercise),
            other => Err(mismatch(Mode::Filter, other.mode())),
        }
    }

    pub fn filter_mut(&mut self) -> Result<&mut FilterExercise, AppError> {
        match &mut self.active {
            ActiveExercise::Filter(exercise) => Ok(exercise),
            other => Err(mismatch(Mode::Filter, other.mode())),
        }
    }

    pub fn decision(&self) -> Result<&DecisionExercise, AppError> {
        match &self.active {
            ActiveExercise::Decision(exercise) => Ok(exercise),
            other => Err(mismatch(Mode::Decision, other.mode())),
        }
    }

    pub fn decision_mut(&mut self) -> Result<&mut DecisionExercise, AppError> {
        match &mut self.active {
            ActiveExercise::Decision(exercise) => Ok(exercise),
            other => Err(mismatch(Mode::Decision, other.mode())),
        }
    }

    pub fn teach(&self) -> Result<&TeachExercise, AppError> {
        match &self.active {
            ActiveExercise::Teach(exercise) => Ok(exercise),
            other => Err(mismatch(Mode::Teach, other.mode())),
        }
    }

    pub fn teach_mut(&mut self) -> Result<&mut TeachExercise, AppError> {
        match &mut self.active {
            ActiveExercise::Teach(exercise) => Ok(exercise),
            other => Err(mismatch(Mode::Teach, other.mode())),
        }
    }

    fn emit(&self, event: TransitionEvent) {
        for listener in &self.listeners {
            listener.on_transition(&event);
        }
    }
}

fn mismatch(expected: Mode, actual: Mode) -> AppError {
    if actual.is_exercise() {
        AppError::ModeMismatch { expected, actual }
    } else {
        AppError::NoExercise(actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::RecordingListener;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::MODE_KEY;
    use crate::domain::foundation::ExerciseError;

    fn app_with_recorder() -> (ClarityApp, RecordingListener, InMemoryKeyValueStore) {
        let store = InMemoryKeyValueStore::new();
        let recorder = RecordingListener::new();
        let mut app = ClarityApp::start(Arc::new(store.clone()));
        app.subscribe(Arc::new(recorder.clone()));
        (app, recorder, store)
    }

    #[test]
    fn starts_on_landing_with_empty_store() {
        let (app, _, _) = app_with_recorder();
        assert_eq!(app.mode(), Mode::Landing);
        assert_eq!(app.active(), &ActiveExercise::Landing);
    }

    #[test]
    fn starts_in_persisted_mode_with_fresh_exercise() {
        let store = InMemoryKeyValueStore::with_entry(MODE_KEY, "\"TEACH\"");
        let app = ClarityApp::start(Arc::new(store));

        assert_eq!(app.mode(), Mode::Teach);
        assert_eq!(app.teach().unwrap(), &TeachExercise::new());
    }

    #[test]
    fn select_mode_persists_and_announces() {
        let (mut app, recorder, store) = app_with_recorder();

        app.select_mode(Mode::Decision);

        assert_eq!(store.get(MODE_KEY).unwrap().as_deref(), Some("\"DECISION\""));
        assert_eq!(
            recorder.events(),
            vec![TransitionEvent::ModeChanged {
                from: Mode::Landing,
                to: Mode::Decision,
            }]
        );
        assert!(app.decision().is_ok());
    }

    #[test]
    fn leaving_an_exercise_discards_its_state() {
        let (mut app, _, _) = app_with_recorder();
        app.select_mode(Mode::Filter);
        app.filter_mut().unwrap().add_item("Inbox zero").unwrap();

        app.back_to_landing();
        app.select_mode(Mode::Filter);

        assert!(app.filter().unwrap().items().is_empty());
    }

    #[test]
    fn reselecting_current_mode_keeps_progress() {
        let (mut app, recorder, _) = app_with_recorder();
        app.select_mode(Mode::Filter);
        app.filter_mut().unwrap().add_item("Inbox zero").unwrap();
        recorder.clear();

        app.select_mode(Mode::Filter);

        assert_eq!(app.filter().unwrap().items().len(), 1);
        assert_eq!(recorder.event_count(), 0);
    }

    #[test]
    fn advance_emits_phase_labels() {
        let (mut app, recorder, _) = app_with_recorder();
        app.select_mode(Mode::Teach);
        app.teach_mut().unwrap().set_topic("Ownership").unwrap();
        recorder.clear();

        let step = app.advance().unwrap();

        assert_eq!(step, PhaseStep { from: "TOPIC", to: "SIMPLE" });
        assert_eq!(
            recorder.events(),
            vec![TransitionEvent::PhaseAdvanced {
                mode: Mode::Teach,
                from: "TOPIC",
                to: "SIMPLE",
            }]
        );
    }

    #[test]
    fn refused_advance_emits_nothing() {
        let (mut app, recorder, _) = app_with_recorder();
        app.select_mode(Mode::Decision);
        recorder.clear();

        let err = app.advance().unwrap_err();

        assert!(matches!(
            err,
            AppError::Exercise(ExerciseError::GuardNotMet { phase: "SETUP", .. })
        ));
        assert_eq!(recorder.event_count(), 0);
    }

    #[test]
    fn landing_has_nothing_to_advance_or_reset() {
        let (mut app, recorder, _) = app_with_recorder();

        assert!(!app.can_advance());
        assert_eq!(app.advance(), Err(AppError::NoExercise(Mode::Landing)));
        assert_eq!(app.reset(), Err(AppError::NoExercise(Mode::Landing)));
        assert_eq!(recorder.event_count(), 0);
    }

    #[test]
    fn reset_keeps_mode_and_clears_exercise() {
        let (mut app, recorder, _) = app_with_recorder();
        app.select_mode(Mode::Filter);
        app.filter_mut().unwrap().add_item("a").unwrap();
        app.advance().unwrap();

        app.reset().unwrap();

        assert_eq!(app.mode(), Mode::Filter);
        assert_eq!(app.filter().unwrap(), &FilterExercise::new());
        assert!(recorder.has_event("exercise.reset"));
    }

    #[test]
    fn typed_access_reports_mismatch() {
        let (mut app, _, _) = app_with_recorder();
        assert_eq!(
            app.filter().unwrap_err(),
            AppError::NoExercise(Mode::Landing)
        );

        app.select_mode(Mode::Teach);
        assert_eq!(
            app.decision_mut().unwrap_err(),
            AppError::ModeMismatch {
                expected: Mode::Decision,
                actual: Mode::Teach,
            }
        );
    }
}
