//! Framework-neutral handles for the form's controls, fields and status region.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use shared::domain::{RawRsvpForm, Status};

pub trait FormControl: Send + Sync {
    fn name(&self) -> &str;
    fn set_enabled(&self, enabled: bool);
    fn is_enabled(&self) -> bool;
}

/// Cloneable enable flag shared between whoever renders a control and the
/// controller that toggles it. Starts disabled.
#[derive(Debug, Clone)]
pub struct ControlHandle {
    name: Arc<str>,
    enabled: Arc<AtomicBool>,
}

impl ControlHandle {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            enabled: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl FormControl for ControlHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

/// Every control of one form. Closing moves all of them together.
#[derive(Clone)]
pub struct FormControls {
    submit: Arc<dyn FormControl>,
    inputs: Vec<Arc<dyn FormControl>>,
}

impl FormControls {
    pub fn new(submit: Arc<dyn FormControl>, inputs: Vec<Arc<dyn FormControl>>) -> Self {
        Self { submit, inputs }
    }

    pub fn submit(&self) -> &dyn FormControl {
        self.submit.as_ref()
    }

    pub fn all(&self) -> impl Iterator<Item = &Arc<dyn FormControl>> {
        std::iter::once(&self.submit).chain(self.inputs.iter())
    }

    pub fn set_closed(&self, closed: bool) {
        for control in self.all() {
            control.set_enabled(!closed);
        }
    }

    pub fn set_submit_enabled(&self, enabled: bool) {
        self.submit.set_enabled(enabled);
    }

    pub fn all_enabled(&self) -> bool {
        self.all().all(|c| c.is_enabled())
    }

    pub fn all_disabled(&self) -> bool {
        self.all().all(|c| !c.is_enabled())
    }
}

/// Named handles for the RSVP form's submit button and six inputs.
#[derive(Debug, Clone)]
pub struct FieldHandles {
    pub submit: ControlHandle,
    pub parent_name: ControlHandle,
    pub phone: ControlHandle,
    pub child_name: ControlHandle,
    pub age: ControlHandle,
    pub qty: ControlHandle,
    pub notes: ControlHandle,
}

impl Default for FieldHandles {
    fn default() -> Self {
        Self {
            submit: ControlHandle::new("submitBtn"),
            parent_name: ControlHandle::new("parentName"),
            phone: ControlHandle::new("phone"),
            child_name: ControlHandle::new("childName"),
            age: ControlHandle::new("age"),
            qty: ControlHandle::new("qty"),
            notes: ControlHandle::new("notes"),
        }
    }
}

impl FieldHandles {
    pub fn form_controls(&self) -> FormControls {
        let inputs: Vec<Arc<dyn FormControl>> = vec![
            Arc::new(self.parent_name.clone()),
            Arc::new(self.phone.clone()),
            Arc::new(self.child_name.clone()),
            Arc::new(self.age.clone()),
            Arc::new(self.qty.clone()),
            Arc::new(self.notes.clone()),
        ];
        FormControls::new(Arc::new(self.submit.clone()), inputs)
    }
}

pub trait StatusSink: Send + Sync {
    fn show(&self, status: Status);
}

/// Keeps the current status plus everything shown before it.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    shown: Arc<Mutex<Vec<Status>>>,
}

impl StatusBoard {
    fn guard(&self) -> MutexGuard<'_, Vec<Status>> {
        self.shown.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current(&self) -> Option<Status> {
        self.guard().last().cloned()
    }

    pub fn history(&self) -> Vec<Status> {
        self.guard().clone()
    }
}

impl StatusSink for StatusBoard {
    fn show(&self, status: Status) {
        self.guard().push(status);
    }
}

pub trait FormFields: Send + Sync {
    fn read(&self) -> RawRsvpForm;
    fn reset(&self);
}

/// Form values shared between the editing surface and the controller.
#[derive(Debug, Clone, Default)]
pub struct SharedForm {
    values: Arc<Mutex<RawRsvpForm>>,
}

impl SharedForm {
    pub fn new(values: RawRsvpForm) -> Self {
        Self {
            values: Arc::new(Mutex::new(values)),
        }
    }

    pub fn update<R>(&self, edit: impl FnOnce(&mut RawRsvpForm) -> R) -> R {
        let mut guard = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        edit(&mut guard)
    }
}

impl FormFields for SharedForm {
    fn read(&self) -> RawRsvpForm {
        self.update(|values| values.clone())
    }

    fn reset(&self) {
        self.update(|values| *values = RawRsvpForm::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_start_disabled_and_close_together() {
        let handles = FieldHandles::default();
        let controls = handles.form_controls();
        assert!(controls.all_disabled());

        controls.set_closed(false);
        assert!(controls.all_enabled());
        assert!(handles.notes.is_enabled());

        controls.set_submit_enabled(false);
        assert!(!handles.submit.is_enabled());
        assert!(handles.phone.is_enabled());

        controls.set_closed(true);
        assert!(controls.all_disabled());
    }

    #[test]
    fn shared_form_reset_restores_default_quantity() {
        let form = SharedForm::default();
        form.update(|values| {
            values.parent_name = "Dana".into();
            values.qty = "4".into();
        });
        assert_eq!(form.read().qty, "4");

        form.reset();
        let values = form.read();
        assert!(values.parent_name.is_empty());
        assert_eq!(values.qty, "1");
    }

    #[test]
    fn status_board_tracks_latest() {
        let board = StatusBoard::default();
        assert!(board.current().is_none());
        board.show(Status::sending());
        board.show(Status::received());
        assert_eq!(board.current(), Some(Status::received()));
        assert_eq!(board.history().len(), 2);
    }
}
