use dioxus::prelude::*;

use crate::{
    client::store::Toaster,
    form::{Draft, FieldErrors},
    Error,
};

/// Draft, inline errors and in-flight flag of one form screen.
pub struct FormState<D: 'static> {
    pub draft: Signal<D>,
    pub errors: Signal<FieldErrors>,
    pub submitting: Signal<bool>,
}

impl<D: 'static> Clone for FormState<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: 'static> Copy for FormState<D> {}

pub fn use_form<D: Draft + 'static>(init: impl FnOnce() -> D) -> FormState<D> {
    FormState {
        draft: use_signal(init),
        errors: use_signal(FieldErrors::new),
        submitting: use_signal(|| false),
    }
}

impl<D: Draft + 'static> FormState<D> {
    /// Edits the draft and clears the error shown under `field`
    pub fn edit(mut self, field: &str, update: impl FnOnce(&mut D)) {
        update(&mut self.draft.write());
        if self.errors.peek().contains(field) {
            self.errors.write().clear(field);
        }
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.read().get(field).map(str::to_string)
    }

    /// Validates the draft, showing the errors inline and in a toast on failure
    pub fn validate(mut self, today: chrono::NaiveDate, toaster: Toaster) -> Option<D::Valid> {
        let result = self.draft.read().validate(today);
        match result {
            Ok(valid) => {
                self.errors.set(FieldErrors::new());
                Some(valid)
            }
            Err(errors) => {
                toaster.error(Error::Validation(errors.clone()).to_string());
                self.errors.set(errors);
                None
            }
        }
    }

    pub fn reset(mut self, fresh: D) {
        self.draft.set(fresh);
        self.errors.set(FieldErrors::new());
    }

    pub fn set_submitting(mut self, submitting: bool) {
        self.submitting.set(submitting);
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.read()
    }
}
