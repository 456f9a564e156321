//! View model tying the generic modal editor to page signals.

use contracts::domain::common::{Record, RecordCollection, SaveOutcome};
use contracts::shared::modal::{EditContext, Feedback, FormModel, ModalEditor, SubmitError, Submitted};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::browser_storage::with_local;
use crate::shared::clock::{today, BrowserIds};

pub struct ModalViewModel<F>
where
    F: FormModel + Send + Sync + 'static,
    F::Record: Send + Sync + 'static,
{
    pub editor: RwSignal<ModalEditor<F>>,
    collection: RwSignal<RecordCollection<F::Record>>,
    close_delay_ms: u32,
}

impl<F> Clone for ModalViewModel<F>
where
    F: FormModel + Send + Sync + 'static,
    F::Record: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for ModalViewModel<F>
where
    F: FormModel + Send + Sync + 'static,
    F::Record: Send + Sync + 'static,
{
}

impl<F> ModalViewModel<F>
where
    F: FormModel + Send + Sync + 'static,
    F::Record: Send + Sync + 'static,
{
    pub fn new(collection: RwSignal<RecordCollection<F::Record>>, close_delay_ms: u32) -> Self {
        Self {
            editor: RwSignal::new(ModalEditor::new()),
            collection,
            close_delay_ms,
        }
    }

    pub fn is_open(&self) -> bool {
        self.editor.with(|m| m.is_open())
    }

    pub fn title(&self) -> &'static str {
        self.editor.with(|m| m.title())
    }

    pub fn open_add(&self) {
        self.editor.update(|m| m.open_add());
    }

    /// Pre-fill from the record with `id`; ignored when it no longer exists.
    pub fn open_edit(&self, id: &str) {
        let record = self.collection.with_untracked(|c| c.get(id).cloned());
        match record {
            Some(record) => self.editor.update(|m| m.open_edit(&record)),
            None => log::warn!("{} '{}' not found for editing", F::Record::KIND, id),
        }
    }

    pub fn close(&self) {
        self.editor.update(|m| m.close());
    }

    pub fn form_value(&self, read: impl Fn(&F) -> String + Send + Sync + 'static) -> Signal<String> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|m| read(&m.form)))
    }

    pub fn set_form(&self, write: impl FnOnce(&mut F)) {
        self.editor.update(|m| write(&mut m.form));
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|m| m.errors().get(field).map(str::to_string)))
    }

    pub fn feedback(&self) -> Signal<Option<Feedback>> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|m| m.feedback().cloned()))
    }

    /// Submit against local storage. On success the dialog closes after
    /// the configured delay, unless it was reopened meanwhile.
    pub fn save(&self) -> Option<Submitted> {
        let editor = self.editor;
        let collection = self.collection;
        let result = with_local(|storage| {
            let mut ids = BrowserIds;
            let mut ctx = EditContext {
                today: today(),
                ids: &mut ids,
            };
            let mut result = Err(SubmitError::NotOpen);
            collection.update(|records| {
                editor.update(|modal| result = modal.submit(records, storage, &mut ctx));
            });
            result
        })?;

        match result {
            Ok(done) => {
                if let SaveOutcome::Conflict { expected, found } = done.outcome {
                    log::warn!(
                        "{} saved over revision {} (loaded {})",
                        F::Record::KIND,
                        found,
                        expected
                    );
                }
                let delay = self.close_delay_ms;
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    editor.update(|modal| {
                        if modal.feedback().is_some_and(|f| f.success) {
                            modal.close();
                        }
                    });
                });
                Some(done)
            }
            Err(e) => {
                log::debug!("{} dialog rejected: {}", F::Record::KIND, e);
                None
            }
        }
    }
}
