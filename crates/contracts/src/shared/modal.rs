//! Add/edit dialog state shared by the supplier, stock and user editors.
//!
//! ```text
//! Closed --open_add--> Add --submit ok--> (feedback shown) --close--> Closed
//! Closed --open_edit-> Edit{id} ...
//! ```
//! Validation failure keeps the dialog open. Closing after a successful
//! submit is left to the caller, which waits a fixed delay first.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::common::{Record, RecordCollection, SaveOutcome};
use crate::shared::id::IdSource;
use crate::shared::storage::KeyValueStorage;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Closed,
    Add,
    Edit {
        id: String,
    },
}

/// Environment for turning a form into a record.
pub struct EditContext<'a> {
    pub today: NaiveDate,
    pub ids: &'a mut dyn IdSource,
}

/// Feedback line shown inside the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub success: bool,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), success: true }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), success: false }
    }
}

/// Fixed texts of one dialog kind.
#[derive(Debug, Clone, Copy)]
pub struct ModalTexts {
    pub add_title: &'static str,
    pub edit_title: &'static str,
    pub added: &'static str,
    pub updated: &'static str,
    pub not_found: &'static str,
    /// Feedback when validation fails and the form set no banner itself.
    pub invalid: &'static str,
}

/// Form state bound to a record kind.
pub trait FormModel: Clone + Default {
    type Record: Record;

    fn texts() -> &'static ModalTexts;

    fn from_record(record: &Self::Record) -> Self;

    fn validate(&self) -> Result<(), FieldErrors>;

    /// New record for Add mode. `None` for kinds that are edit-only.
    fn create(&self, ctx: &mut EditContext<'_>) -> Option<Self::Record>;

    /// Merge validated form values into an existing record.
    fn apply(&self, record: &mut Self::Record, ctx: &mut EditContext<'_>);
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("dialog is not open")]
    NotOpen,
    #[error("validation failed: {0}")]
    Invalid(FieldErrors),
    #[error("record '{id}' not found")]
    NotFound { id: String },
    #[error("this dialog cannot add records")]
    AddUnsupported,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub id: String,
    pub created: bool,
    pub outcome: SaveOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct ModalEditor<F: FormModel> {
    mode: ModalMode,
    pub form: F,
    errors: FieldErrors,
    feedback: Option<Feedback>,
}

impl<F: FormModel> ModalEditor<F> {
    pub fn new() -> Self {
        Self {
            mode: ModalMode::Closed,
            form: F::default(),
            errors: FieldErrors::new(),
            feedback: None,
        }
    }

    pub fn mode(&self) -> &ModalMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != ModalMode::Closed
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, ModalMode::Edit { .. })
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            F::texts().edit_title
        } else {
            F::texts().add_title
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    /// Blank form, no identifier bound.
    pub fn open_add(&mut self) {
        self.mode = ModalMode::Add;
        self.form = F::default();
        self.reset_messages();
    }

    /// Form pre-filled from `record`, identifier bound.
    pub fn open_edit(&mut self, record: &F::Record) {
        self.mode = ModalMode::Edit {
            id: record.record_id().to_string(),
        };
        self.form = F::from_record(record);
        self.reset_messages();
    }

    pub fn close(&mut self) {
        self.mode = ModalMode::Closed;
    }

    fn reset_messages(&mut self) {
        self.errors = FieldErrors::new();
        self.feedback = None;
    }

    /// Validate, then insert (Add) or merge (Edit) into `collection` and
    /// persist it. The dialog stays open either way.
    pub fn submit(
        &mut self,
        collection: &mut RecordCollection<F::Record>,
        storage: &dyn KeyValueStorage,
        ctx: &mut EditContext<'_>,
    ) -> Result<Submitted, SubmitError> {
        let texts = F::texts();
        self.errors = FieldErrors::new();

        if let Err(errors) = self.form.validate() {
            let banner = errors.banner().unwrap_or(texts.invalid).to_string();
            self.feedback = Some(Feedback::error(banner));
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }

        let (id, created) = match self.mode.clone() {
            ModalMode::Closed => return Err(SubmitError::NotOpen),
            ModalMode::Add => {
                let record = self.form.create(ctx).ok_or(SubmitError::AddUnsupported)?;
                let id = record.record_id().to_string();
                collection.insert(record);
                self.feedback = Some(Feedback::success(texts.added));
                (id, true)
            }
            ModalMode::Edit { id } => {
                let form = self.form.clone();
                if collection.merge(&id, |record| form.apply(record, ctx)).is_err() {
                    self.feedback = Some(Feedback::error(texts.not_found));
                    return Err(SubmitError::NotFound { id });
                }
                self.feedback = Some(Feedback::success(texts.updated));
                (id, false)
            }
        };

        let outcome = collection.persist(storage);
        log::info!(
            "{} {} '{}'",
            if created { "Added" } else { "Updated" },
            F::Record::KIND,
            id
        );
        Ok(Submitted { id, created, outcome })
    }
}
