//! # Form Controller
//!
//! Drives the create/edit state machine over a single [`Draft`]:
//!
//! ```text
//!             start_edit(i)
//!   Creating ──────────────▶ Editing(i)
//!      ▲                        │
//!      └────────────────────────┘
//!        submit() ok, or delete(i)
//! ```
//!
//! A successful submit while `Creating` appends and stays in `Creating`.
//!
//! Field edits only touch the draft. Validation runs on `submit`, and only a
//! clean draft reaches the [`RecordStore`]. After each operation, callers read
//! a fresh [`FormSnapshot`] and render from it.
//!
//! Indices are positions in the list the caller last rendered. They are not
//! stable identifiers: after a delete, callers must re-derive them from a new
//! snapshot.

use crate::error::Result;
use crate::model::{Draft, Field, Record};
use crate::records::RecordStore;
use crate::store::SessionStorage;
use crate::validation::{validate, FieldErrors};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "index", rename_all = "lowercase")]
pub enum EditState {
    #[default]
    Creating,
    Editing(usize),
}

impl EditState {
    pub fn is_editing(self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    /// Label for the form's submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            EditState::Creating => "Submit",
            EditState::Editing(_) => "Update",
        }
    }
}

/// What a `submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are in the snapshot.
    Rejected,
    /// A new record was appended at this position.
    Created(usize),
    /// The record at this position was replaced.
    Updated(usize),
}

/// Immutable view of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub draft: Draft,
    pub errors: FieldErrors,
    pub records: Vec<Record>,
    pub state: EditState,
}

impl FormSnapshot {
    pub fn submit_label(&self) -> &'static str {
        self.state.submit_label()
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }
}

pub struct FormController<S: SessionStorage> {
    records: RecordStore<S>,
    draft: Draft,
    errors: FieldErrors,
    state: EditState,
}

impl<S: SessionStorage> FormController<S> {
    pub fn new(records: RecordStore<S>) -> Self {
        Self {
            records,
            draft: Draft::new(),
            errors: FieldErrors::new(),
            state: EditState::Creating,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn records(&self) -> &[Record] {
        self.records.records()
    }

    pub fn record_store(&self) -> &RecordStore<S> {
        &self.records
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            records: self.records.records().to_vec(),
            state: self.state,
        }
    }

    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Load the record at `index` into the draft and switch to editing it.
    pub fn start_edit(&mut self, index: usize) -> Result<()> {
        let draft = Draft::from(self.records.get(index)?);
        self.draft = draft;
        self.errors.clear();
        self.state = EditState::Editing(index);
        tracing::debug!(index, "editing record");
        Ok(())
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "draft rejected");
            self.errors = errors;
            return Ok(SubmitOutcome::Rejected);
        }

        let record = self.draft.to_record();
        let outcome = match self.state {
            EditState::Editing(index) => {
                self.records.replace_at(index, record)?;
                self.state = EditState::Creating;
                SubmitOutcome::Updated(index)
            }
            EditState::Creating => SubmitOutcome::Created(self.records.append(record)?),
        };

        self.draft = Draft::new();
        self.errors.clear();
        tracing::debug!(?outcome, "draft accepted");
        Ok(outcome)
    }

    /// Remove the record at `index`.
    ///
    /// Deleting the record under edit drops back to `Creating` with an empty
    /// draft. Any other edit target keeps its position as-is.
    pub fn delete(&mut self, index: usize) -> Result<Record> {
        let removed = self.records.remove_at(index)?;
        if self.state == EditState::Editing(index) {
            self.state = EditState::Creating;
            self.draft = Draft::new();
            self.errors.clear();
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegbookError;
    use crate::records::DEFAULT_STORAGE_KEY;
    use crate::store::mem_backend::MemSessionStorage;
    use crate::validation::INVALID_EMAIL;

    fn fill(form: &mut FormController<&MemSessionStorage>, name: &str) {
        form.on_field_change(Field::Name, name);
        form.on_field_change(Field::Email, "a@b.com");
        form.on_field_change(Field::Password, "p");
        form.on_field_change(Field::Gender, "Male");
        form.on_field_change(Field::Address, "addr");
        form.on_field_change(Field::City, "Surat");
    }

    fn controller(storage: &MemSessionStorage) -> FormController<&MemSessionStorage> {
        FormController::new(RecordStore::open(storage, DEFAULT_STORAGE_KEY))
    }

    fn with_records<'a>(
        storage: &'a MemSessionStorage,
        names: &[&str],
    ) -> FormController<&'a MemSessionStorage> {
        let mut form = controller(storage);
        for name in names {
            fill(&mut form, name);
            form.submit().unwrap();
        }
        form
    }

    #[test]
    fn starts_creating_with_blank_draft() {
        let storage = MemSessionStorage::new();
        let snapshot = controller(&storage).snapshot();
        assert_eq!(snapshot.state, EditState::Creating);
        assert!(snapshot.draft.is_blank());
        assert!(snapshot.errors.is_empty());
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.submit_label(), "Submit");
    }

    #[test]
    fn field_change_does_not_validate() {
        let storage = MemSessionStorage::new();
        let mut form = controller(&storage);
        form.on_field_change(Field::Email, "bad");
        assert_eq!(form.draft().email, "bad");
        assert!(form.errors().is_empty());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn valid_submit_appends_and_resets_draft() {
        let storage = MemSessionStorage::new();
        let mut form = controller(&storage);
        fill(&mut form, "A");
        let expected = form.draft().to_record();

        assert_eq!(form.submit().unwrap(), SubmitOutcome::Created(0));

        let snapshot = form.snapshot();
        assert_eq!(snapshot.records, vec![expected]);
        assert!(snapshot.draft.is_blank());
        assert!(snapshot.errors.is_empty());
        assert_eq!(snapshot.state, EditState::Creating);
    }

    #[test]
    fn invalid_submit_keeps_list_and_draft() {
        let storage = MemSessionStorage::new();
        let mut form = controller(&storage);
        fill(&mut form, "");
        form.on_field_change(Field::Email, "bad");

        assert_eq!(form.submit().unwrap(), SubmitOutcome::Rejected);

        let snapshot = form.snapshot();
        assert_eq!(snapshot.errors.get(Field::Name), Some("Name is required"));
        assert_eq!(snapshot.errors.get(Field::Email), Some(INVALID_EMAIL));
        assert_eq!(snapshot.errors.len(), 2);
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.draft.email, "bad");
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn successful_submit_clears_earlier_errors() {
        let storage = MemSessionStorage::new();
        let mut form = controller(&storage);
        form.submit().unwrap();
        assert_eq!(form.errors().len(), 6);

        fill(&mut form, "A");
        form.submit().unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn edit_then_submit_replaces_in_place() {
        let storage = MemSessionStorage::new();
        let mut form = with_records(&storage, &["A"]);

        form.start_edit(0).unwrap();
        assert_eq!(form.state(), EditState::Editing(0));
        assert_eq!(form.draft().name, "A");
        assert_eq!(form.snapshot().submit_label(), "Update");

        form.on_field_change(Field::City, "Mumbai");
        assert_eq!(form.submit().unwrap(), SubmitOutcome::Updated(0));

        let snapshot = form.snapshot();
        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].city, "Mumbai");
        assert_eq!(snapshot.state, EditState::Creating);
        assert!(snapshot.draft.is_blank());
    }

    #[test]
    fn rejected_edit_stays_in_editing() {
        let storage = MemSessionStorage::new();
        let mut form = with_records(&storage, &["A"]);
        form.start_edit(0).unwrap();
        form.on_field_change(Field::Password, "");

        assert_eq!(form.submit().unwrap(), SubmitOutcome::Rejected);
        assert_eq!(form.state(), EditState::Editing(0));
        assert_eq!(form.records()[0].password, "p");
    }

    #[test]
    fn start_edit_out_of_range_changes_nothing() {
        let storage = MemSessionStorage::new();
        let mut form = with_records(&storage, &["A"]);
        form.on_field_change(Field::Name, "half typed");

        let err = form.start_edit(3).unwrap_err();
        assert!(matches!(err, RegbookError::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(form.state(), EditState::Creating);
        assert_eq!(form.draft().name, "half typed");
    }

    #[test]
    fn start_edit_clears_stale_errors() {
        let storage = MemSessionStorage::new();
        let mut form = with_records(&storage, &["A"]);
        form.submit().unwrap();
        assert!(!form.errors().is_empty());

        form.start_edit(0).unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn deleting_the_edited_record_resets_to_creating() {
        let storage = MemSessionStorage::new();
        let mut form = with_records(&storage, &["A"]);
        form.start_edit(0).unwrap();

        let removed = form.delete(0).unwrap();
        assert_eq!(removed.name, "A");

        let snapshot = form.snapshot();
        assert_eq!(snapshot.state, EditState::Creating);
        assert!(snapshot.draft.is_blank());
        assert!(snapshot.records.is_empty());
    }

    #[test]
    fn deleting_another_record_keeps_edit_position() {
        let storage = MemSessionStorage::new();
        let mut form = with_records(&storage, &["A", "B", "C"]);
        form.start_edit(2).unwrap();

        form.delete(0).unwrap();
        assert_eq!(form.state(), EditState::Editing(2));
        assert_eq!(form.draft().name, "C");
        assert_eq!(form.records().len(), 2);
    }

    #[test]
    fn deleting_while_creating_keeps_draft() {
        let storage = MemSessionStorage::new();
        let mut form = with_records(&storage, &["A", "B"]);
        form.on_field_change(Field::Name, "pending");

        form.delete(1).unwrap();
        assert_eq!(form.draft().name, "pending");
        assert_eq!(form.records().len(), 1);
    }

    #[test]
    fn delete_out_of_range_is_an_error() {
        let storage = MemSessionStorage::new();
        let mut form = controller(&storage);
        assert!(matches!(
            form.delete(0),
            Err(RegbookError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn failed_persist_keeps_draft_and_state() {
        let storage = MemSessionStorage::new();
        let mut form = with_records(&storage, &["A"]);
        form.start_edit(0).unwrap();
        form.on_field_change(Field::City, "Mumbai");

        storage.set_simulate_write_error(true);
        assert!(matches!(form.submit(), Err(RegbookError::Store(_))));
        assert_eq!(form.state(), EditState::Editing(0));
        assert_eq!(form.draft().city, "Mumbai");
        assert_eq!(form.records()[0].city, "Surat");
    }

    #[test]
    fn records_survive_a_reload() {
        let storage = MemSessionStorage::new();
        let first = with_records(&storage, &["A", "B"]).snapshot();

        let reloaded = controller(&storage).snapshot();
        assert_eq!(reloaded.records, first.records);
        assert_eq!(reloaded.state, EditState::Creating);
    }

    #[test]
    fn snapshot_serializes_mode_and_index() {
        let storage = MemSessionStorage::new();
        let mut form = with_records(&storage, &["A"]);
        form.start_edit(0).unwrap();
        let json = serde_json::to_value(form.snapshot()).unwrap();
        assert_eq!(json["state"]["mode"], "editing");
        assert_eq!(json["state"]["index"], 0);
        assert_eq!(json["records"][0]["name"], "A");
    }
}
