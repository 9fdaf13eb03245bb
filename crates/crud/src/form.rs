//! Entity form state machine
//!
//! A form collects one record's fields, validates them against the entity
//! schema, and hands a ready-to-send [`Submission`] to its owner. It never
//! performs the network call itself: the list controller issues the request
//! and reports back through [`FormState::finish`].
//!
//! ```text
//! idle ──submit──▶ validating ──invalid──▶ idle (with errors)
//!                       │
//!                     valid
//!                       ▼
//!                  submitting ──ok──▶ reset (panel closes)
//!                       │
//!                     failed──▶ idle (values kept)
//! ```

use aricon_client::Operation;
use aricon_core::{AdminError, AdminResult, Identifiable};
use aricon_schema::{EntityKind, Endpoints, FieldErrors, FieldValue, Record, Schema};
use serde_json::Value;
use uuid::Uuid;

// ============================================================================
// Requests
// ============================================================================

/// A request the controller should send
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub operation: Operation,
    pub path: String,
    pub body: Option<Value>,
}

impl Request {
    pub fn read(path: impl Into<String>) -> Self {
        Self {
            operation: Operation::Read,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            operation: Operation::Delete,
            path: path.into(),
            body: None,
        }
    }
}

/// A validated submission waiting to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Identifies this attempt; stale completions are ignored
    pub token: Uuid,
    pub request: Request,
}

/// Why a submit did not produce a request
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    /// Another submission from this form is outstanding
    InFlight,
    /// Validation failed; messages are on the form
    Invalid(FieldErrors),
    /// No form is open
    Closed,
}

// ============================================================================
// Form state
// ============================================================================

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting {
        token: Uuid,
    },
}

/// Create or edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// One open add/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    kind: EntityKind,
    schema: Schema,
    /// Row as fetched, for edits
    original: Option<Record>,
    draft: Record,
    errors: FieldErrors,
    phase: FormPhase,
}

impl FormState {
    /// Blank form for a new record
    pub fn create(kind: EntityKind) -> Self {
        let schema = kind.schema();
        Self {
            kind,
            draft: schema.blank_record(),
            schema,
            original: None,
            errors: FieldErrors::new(),
            phase: FormPhase::Idle,
        }
    }

    /// Form pre-filled from a stored record
    pub fn edit(kind: EntityKind, record: &Record) -> AdminResult<Self> {
        if !record.is_persisted() {
            return Err(AdminError::MissingIdentifier(kind.singular().to_string()));
        }

        let schema = kind.schema();
        let mut draft = schema.blank_record();
        draft.id = record.id.clone();
        for field in &schema.fields {
            if let Some(value) = record.get(&field.name) {
                draft.set(field.name.clone(), value.clone());
            }
        }

        Ok(Self {
            kind,
            schema,
            original: Some(record.clone()),
            draft,
            errors: FieldErrors::new(),
            phase: FormPhase::Idle,
        })
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn draft(&self) -> &Record {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Edit when the draft carries an identifier
    pub fn mode(&self) -> FormMode {
        if self.draft.is_persisted() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    /// Update one field and drop its stale messages
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.draft.set(name, value);
        self.errors.clear_field(name);
    }

    /// Validate and, if valid, enter the submitting phase
    pub fn begin_submit(&mut self, endpoints: &Endpoints) -> Result<Submission, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }

        let valid = match self.schema.validate(&self.draft) {
            Ok(valid) => valid,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(SubmitBlocked::Invalid(errors));
            }
        };
        self.errors = FieldErrors::new();

        let request = match (valid.id(), &self.original) {
            (Some(id), Some(original)) => Request {
                operation: Operation::Update,
                path: endpoints.item(id),
                body: Some(self.kind.encode_update(original, &valid)),
            },
            _ => Request {
                operation: Operation::Create,
                path: endpoints.mutation.clone(),
                body: Some(self.kind.encode_create(&valid)),
            },
        };

        let token = Uuid::new_v4();
        self.phase = FormPhase::Submitting { token };
        Ok(Submission { token, request })
    }

    /// Settle a submission; returns false for a stale token
    ///
    /// Success resets the form to blank. Failure keeps the entered values.
    pub fn finish(&mut self, token: Uuid, success: bool) -> bool {
        if self.phase != (FormPhase::Submitting { token }) {
            return false;
        }

        self.phase = FormPhase::Idle;
        if success {
            self.reset();
        }
        true
    }

    /// Back to blank create values
    pub fn reset(&mut self) {
        self.draft = self.schema.blank_record();
        self.original = None;
        self.errors = FieldErrors::new();
    }

    pub fn title(&self) -> String {
        match self.mode() {
            FormMode::Create => format!("Add {}", self.kind.singular()),
            FormMode::Edit => format!("Edit {}", self.kind.singular()),
        }
    }

    /// Submit button text for the current mode and phase
    pub fn submit_label(&self) -> &'static str {
        match (self.mode(), self.is_submitting()) {
            (FormMode::Create, false) => "Create",
            (FormMode::Create, true) => "Creating...",
            (FormMode::Edit, false) => "Update",
            (FormMode::Edit, true) => "Updating...",
        }
    }

    /// Submit and cancel are both disabled while a request is outstanding
    pub fn controls_disabled(&self) -> bool {
        self.is_submitting()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use aricon_core::{AppConfig, RecordId};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn endpoints(kind: EntityKind) -> Endpoints {
        kind.endpoints(&AppConfig::default())
    }

    fn filled_team() -> FormState {
        let mut form = FormState::create(EntityKind::Team);
        form.set_field("name", "Asha");
        form.set_field("email", "asha@example.com");
        form.set_field("mobile", "9876543210");
        form
    }

    fn stored_team() -> Record {
        Record::new()
            .with_id("t1")
            .with("name", "Asha")
            .with("email", "asha@example.com")
            .with("mobile", "9876543210")
    }

    #[test]
    fn test_create_form_starts_blank() {
        let form = FormState::create(EntityKind::Hotel);
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.title(), "Add Hotel");
        assert_eq!(form.submit_label(), "Create");
        assert!(form.draft().id.is_none());
        assert_eq!(form.draft().text("hotelName"), "");
    }

    #[test]
    fn test_edit_requires_identifier() {
        let err = FormState::edit(EntityKind::Team, &Record::new().with("name", "x")).unwrap_err();
        assert!(matches!(err, AdminError::MissingIdentifier(_)));
    }

    #[test]
    fn test_edit_prefills_values_and_id() {
        let form = FormState::edit(EntityKind::Team, &stored_team()).unwrap();
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.title(), "Edit Team member");
        assert_eq!(form.submit_label(), "Update");
        assert_eq!(form.draft().id, Some(RecordId::from("t1")));
        assert_eq!(form.draft().text("mobile"), "9876543210");
    }

    #[test]
    fn test_edit_of_decoded_row_prefills_plain_dates() {
        let row = EntityKind::Arrival
            .decode(&json!({
                "_id": "a1",
                "facultyName": { "_id": "f1", "facultyName": "Dr. Rao" },
                "arrivalDate": "2026-10-19T00:00:00.000Z",
                "arrivalTime": "14:05",
                "arrivalFlightDetail": "AI 202"
            }))
            .unwrap();

        let form = FormState::edit(EntityKind::Arrival, &row).unwrap();
        assert_eq!(form.draft().text("arrivalDate"), "2026-10-19");
        assert_eq!(form.draft().text("facultyName"), "f1");
    }

    #[test]
    fn test_invalid_submit_stays_idle_with_errors() {
        let mut form = FormState::create(EntityKind::Team);
        form.set_field("email", "nope");

        let blocked = form.begin_submit(&endpoints(EntityKind::Team)).unwrap_err();
        assert!(matches!(blocked, SubmitBlocked::Invalid(_)));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.errors().first("name"), Some("Name cannot be empty."));
        assert_eq!(
            form.errors().first("email"),
            Some("Please enter a valid email address.")
        );

        form.set_field("email", "asha@example.com");
        assert!(!form.errors().has("email"));
        assert!(form.errors().has("name"));
    }

    #[test]
    fn test_create_submission_has_no_identifier() {
        let mut form = filled_team();
        let submission = form.begin_submit(&endpoints(EntityKind::Team)).unwrap();

        assert_eq!(submission.request.operation, Operation::Create);
        assert_eq!(submission.request.path, "/api/admin/teams");
        assert_eq!(
            submission.request.body,
            Some(json!({ "name": "Asha", "email": "asha@example.com", "mobile": "9876543210" }))
        );
        assert!(form.is_submitting());
        assert!(form.controls_disabled());
        assert_eq!(form.submit_label(), "Creating...");
    }

    #[test]
    fn test_edit_submission_targets_identifier() {
        let mut form = FormState::edit(EntityKind::Team, &stored_team()).unwrap();
        form.set_field("name", "Asha Rao");
        let submission = form.begin_submit(&endpoints(EntityKind::Team)).unwrap();

        assert_eq!(submission.request.operation, Operation::Update);
        assert_eq!(submission.request.path, "/api/admin/teams/t1");
        assert_eq!(form.submit_label(), "Updating...");
    }

    #[test]
    fn test_second_submit_while_in_flight_is_blocked() {
        let mut form = filled_team();
        form.begin_submit(&endpoints(EntityKind::Team)).unwrap();
        assert_eq!(
            form.begin_submit(&endpoints(EntityKind::Team)),
            Err(SubmitBlocked::InFlight)
        );
    }

    #[test]
    fn test_finish_success_resets() {
        let mut form = filled_team();
        let submission = form.begin_submit(&endpoints(EntityKind::Team)).unwrap();

        assert!(!form.finish(Uuid::new_v4(), true));
        assert!(form.is_submitting());

        assert!(form.finish(submission.token, true));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.draft().text("name"), "");
    }

    #[test]
    fn test_finish_failure_keeps_values() {
        let mut form = filled_team();
        let submission = form.begin_submit(&endpoints(EntityKind::Team)).unwrap();

        assert!(form.finish(submission.token, false));
        assert!(!form.is_submitting());
        assert_eq!(form.draft().text("name"), "Asha");
    }

    #[test]
    fn test_payment_gateway_update_body() {
        let stored = EntityKind::PaymentGateway
            .decode(&json!({ "_id": "p1", "eventId": "e1", "items": ["razorpay-mmid2"] }))
            .unwrap();
        let mut form = FormState::edit(EntityKind::PaymentGateway, &stored).unwrap();
        assert_eq!(form.draft().text("mmid"), "mmid2");

        form.set_field("eventId", "e2");
        let submission = form
            .begin_submit(&endpoints(EntityKind::PaymentGateway))
            .unwrap();
        assert_eq!(submission.request.path, "/api/admin/event-assign/p1");
        assert_eq!(
            submission.request.body,
            Some(json!({ "oldEventId": "e1", "newEventId": "e2", "items": ["razorpay-mmid2"] }))
        );
    }
}
