//! List state for one entity screen
//!
//! [`ListState`] is the authoritative on-screen view of a collection. It is
//! plain data with synchronous transitions; the controller drives it around
//! the asynchronous calls. Keeping it free of I/O lets the UI hold it in a
//! signal and lets tests inspect it between steps.

use crate::form::{FormState, Request, SubmitBlocked, Submission};
use crate::table::{self, RowSelection, SortState, TableColumn};
use aricon_client::ClientError;
use aricon_core::{AdminError, AdminResult, AppConfig, RecordId};
use aricon_schema::{
    EntityKind, Endpoints, FieldValue, LookupList, LookupSource, Lookups, Record, Schema,
    lookup_path,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Collection load status
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// First fetch outstanding; the table shows a skeleton
    Loading,
    Loaded(Vec<Record>),
    /// Fetch failed; carries the notice text
    Failed(String),
}

/// A delete waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: RecordId,
    /// How the record is named in the confirmation
    pub name: String,
}

/// State of one entity screen
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    kind: EntityKind,
    schema: Schema,
    endpoints: Endpoints,
    lookup_paths: Vec<(LookupSource, String)>,
    collection: LoadState,
    refreshing: bool,
    panel: Option<FormState>,
    pending_delete: Option<PendingDelete>,
    deleting: bool,
    lookups: Lookups,
    sort: SortState,
    selection: RowSelection,
    filter: String,
}

impl ListState {
    pub fn new(kind: EntityKind, config: &AppConfig) -> Self {
        Self {
            kind,
            schema: kind.schema(),
            endpoints: kind.endpoints(config),
            lookup_paths: kind
                .lookups()
                .into_iter()
                .map(|source| (source, lookup_path(source, config)))
                .collect(),
            collection: LoadState::Loading,
            refreshing: false,
            panel: None,
            pending_delete: None,
            deleting: false,
            lookups: Lookups::new(),
            sort: SortState::new(),
            selection: RowSelection::new(),
            filter: String::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn collection(&self) -> &LoadState {
        &self.collection
    }

    /// Loaded rows in fetch order; empty while loading or after a failure
    pub fn rows(&self) -> &[Record] {
        match &self.collection {
            LoadState::Loaded(rows) => rows,
            _ => &[],
        }
    }

    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.rows().iter().find(|r| r.id.as_ref() == Some(id))
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn panel(&self) -> Option<&FormState> {
        self.panel.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn lookups(&self) -> &Lookups {
        &self.lookups
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether a form submission is outstanding
    pub fn is_submitting(&self) -> bool {
        self.panel.as_ref().is_some_and(FormState::is_submitting)
    }

    // ========================================================================
    // Collection
    // ========================================================================

    /// Start a collection fetch
    ///
    /// Rows already on screen stay visible until the new ones arrive.
    pub fn begin_load(&mut self) -> Request {
        match self.collection {
            LoadState::Loaded(_) => self.refreshing = true,
            _ => self.collection = LoadState::Loading,
        }
        Request::read(self.endpoints.list.clone())
    }

    /// Apply a fetch result; the last one to complete wins
    pub fn finish_load(&mut self, result: Result<Value, ClientError>) {
        self.refreshing = false;
        self.selection.clear();

        self.collection = match result {
            Ok(payload) => match self.kind.decode_collection(&payload) {
                Ok(rows) => LoadState::Loaded(rows),
                Err(e) => LoadState::Failed(e.to_string()),
            },
            Err(e) => LoadState::Failed(e.user_message()),
        };
    }

    /// Secondary collections to fetch for dropdowns and labels
    pub fn lookup_requests(&self) -> Vec<(LookupSource, Request)> {
        self.lookup_paths
            .iter()
            .map(|(source, path)| (*source, Request::read(path.clone())))
            .collect()
    }

    /// Apply a lookup result; failures degrade to an empty list
    pub fn finish_lookup(&mut self, source: LookupSource, result: Result<Value, ClientError>) {
        let parsed = match result {
            Ok(payload) => LookupList::from_json(source, &payload).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        let list = parsed.unwrap_or_else(|message| {
            warn!("Failed to load {} list: {}", source.noun(), message);
            LookupList::empty(source)
        });
        self.lookups.insert(list);
    }

    // ========================================================================
    // Form panel
    // ========================================================================

    /// Open the panel with a blank form
    pub fn open_create(&mut self) {
        if !self.is_submitting() {
            self.panel = Some(FormState::create(self.kind));
        }
    }

    /// Open the panel pre-filled from a loaded row
    pub fn open_edit(&mut self, id: &RecordId) -> AdminResult<()> {
        if self.is_submitting() {
            return Ok(());
        }
        let record = self
            .find(id)
            .ok_or_else(|| AdminError::internal(format!("{} {} is not loaded", self.kind, id)))?;
        self.panel = Some(FormState::edit(self.kind, record)?);
        Ok(())
    }

    /// Close the panel; refused while a submission is outstanding
    pub fn close_panel(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.panel = None;
        true
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        if let Some(form) = self.panel.as_mut()
            && !form.is_submitting()
        {
            form.set_field(name, value);
        }
    }

    pub fn begin_submit(&mut self) -> Result<Submission, SubmitBlocked> {
        let endpoints = &self.endpoints;
        self.panel
            .as_mut()
            .ok_or(SubmitBlocked::Closed)
            .and_then(|form| form.begin_submit(endpoints))
    }

    /// Settle a submission
    ///
    /// Success closes the panel; failure leaves it open with its values.
    /// Returns false when the token no longer matches the open form.
    pub fn settle_submit(&mut self, submission: &Submission, success: bool) -> bool {
        let Some(form) = self.panel.as_mut() else {
            return false;
        };
        if !form.finish(submission.token, success) {
            return false;
        }
        if success {
            self.panel = None;
        }
        true
    }

    // ========================================================================
    // Delete confirmation
    // ========================================================================

    /// Ask for confirmation before deleting a row
    pub fn request_delete(&mut self, id: &RecordId) -> AdminResult<()> {
        if self.deleting {
            return Ok(());
        }
        let record = self
            .find(id)
            .ok_or_else(|| AdminError::MissingIdentifier(self.kind.singular().to_string()))?;
        self.pending_delete = Some(PendingDelete {
            id: id.clone(),
            name: table::record_label(&self.schema, record, &self.lookups),
        });
        Ok(())
    }

    /// Dismiss the confirmation
    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    /// The delete request for the confirmed row
    pub fn begin_delete(&mut self) -> Option<Request> {
        if self.deleting {
            return None;
        }
        let pending = self.pending_delete.as_ref()?;
        self.deleting = true;
        Some(Request::delete(self.endpoints.item(&pending.id)))
    }

    /// Settle the delete; a successful one also closes an edit of that row
    pub fn finish_delete(&mut self, deleted: bool) {
        self.deleting = false;
        let Some(pending) = self.pending_delete.take() else {
            return;
        };

        let editing_deleted = self
            .panel
            .as_ref()
            .is_some_and(|form| form.draft().id.as_ref() == Some(&pending.id));
        if deleted && editing_deleted && self.close_panel() {
            debug!("Closed the form of deleted {} {}", self.kind, pending.id);
        }
    }

    // ========================================================================
    // Table
    // ========================================================================

    pub fn columns(&self) -> Vec<TableColumn> {
        table::columns_for(&self.schema)
    }

    /// Row indices in display order
    pub fn visible(&self) -> Vec<usize> {
        table::visible_rows(
            &self.schema,
            self.rows(),
            &self.lookups,
            &self.filter,
            &self.sort,
        )
    }

    pub fn toggle_sort(&mut self, column: &str) {
        let sortable = self
            .schema
            .get_field(column)
            .is_some_and(|f| f.sortable && f.in_table);
        if sortable {
            self.sort.toggle(column);
        }
    }

    pub fn toggle_row(&mut self, id: &RecordId) {
        self.selection.toggle(id);
    }

    /// Toggle every visible row
    pub fn toggle_all_rows(&mut self) {
        let rows = self.rows();
        let ids: Vec<RecordId> = self
            .visible()
            .into_iter()
            .filter_map(|i| rows[i].id.clone())
            .collect();
        self.selection.toggle_all(&ids);
    }

    pub fn all_rows_selected(&self) -> bool {
        let rows = self.rows();
        let ids: Vec<&RecordId> = self
            .visible()
            .into_iter()
            .filter_map(|i| rows[i].id.as_ref())
            .collect();
        self.selection.all_selected(ids)
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn loaded_hotels() -> ListState {
        let mut state = ListState::new(EntityKind::Hotel, &AppConfig::default());
        state.begin_load();
        state.finish_load(Ok(json!([
            { "_id": "h1", "facultyName": "f1", "hotelName": "Taj",
              "checkInDate": "2026-10-19", "checkOutDate": "2026-10-21" },
            { "_id": "h2", "facultyName": "f1", "hotelName": "Leela",
              "checkInDate": "2026-10-18", "checkOutDate": "2026-10-20" }
        ])));
        state
    }

    #[test]
    fn test_initial_load_shows_loading_then_rows() {
        let mut state = ListState::new(EntityKind::Hotel, &AppConfig::default());
        let request = state.begin_load();
        assert_eq!(request, Request::read("/api/hotel-details"));
        assert_eq!(state.collection(), &LoadState::Loading);

        state.finish_load(Ok(json!([])));
        assert_eq!(state.collection(), &LoadState::Loaded(Vec::new()));
    }

    #[test]
    fn test_refresh_keeps_rows_visible() {
        let mut state = loaded_hotels();
        state.begin_load();
        assert!(state.is_refreshing());
        assert_eq!(state.rows().len(), 2);
    }

    #[test]
    fn test_failed_load_carries_message() {
        let mut state = ListState::new(EntityKind::Team, &AppConfig::default());
        state.begin_load();
        state.finish_load(Err(ClientError::api(500, "Database unavailable")));
        assert_eq!(
            state.collection(),
            &LoadState::Failed("Database unavailable".to_string())
        );
        assert!(state.rows().is_empty());
    }

    #[test]
    fn test_selection_cleared_on_reload() {
        let mut state = loaded_hotels();
        state.toggle_all_rows();
        assert!(state.all_rows_selected());

        state.begin_load();
        state.finish_load(Ok(json!([])));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_lookup_failure_degrades_to_empty() {
        let mut state = ListState::new(EntityKind::Hotel, &AppConfig::default());
        let requests = state.lookup_requests();
        assert_eq!(
            requests,
            vec![(LookupSource::Faculty, Request::read("/api/faculty"))]
        );

        state.finish_lookup(LookupSource::Faculty, Err(ClientError::Timeout(30)));
        let list = state.lookups().get(LookupSource::Faculty).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_open_edit_prefills_from_row() {
        let mut state = loaded_hotels();
        state.open_edit(&RecordId::from("h2")).unwrap();
        let form = state.panel().unwrap();
        assert_eq!(form.draft().text("hotelName"), "Leela");
        assert_eq!(form.title(), "Edit Hotel");

        assert!(state.open_edit(&RecordId::from("missing")).is_err());
    }

    #[test]
    fn test_panel_cannot_close_while_submitting() {
        let mut state = loaded_hotels();
        state.open_edit(&RecordId::from("h1")).unwrap();
        let submission = state.begin_submit().unwrap();

        assert!(!state.close_panel());
        assert!(state.panel().is_some());

        assert!(state.settle_submit(&submission, false));
        assert!(state.panel().is_some());
        assert!(state.close_panel());
        assert!(state.panel().is_none());
    }

    #[test]
    fn test_submit_without_panel_is_blocked() {
        let mut state = loaded_hotels();
        assert_eq!(state.begin_submit(), Err(SubmitBlocked::Closed));
    }

    #[test]
    fn test_delete_confirmation_names_record() {
        let mut state = loaded_hotels();
        state.request_delete(&RecordId::from("h1")).unwrap();
        assert_eq!(
            state.pending_delete(),
            Some(&PendingDelete {
                id: RecordId::from("h1"),
                name: "f1".to_string(),
            })
        );

        state.cancel_delete();
        assert!(state.pending_delete().is_none());
        assert_eq!(state.begin_delete(), None);
    }

    #[test]
    fn test_delete_request_targets_item() {
        let mut state = loaded_hotels();
        state.request_delete(&RecordId::from("h2")).unwrap();
        let request = state.begin_delete().unwrap();
        assert_eq!(request, Request::delete("/api/hotel-details/h2"));
        assert!(state.is_deleting());
        assert_eq!(state.begin_delete(), None);

        state.finish_delete(true);
        assert!(!state.is_deleting());
        assert!(state.pending_delete().is_none());
    }

    #[test]
    fn test_deleting_the_edited_row_closes_its_form() {
        let mut state = loaded_hotels();
        state.open_edit(&RecordId::from("h2")).unwrap();
        state.request_delete(&RecordId::from("h1")).unwrap();
        state.begin_delete().unwrap();
        state.finish_delete(true);
        assert!(state.panel().is_some());

        state.request_delete(&RecordId::from("h2")).unwrap();
        state.begin_delete().unwrap();
        state.finish_delete(false);
        assert!(state.panel().is_some());

        state.request_delete(&RecordId::from("h2")).unwrap();
        state.begin_delete().unwrap();
        state.finish_delete(true);
        assert!(state.panel().is_none());
    }

    #[test]
    fn test_toggle_sort_ignores_unknown_columns() {
        let mut state = loaded_hotels();
        state.toggle_sort("nope");
        assert!(!state.sort().is_sorted());

        state.toggle_sort("hotelName");
        let order = state.visible();
        assert_eq!(state.rows()[order[0]].text("hotelName"), "Leela");
    }
}
