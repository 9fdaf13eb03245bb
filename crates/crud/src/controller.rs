//! List controller: drives a [`ListState`] around backend calls
//!
//! The controller owns persistence for its entity. Forms hand it validated
//! submissions; it sends them, notifies, and re-fetches. State borrows are
//! never held across an `.await` or while a notification is delivered, so a
//! UI signal can back the store.

use crate::form::SubmitBlocked;
use crate::list::ListState;
use crate::notify::{Notifier, Toast};
use aricon_client::{ClientError, EntityBackend, Operation};
use aricon_core::{AdminResult, RecordId};
use aricon_schema::FieldValue;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info};

// ============================================================================
// State store
// ============================================================================

/// Shared, interior-mutable home of a [`ListState`]
pub trait StateStore {
    fn with<R>(&self, f: impl FnOnce(&ListState) -> R) -> R;
    fn with_mut<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R;
}

impl StateStore for Rc<RefCell<ListState>> {
    fn with<R>(&self, f: impl FnOnce(&ListState) -> R) -> R {
        f(&*self.borrow())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of a submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    Blocked(SubmitBlocked),
    Failed(ClientError),
}

/// Result of confirming a delete
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    /// Nothing was pending, or a delete is already outstanding
    Skipped,
    Failed(ClientError),
}

// ============================================================================
// Controller
// ============================================================================

/// Generic CRUD controller for one entity screen
pub struct ListController<S, B, N> {
    store: S,
    backend: B,
    notifier: N,
}

impl<S, B, N> ListController<S, B, N>
where
    S: StateStore,
    B: EntityBackend,
    N: Notifier,
{
    pub fn new(store: S, backend: B, notifier: N) -> Self {
        Self {
            store,
            backend,
            notifier,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Initial fetch of the collection and its lookup lists
    pub async fn mount(&self) {
        self.refresh().await;
        self.load_lookups().await;
    }

    /// Re-request the collection
    pub async fn refresh(&self) {
        let request = self.store.with_mut(ListState::begin_load);
        let kind = self.store.with(ListState::kind);
        info!("Fetching {} from {}", kind, request.path);

        let result = self.backend.fetch(&request.path).await;
        match &result {
            Ok(_) => debug!("Fetched {}", kind),
            Err(e) => error!("Failed to fetch {}: {}", kind, e),
        }
        self.store.with_mut(|state| state.finish_load(result));
    }

    /// Best-effort fetch of every lookup list
    pub async fn load_lookups(&self) {
        let requests = self.store.with(ListState::lookup_requests);
        for (source, request) in requests {
            let result = self.backend.fetch(&request.path).await;
            self.store
                .with_mut(|state| state.finish_lookup(source, result));
        }
    }

    pub fn open_create(&self) {
        self.store.with_mut(ListState::open_create);
    }

    pub fn open_edit(&self, id: &RecordId) -> AdminResult<()> {
        self.store.with_mut(|state| state.open_edit(id))
    }

    pub fn close_panel(&self) -> bool {
        self.store.with_mut(ListState::close_panel)
    }

    pub fn set_field(&self, name: &str, value: impl Into<FieldValue>) {
        self.store.with_mut(|state| state.set_field(name, value));
    }

    /// Validate and persist the open form
    ///
    /// Invalid input never reaches the backend. On failure the error toast
    /// is delivered before the form leaves its submitting phase.
    pub async fn submit(&self) -> SubmitOutcome {
        let submission = match self.store.with_mut(ListState::begin_submit) {
            Ok(submission) => submission,
            Err(blocked) => {
                debug!("Submit blocked: {:?}", blocked);
                return SubmitOutcome::Blocked(blocked);
            }
        };

        let kind = self.store.with(ListState::kind);
        let request = &submission.request;
        info!("{} {} at {}", request.operation, kind.singular(), request.path);

        let result = self
            .backend
            .send(request.operation, &request.path, request.body.clone())
            .await;

        match result {
            Ok(_) => {
                self.store
                    .with_mut(|state| state.settle_submit(&submission, true));
                let verb = match request.operation {
                    Operation::Update => "updated",
                    _ => "created",
                };
                self.notifier
                    .notify(Toast::success(format!("{} {}", kind.singular(), verb)).stamped());
                self.refresh().await;
                SubmitOutcome::Saved
            }
            Err(e) => {
                error!("Failed to save {}: {}", kind.singular(), e);
                self.notifier.notify(Toast::error(e.user_message()));
                self.store
                    .with_mut(|state| state.settle_submit(&submission, false));
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Ask for confirmation; no request is made
    pub fn request_delete(&self, id: &RecordId) -> AdminResult<()> {
        self.store.with_mut(|state| state.request_delete(id))
    }

    /// Dismiss the confirmation; no request is made
    pub fn cancel_delete(&self) {
        self.store.with_mut(ListState::cancel_delete);
    }

    /// Delete the confirmed row, then re-fetch
    pub async fn confirm_delete(&self) -> DeleteOutcome {
        let Some(request) = self.store.with_mut(ListState::begin_delete) else {
            return DeleteOutcome::Skipped;
        };
        let kind = self.store.with(ListState::kind);
        info!("Deleting {} at {}", kind.singular(), request.path);

        let result = self.backend.delete(&request.path).await;
        let deleted = result.is_ok();
        self.store.with_mut(|state| state.finish_delete(deleted));

        match result {
            Ok(_) => {
                self.notifier.notify(
                    Toast::warning(format!("{} deleted successfully!", kind.singular())).stamped(),
                );
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("Failed to delete {}: {}", kind.singular(), e);
                self.notifier.notify(Toast::error(e.user_message()));
                DeleteOutcome::Failed(e)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
