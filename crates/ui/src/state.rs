//! Application State Management for the ARICON admin panel
//!
//! Global state lives in a Dioxus 0.7 `GlobalSignal`: the signed-in session,
//! shell UI state, and the toast stack. Per-screen collection state is held
//! by each entity page in its own signal, reached by the CRUD controller
//! through [`SignalStore`].

use aricon_client::{ApiClient, Session};
use aricon_crud::{ListState, Notifier, StateStore, Toast};
use aricon_schema::EntityKind;
use dioxus::prelude::*;
use uuid::Uuid;

// ============================================================================
// UI State
// ============================================================================

/// Shell UI state (navigation, sidebar)
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Whether the sidebar is collapsed
    pub sidebar_collapsed: bool,
    /// Entity screen currently shown
    pub active_entity: EntityKind,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            active_entity: EntityKind::Faculty,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an entity screen
    pub fn navigate(&mut self, entity: EntityKind) {
        self.active_entity = entity;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

// ============================================================================
// App State
// ============================================================================

/// Root application state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Signed-in session; `None` shows the login page
    pub session: Option<Session>,
    pub ui: UiState,
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session and land on the first entity screen
    pub fn sign_in(&mut self, session: Session) {
        tracing::info!("Session started for {}", session.email());
        self.session = Some(session);
        self.ui.navigate(EntityKind::ALL[0]);
    }

    /// Drop the session
    pub fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!("Signed out {}", session.email());
        }
    }

    /// The API client carrying the current session
    pub fn client(&self, base: &ApiClient) -> ApiClient {
        base.clone().with_session(self.session.clone())
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn dismiss_toast(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// CRUD bindings
// ============================================================================

/// [`StateStore`] over a component signal
#[derive(Clone, Copy)]
pub struct SignalStore(pub Signal<ListState>);

impl StateStore for SignalStore {
    fn with<R>(&self, f: impl FnOnce(&ListState) -> R) -> R {
        f(&*self.0.read())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut *state)
    }
}

/// Notifier that feeds the toast stack
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastSink;

impl Notifier for ToastSink {
    fn notify(&self, toast: Toast) {
        APP_STATE.write().push_toast(toast);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_state() {
        let mut ui = UiState::new();
        assert_eq!(ui.active_entity, EntityKind::Faculty);
        assert!(!ui.sidebar_collapsed);

        ui.toggle_sidebar();
        assert!(ui.sidebar_collapsed);

        ui.navigate(EntityKind::Hotel);
        assert_eq!(ui.active_entity, EntityKind::Hotel);
    }

    #[test]
    fn test_session_lifecycle() {
        let mut state = AppState::new();
        state.ui.navigate(EntityKind::Team);
        assert!(!state.is_authenticated());

        state.sign_in(Session::new("token", "admin@aricon.in"));
        assert!(state.is_authenticated());
        assert_eq!(state.ui.active_entity, EntityKind::Faculty);

        state.sign_out();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_client_carries_session() {
        let base = ApiClient::new(&aricon_core::AppConfig::default()).unwrap();
        let mut state = AppState::new();
        assert!(state.client(&base).session().is_none());

        state.sign_in(Session::new("token", "admin@aricon.in"));
        assert_eq!(
            state.client(&base).session().map(Session::email),
            Some("admin@aricon.in")
        );
    }

    #[test]
    fn test_toast_stack() {
        let mut state = AppState::new();
        let first = Toast::success("Hotel created");
        let first_id = first.id;
        state.push_toast(first);
        state.push_toast(Toast::error("Network error"));
        assert_eq!(state.toasts.len(), 2);

        state.dismiss_toast(first_id);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].title, "Network error");
    }
}
