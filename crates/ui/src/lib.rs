//! # ARICON UI
//!
//! Dioxus Desktop UI for the ARICON admin panel.
//!
//! Every entity screen is the same generic page driven by the headless
//! engine in `aricon_crud`; this crate only renders state and forwards
//! user actions.
//!
//! ## Features
//!
//! - Login gate with local validation and an explicit session
//! - Navbar, collapsible sidebar and mobile tab bar
//! - Sortable, selectable, filterable data tables
//! - Slide-over add/edit forms with inline field errors
//! - Delete confirmation dialog and auto-dismissing toasts
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use app::App;
pub use pages::{EntityPage, LoginPage};
pub use state::{APP_STATE, AppState, SignalStore, ToastSink, UiState};

use aricon_client::{ApiClient, ClientError};
use aricon_core::AppConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "ARICON Admin";

/// Window title
pub const TITLE: &str = "ARICON Admin Panel";

/// Stylesheet bundled at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the desktop application
///
/// The configuration and a base API client are provided to every
/// component as context. Fails only if the HTTP client cannot be built.
///
/// # Example
///
/// ```rust,ignore
/// let config = AppConfig::load()?;
/// aricon_ui::launch(config)?;
/// ```
pub fn launch(config: AppConfig) -> Result<(), ClientError> {
    tracing::info!("Starting {} v{} against {}", NAME, VERSION, config.base_url());

    let client = ApiClient::new(&config)?;
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 820.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(420.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(config)
        .with_context(client)
        .launch(App);

    Ok(())
}

/// The embedded stylesheet
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
