//! Main Application Component for the ARICON admin panel
//!
//! The root component gates everything on a session: without one it shows
//! the login page. Signed in, it renders the shell: the navbar, the
//! collapsible sidebar, the mobile tab bar and the active entity page.

use aricon_schema::EntityKind;
use dioxus::prelude::*;

use crate::components::ToastStack;
use crate::pages::{EntityPage, LoginPage};
use crate::state::APP_STATE;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("ARICON admin UI initialized");
    });

    let authenticated = APP_STATE.read().is_authenticated();

    rsx! {
        div {
            class: "app-container",
            if authenticated {
                Navbar {}
                div {
                    class: "app-body",
                    Sidebar {}
                    MainContent {}
                }
                MobileTabBar {}
            } else {
                LoginPage {}
            }
            ToastStack {}
        }
    }
}

// ============================================================================
// Navbar Component
// ============================================================================

/// Top bar with the product name and logout
#[component]
fn Navbar() -> Element {
    let email = APP_STATE
        .read()
        .session
        .as_ref()
        .map(|s| s.email().to_string())
        .unwrap_or_default();

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-brand",
                span { class: "navbar-logo", "🎓" }
                span { "ARICON Admin Panel" }
            }
            div { class: "flex-1" }
            span { class: "navbar-user", "{email}" }
            button {
                class: "btn btn-secondary btn-sm",
                onclick: move |_| APP_STATE.write().sign_out(),
                "Logout"
            }
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Collapsible navigation listing every entity screen
#[component]
fn Sidebar() -> Element {
    let state = APP_STATE.read();
    let collapsed = state.ui.sidebar_collapsed;
    let current = state.ui.active_entity;
    drop(state);

    rsx! {
        aside {
            class: if collapsed { "sidebar is-collapsed" } else { "sidebar" },

            div {
                class: "sidebar-header",
                if !collapsed {
                    span { class: "sidebar-title", "Navigation" }
                }
                button {
                    class: "btn-icon",
                    title: if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                    onclick: move |_| APP_STATE.write().ui.toggle_sidebar(),
                    if collapsed { "☰" } else { "✕" }
                }
            }

            nav {
                class: "sidebar-nav",
                for entity in EntityKind::ALL {
                    SidebarItem {
                        key: "{entity:?}",
                        entity: entity,
                        current: current,
                        collapsed: collapsed,
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarItem(entity: EntityKind, current: EntityKind, collapsed: bool) -> Element {
    let class = if entity == current {
        "sidebar-item is-active"
    } else {
        "sidebar-item"
    };
    let icon = entity.icon();
    let name = entity.title();

    rsx! {
        button {
            class: "{class}",
            title: "{name}",
            onclick: move |_| APP_STATE.write().ui.navigate(entity),
            span { class: "sidebar-icon", "{icon}" }
            if !collapsed {
                span { class: "sidebar-label", "{name}" }
            }
        }
    }
}

// ============================================================================
// Mobile Tab Bar Component
// ============================================================================

/// Bottom tab bar shown instead of the sidebar at narrow widths
#[component]
fn MobileTabBar() -> Element {
    let current = APP_STATE.read().ui.active_entity;

    rsx! {
        nav {
            class: "mobile-tab-bar",
            for entity in EntityKind::ALL {
                {
                    let icon = entity.icon();
                    let name = entity.title();
                    rsx! {
                        button {
                            key: "{entity:?}",
                            class: if entity == current { "tab is-active" } else { "tab" },
                            title: "{name}",
                            onclick: move |_| APP_STATE.write().ui.navigate(entity),
                            span { class: "tab-icon", "{icon}" }
                            span { class: "tab-label", "{name}" }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Mounts the active entity page; switching entity remounts it
#[component]
fn MainContent() -> Element {
    let active = APP_STATE.read().ui.active_entity;

    rsx! {
        main {
            class: "main-content",
            EntityPage { key: "{active:?}", kind: active }
        }
    }
}
