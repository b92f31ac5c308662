//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the theme selector
//! and the notification/settings buttons.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelector;
use leptos::prelude::*;

/// TopHeader component - main application top bar.
///
/// Uses AppGlobalContext for sidebar visibility control.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            // Left section - brand
            <div class="top-header__brand">
                <span class="top-header__title">"TrebaMi Admin"</span>
            </div>

            // Right section - actions
            <div class="top-header__actions">
                // Sidebar toggle
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                // Notifications
                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>

                // Settings
                <button class="top-header__icon-btn" title="Settings">
                    {icon("settings")}
                </button>

                // Theme selector
                <ThemeSelector />
            </div>
        </div>
    }
}
