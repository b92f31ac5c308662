//! TabPage component - wrapper around one tab's content.
//!
//! Shows/hides the content depending on whether the tab is active and asks
//! the registry for the content itself. Hidden tabs stay mounted, so a
//! dashboard keeps its local filter state until the tab is closed.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    // Reactive: is this tab the active one?
    let is_active = move || {
        let current_active = tabs_store.active.get();
        current_active.as_ref() == Some(&tab_key_for_active_check)
    };

    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("TabPage destroyed for: '{}'", tab_key_for_cleanup);
    });

    // Render content once per open via the registry
    let content = render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
