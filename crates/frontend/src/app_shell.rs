//! Application shell - the root layout components.
//!
//! `AppShell` wires the global tab store into the `Shell` layout: sidebar on
//! the left, tab strip plus the open dashboard pages in the center. Inactive
//! tabs stay mounted (hidden by CSS), so every dashboard keeps its own
//! filter state until its tab is closed.

use crate::layout::center::TabBar;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use leptos::prelude::*;

/// Key of the dashboard opened on a fresh start.
const DEFAULT_TAB: &str = "d410_revenue_analytics";

#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is
    // created and may already open a tab from the ?active= parameter.
    tabs_store.init_router_integration();

    if tabs_store.opened.with_untracked(|tabs| tabs.is_empty()) {
        tabs_store.open_tab(DEFAULT_TAB, tab_label_for_key(DEFAULT_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}
