use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Global tab store: which dashboard tabs are open, which one is active and
/// whether the sidebar is shown. Lives in context for the whole app.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Synchronizes the active tab with the `?active=` query parameter:
    /// reads it once on startup, then mirrors every activation back into the
    /// URL via `history.replaceState`.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            let exists = self
                .opened
                .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == active_key));
            if !exists {
                let title = crate::layout::tabs::tab_label_for_key(&active_key);
                self.open_tab(&active_key, title);
            } else {
                self.activate_tab(&active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let query_string = serde_qs::to_string(&HashMap::from([(
                    "active".to_string(),
                    active_key.clone(),
                )]))
                .unwrap_or_default();

                let new_url = format!("?{}", query_string);

                // Use untracked to avoid creating unnecessary reactive dependencies
                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| {
            tabs.retain(|tab| tab.key != key);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}
