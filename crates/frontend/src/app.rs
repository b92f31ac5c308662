use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the tab store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <AppShell />
        </ThemeProvider>
    }
}
