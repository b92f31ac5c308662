pub mod tabs;

pub use tabs::TabBar;

use leptos::prelude::*;

/// Center zone wrapper for the tab strip and the open pages.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}
