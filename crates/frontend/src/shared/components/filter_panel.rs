use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible panel around a dashboard's filter
/// controls, with an active-filter badge and a clear-all action in the
/// header. The children are the filter form itself.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Callback for the "clear all" header action
    on_clear: Callback<()>,

    /// Filter content (form fields and tag row)
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="filter-panel__clear"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_clear.run(());
                        }
                    >
                        "Clear all"
                    </button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <svg
                width="12"
                height="12"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                <line x1="18" y1="6" x2="6" y2="18"></line>
                <line x1="6" y1="6" x2="18" y2="18"></line>
            </svg>
        </div>
    }
}
