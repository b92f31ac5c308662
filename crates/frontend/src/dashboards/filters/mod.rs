//! AdvancedFilterPanel - schema-driven filter controls shared by the
//! analytics dashboards.
//!
//! The panel renders the manager's option sets (selects for single-value
//! fields, checkbox groups for multi-value fields, the custom-range picker
//! when the period is "custom") and reports every mutation through a single
//! callback carrying the complete new [`FilterState`], never a diff.

use contracts::shared::filters::{
    active_chips, FilterState, MultiField, SingleField, DATE_RANGE_CUSTOM,
};
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Select};
use crate::shared::components::{CustomRangePicker, FilterPanel, FilterTag};

#[component]
pub fn AdvancedFilterPanel(
    /// Current filter state, owned by the dashboard page
    #[prop(into)]
    state: Signal<FilterState>,
    /// Invoked with the complete new state on every mutation
    on_change: Callback<FilterState>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);
    let active_count = Signal::derive(move || state.get().active_filter_count());

    // Single notification point: every control funnels through here.
    let notify = Callback::new(move |next: FilterState| {
        log::debug!(
            "filter change: {} active filter(s)",
            next.active_filter_count()
        );
        on_change.run(next);
    });

    let on_clear = Callback::new(move |_: ()| notify.run(FilterState::clear_all()));

    let single_selects = SingleField::ALL
        .into_iter()
        .map(|field| {
            let options: Vec<(String, String)> = field
                .options()
                .iter()
                .map(|o| (o.value.to_string(), o.label.to_string()))
                .collect();
            let value = Signal::derive(move || state.get().single(field).to_string());
            let on_select = Callback::new(move |v: String| {
                notify.run(state.get_untracked().set_single(field, &v));
            });
            view! {
                <Select
                    label=field.label().to_string()
                    value=value
                    on_change=on_select
                    options=options
                />
            }
        })
        .collect_view();

    let custom_from = Signal::derive(move || state.get().custom_range().date_from.clone());
    let custom_to = Signal::derive(move || state.get().custom_range().date_to.clone());
    let on_range = Callback::new(move |(from, to): (String, String)| {
        notify.run(state.get_untracked().set_custom_range(&from, &to));
    });

    let multi_groups = MultiField::ALL
        .into_iter()
        .map(|field| {
            let boxes = field
                .options()
                .iter()
                .map(|o| {
                    let value = o.value;
                    let checked =
                        Signal::derive(move || state.get().is_selected(field, value));
                    let on_toggle = Callback::new(move |included: bool| {
                        notify.run(state.get_untracked().set_multi(field, value, included));
                    });
                    view! {
                        <Checkbox
                            label=o.label.to_string()
                            checked=checked
                            on_change=on_toggle
                        />
                    }
                })
                .collect_view();
            view! {
                <div class="filter-group">
                    <div class="filter-group__title">{field.label()}</div>
                    <div class="filter-group__options">{boxes}</div>
                </div>
            }
        })
        .collect_view();

    // Active filter chips, re-derived from the state on every change
    let chips = move || {
        active_chips(&state.get())
            .into_iter()
            .map(|chip| {
                let label = chip.label().to_string();
                let on_remove = Callback::new(move |_: ()| {
                    notify.run(chip.remove_from(&state.get_untracked()));
                });
                view! { <FilterTag label=label on_remove=on_remove /> }
            })
            .collect_view()
    };

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_count
            on_clear=on_clear
        >
            <div class="filter-form">
                <div class="filter-form__row">
                    {single_selects}
                    <Show when=move || {
                        state.get().single(SingleField::DateRange) == DATE_RANGE_CUSTOM
                    }>
                        <CustomRangePicker
                            date_from=custom_from
                            date_to=custom_to
                            on_change=on_range
                        />
                    </Show>
                </div>
                <div class="filter-form__groups">
                    {multi_groups}
                </div>
                <div class="filter-tags">
                    {chips}
                </div>
            </div>
        </FilterPanel>
    }
}
