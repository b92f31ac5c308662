use chrono::Utc;
use contracts::dashboards::orders::demo_orders;
use contracts::dashboards::{select, series};
use contracts::shared::filters::FilterState;
use contracts::shared::indicators::{scorecard_catalog, IndicatorStatus, IndicatorValue};
use leptos::prelude::*;
use std::collections::HashMap;

use crate::dashboards::filters::AdvancedFilterPanel;
use crate::shared::components::{PageHeader, StatCard};

/// Performance Scorecard dashboard: the four headline indicators for the
/// current slice, each compared against the previous window of equal
/// length.
#[component]
pub fn PerformanceScorecardDashboard() -> impl IntoView {
    let today = Utc::now().date_naive();

    let (state, set_state) = signal(FilterState::default());
    let on_change = Callback::new(move |next: FilterState| set_state.set(next));

    // Computed values keyed by indicator id string
    let values = Memo::new(move |_| {
        let st = state.get();
        let window = select::effective_window(&st, today);
        let current = select::filter_orders_in_window(demo_orders(), &st, window);
        let previous = select::filter_orders_in_window(
            demo_orders(),
            &st,
            select::previous_window(window),
        );
        series::scorecard(&current, &previous)
            .into_iter()
            .map(|v| (v.id.0.clone(), v))
            .collect::<HashMap<String, IndicatorValue>>()
    });

    let cards: Vec<_> = scorecard_catalog()
        .into_iter()
        .map(|meta| {
            let id_str = meta.id.0.clone();

            let value_sig = Signal::derive({
                let id_str = id_str.clone();
                move || values.get().get(&id_str).and_then(|v| v.value)
            });

            let status_sig = Signal::derive({
                let id_str = id_str.clone();
                move || {
                    values
                        .get()
                        .get(&id_str)
                        .map(|v| v.status)
                        .unwrap_or(IndicatorStatus::Neutral)
                }
            });

            let change_sig = Signal::derive({
                let id_str = id_str.clone();
                move || values.get().get(&id_str).and_then(|v| v.change_percent)
            });

            let subtitle_sig = Signal::derive({
                let id_str = id_str.clone();
                move || values.get().get(&id_str).and_then(|v| v.subtitle.clone())
            });

            view! {
                <StatCard
                    label=meta.label.clone()
                    icon_name=meta.icon.clone()
                    value=value_sig
                    format=meta.format.clone()
                    status=status_sig
                    change_percent=change_sig
                    subtitle=subtitle_sig
                />
            }
        })
        .collect();

    view! {
        <div class="dashboard-page" data-page="d413_performance_scorecard">
            <PageHeader
                title="Performance scorecard"
                subtitle="Headline indicators vs the previous period".to_string()
            >
                <></>
            </PageHeader>

            <AdvancedFilterPanel state=state on_change=on_change />

            <div class="indicator-set">
                <div class="indicator-set__grid indicator-set__grid--cols-4">
                    {cards}
                </div>
            </div>
        </div>
    }
}
