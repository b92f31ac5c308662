use chrono::Utc;
use contracts::dashboards::orders::{demo_orders, ServiceOrder};
use contracts::dashboards::{select, series};
use contracts::shared::filters::{FilterState, SingleField};
use leptos::prelude::*;

use super::chart::MetricChart;
use crate::dashboards::filters::AdvancedFilterPanel;
use crate::shared::components::PageHeader;
use crate::shared::number_format::format_metric;

/// Revenue Analytics dashboard: the selected metric bucketed over time,
/// drawn as a line, bar or area chart depending on the chart-type filter.
#[component]
pub fn RevenueAnalyticsDashboard() -> impl IntoView {
    let today = Utc::now().date_naive();

    // This page owns its filter state; sibling dashboards hold their own.
    let (state, set_state) = signal(FilterState::default());
    let on_change = Callback::new(move |next: FilterState| set_state.set(next));

    let filtered = Memo::new(move |_| {
        let st = state.get();
        select::filter_orders(demo_orders(), &st, today)
            .into_iter()
            .cloned()
            .collect::<Vec<ServiceOrder>>()
    });

    let chart_series = Memo::new(move |_| {
        let st = state.get();
        let window = select::effective_window(&st, today);
        filtered.with(|orders| {
            let refs: Vec<&ServiceOrder> = orders.iter().collect();
            series::series_over_time(
                &refs,
                st.single(SingleField::Metric),
                st.single(SingleField::Timeframe),
                window,
            )
        })
    });

    let metric = Memo::new(move |_| state.get().single(SingleField::Metric).to_string());
    let metric_label = Memo::new(move |_| {
        let st = state.get();
        let value = st.single(SingleField::Metric);
        SingleField::Metric
            .option_label(value)
            .unwrap_or(value)
            .to_string()
    });

    let total = Memo::new(move |_| {
        filtered.with(|orders| {
            let refs: Vec<&ServiceOrder> = orders.iter().collect();
            series::metric_value(&refs, &metric.get())
        })
    });
    let record_count = Memo::new(move |_| filtered.with(Vec::len));

    view! {
        <div class="dashboard-page" data-page="d410_revenue_analytics">
            <PageHeader
                title="Revenue analytics"
                subtitle="How the marketplace earns over the selected period".to_string()
            >
                <></>
            </PageHeader>

            <AdvancedFilterPanel state=state on_change=on_change />

            <div class="dashboard-card">
                <div class="dashboard-card__header">
                    <span class="dashboard-card__title">
                        {move || format!("{} over time", metric_label.get())}
                    </span>
                    <span class="dashboard-card__total">
                        {move || format_metric(total.get(), &metric.get())}
                    </span>
                </div>

                <MetricChart
                    series=chart_series
                    chart_type=Signal::derive(move || {
                        state.get().single(SingleField::ChartType).to_string()
                    })
                />

                <div class="dashboard-card__footnote">
                    {move || format!("{} orders in the current slice", record_count.get())}
                </div>
            </div>
        </div>
    }
}
