use chrono::Utc;
use contracts::dashboards::orders::demo_orders;
use contracts::dashboards::series::RegionStat;
use contracts::dashboards::{select, series};
use contracts::shared::filters::{FilterState, SingleField};
use leptos::prelude::*;

use crate::dashboards::filters::AdvancedFilterPanel;
use crate::shared::components::PageHeader;
use crate::shared::number_format::format_metric;

/// Geographic Performance dashboard: one tile per region, colored by the
/// selected metric's intensity relative to the strongest region.
#[component]
pub fn GeoPerformanceDashboard() -> impl IntoView {
    let today = Utc::now().date_naive();

    let (state, set_state) = signal(FilterState::default());
    let on_change = Callback::new(move |next: FilterState| set_state.set(next));

    let stats = Memo::new(move |_| {
        let st = state.get();
        let orders = select::filter_orders(demo_orders(), &st, today);
        series::region_stats(&orders, st.single(SingleField::Metric))
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

    let leader = Memo::new(move |_| {
        stats
            .get()
            .into_iter()
            .max_by(|a, b| a.value.total_cmp(&b.value))
            .filter(|s| s.value > 0.0)
    });

    let tiles = move || {
        let metric = metric.get();
        stats
            .get()
            .into_iter()
            .map(|s: RegionStat| {
                let fill_opacity = 0.12 + 0.88 * s.intensity;
                view! {
                    <div
                        class="geo-tile"
                        title=format!("{}: {}", s.label, format_metric(s.value, &metric))
                    >
                        <div
                            class="geo-tile__fill"
                            style=format!("opacity: {:.2};", fill_opacity)
                        ></div>
                        <div class="geo-tile__name">{s.label.clone()}</div>
                        <div class="geo-tile__value">{format_metric(s.value, &metric)}</div>
                        <div class="geo-tile__share">
                            {format!("{:.1}% of total", s.share * 100.0)}
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="dashboard-page" data-page="d411_geo_performance">
            <PageHeader
                title="Geographic performance"
                subtitle="Regional breakdown of the selected metric".to_string()
            >
                <></>
            </PageHeader>

            <AdvancedFilterPanel state=state on_change=on_change />

            <div class="dashboard-card">
                <div class="dashboard-card__header">
                    <span class="dashboard-card__title">
                        {move || format!("{} by region", metric_label.get())}
                    </span>
                    <span class="dashboard-card__total">
                        {move || match leader.get() {
                            Some(top) => format!("Leader: {}", top.label),
                            None => "No data in the current slice".to_string(),
                        }}
                    </span>
                </div>

                <div class="geo-map">
                    {tiles}
                </div>
            </div>
        </div>
    }
}
