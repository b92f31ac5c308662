use chrono::Utc;
use contracts::dashboards::orders::demo_orders;
use contracts::dashboards::{select, series};
use contracts::shared::filters::{FilterState, SingleField};
use leptos::prelude::*;

use crate::dashboards::filters::AdvancedFilterPanel;
use crate::shared::components::PageHeader;

/// Cell shade on a 0..1 scale relative to the busiest cell.
fn cell_opacity(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max).clamp(0.0, 1.0)
    }
}

/// User Behavior dashboard: order activity as a weekday heatmap. The cohort
/// filter picks the time axis - hour slots, weeks or months.
#[component]
pub fn BehaviorHeatmapDashboard() -> impl IntoView {
    let today = Utc::now().date_naive();

    let (state, set_state) = signal(FilterState::default());
    let on_change = Callback::new(move |next: FilterState| set_state.set(next));

    let grid = Memo::new(move |_| {
        let st = state.get();
        let orders = select::filter_orders(demo_orders(), &st, today);
        let window = select::effective_window(&st, today);
        series::behavior_heatmap(&orders, st.single(SingleField::CohortPeriod), window)
    });

    let cohort_label = Memo::new(move |_| {
        let st = state.get();
        let value = st.single(SingleField::CohortPeriod);
        SingleField::CohortPeriod
            .option_label(value)
            .unwrap_or(value)
            .to_string()
    });

    let heatmap = move || {
        let grid = grid.get();
        let max = grid.max;

        let header = view! {
            <div class="heatmap__row heatmap__row--header">
                <div class="heatmap__corner"></div>
                {grid.col_labels.iter().map(|label| view! {
                    <div class="heatmap__col-label">{label.clone()}</div>
                }).collect_view()}
            </div>
        };

        let rows = grid
            .row_labels
            .iter()
            .zip(&grid.cells)
            .map(|(row_label, row)| {
                let cells = grid
                    .col_labels
                    .iter()
                    .zip(row)
                    .map(|(col_label, value)| {
                        let title =
                            format!("{} {}: {:.0} orders", row_label, col_label, value);
                        view! {
                            <div
                                class="heatmap__cell"
                                title=title
                                style=format!(
                                    "--cell-opacity: {:.2};",
                                    cell_opacity(*value, max)
                                )
                            ></div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="heatmap__row">
                        <div class="heatmap__row-label">{*row_label}</div>
                        {cells}
                    </div>
                }
            })
            .collect_view();

        view! {
            <div class="heatmap">
                {header}
                {rows}
            </div>
        }
    };

    view! {
        <div class="dashboard-page" data-page="d412_behavior_heatmap">
            <PageHeader
                title="User behavior"
                subtitle="When customers place orders".to_string()
            >
                <></>
            </PageHeader>

            <AdvancedFilterPanel state=state on_change=on_change />

            <div class="dashboard-card">
                <div class="dashboard-card__header">
                    <span class="dashboard-card__title">
                        {move || format!("Activity by weekday, {} buckets", cohort_label.get())}
                    </span>
                    <span class="dashboard-card__total">
                        {move || format!("busiest cell: {:.0} orders", grid.get().max)}
                    </span>
                </div>

                {heatmap}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_opacity_scales_against_the_busiest_cell() {
        assert_eq!(cell_opacity(0.0, 10.0), 0.0);
        assert_eq!(cell_opacity(5.0, 10.0), 0.5);
        assert_eq!(cell_opacity(10.0, 10.0), 1.0);
    }

    #[test]
    fn empty_grid_stays_blank() {
        assert_eq!(cell_opacity(0.0, 0.0), 0.0);
    }
}
