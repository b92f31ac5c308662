use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

/// First and last day of the month containing (year, month).
fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    } - Duration::days(1);
    Some((start, end))
}

/// CustomRangePicker - the from/to pair of the custom date range, with
/// quick-pick buttons for the current and the previous month. Styled to
/// match Thaw inputs.
#[component]
pub fn CustomRangePicker(
    /// "from" date in yyyy-mm-dd format
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" date in yyyy-mm-dd format
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback with the new (from, to) pair
    on_change: Callback<(String, String)>,

    /// Optional label above the inputs
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = {
        let on_change = on_change.clone();
        move |new_from: String| {
            let current_to = date_to.get_untracked();
            on_change.run((new_from, current_to));
        }
    };

    let on_to_change = {
        let on_change = on_change.clone();
        move |new_to: String| {
            let current_from = date_from.get_untracked();
            on_change.run((current_from, new_to));
        }
    };

    // Quick-pick: current month
    let on_current_month = {
        let on_change = on_change.clone();
        move |_| {
            let now = Utc::now().date_naive();
            if let Some((start, end)) = month_bounds(now.year(), now.month()) {
                on_change.run((
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string(),
                ));
            }
        }
    };

    // Quick-pick: one month back from the current "from" date
    let on_previous_month = {
        let on_change = on_change.clone();
        move |_| {
            let anchor = NaiveDate::parse_from_str(&date_from.get_untracked(), "%Y-%m-%d")
                .unwrap_or_else(|_| Utc::now().date_naive());
            let (year, month) = if anchor.month() == 1 {
                (anchor.year() - 1, 12)
            } else {
                (anchor.year(), anchor.month() - 1)
            };
            if let Some((start, end)) = month_bounds(year, month) {
                on_change.run((
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string(),
                ));
            }
        }
    };

    view! {
        <style>
            ".custom-range-picker .thaw-button--small { width: 36px; min-width: 36px; height: 30px; }"
            "
            .custom-range-picker {
                box-sizing: border-box;
                border: 1px solid var(--colorNeutralStroke1, #d1d1d1);
                border-radius: var(--borderRadiusMedium, 4px);
                background: var(--colorNeutralBackground1, #fff);
                min-height: 32px;
                height: 32px;
            }

            .custom-range-picker input[type=\"date\"] {
                box-sizing: border-box;
                background: transparent;
                border: none;
                border-radius: var(--borderRadiusMedium, 4px);
                cursor: pointer;
                padding: 0 12px;
                margin: 4px 0 4px 4px;
                font-size: 0.875rem;
                color: var(--colorNeutralForeground1, #242424);
                width: 130px;
            }

            .custom-range-picker input[type=\"date\"]:focus {
                outline: none;
            }
            "
        </style>

        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <Flex class="custom-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_from_change(event_target_value(&ev));
                    }
                />

                <div>"—"</div>

                <input
                    type="date"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_to_change(event_target_value(&ev));
                    }
                />

                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_previous_month(())
                    >
                        "-1M"
                    </Button>

                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_current_month(())
                    >
                        "0M"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_of_a_regular_month() {
        let (start, end) = month_bounds(2026, 7).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 7, 31).unwrap());
    }

    #[test]
    fn month_bounds_of_december() {
        let (start, end) = month_bounds(2025, 12).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn month_bounds_of_february_leap_year() {
        let (_, end) = month_bounds(2024, 2).unwrap();
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
