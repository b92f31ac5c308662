//! The metric chart: line, bars or area over the bucketed series, rendered
//! as plain inline SVG. The geometry lives in free functions so it can be
//! tested without a DOM.

use contracts::dashboards::series::SeriesPoint;
use leptos::prelude::*;

use crate::shared::number_format::format_compact;

const VIEW_W: f64 = 720.0;
const VIEW_H: f64 = 260.0;
const PAD_LEFT: f64 = 52.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;

const PLOT_W: f64 = VIEW_W - PAD_LEFT - PAD_RIGHT;
const PLOT_H: f64 = VIEW_H - PAD_TOP - PAD_BOTTOM;

/// Rounds the axis maximum up to 1, 2 or 5 times a power of ten, so the
/// gridline labels land on round numbers.
pub fn nice_ceil(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// X position of point `idx` of `len` points across the plot box.
pub fn x_at(idx: usize, len: usize) -> f64 {
    if len <= 1 {
        PAD_LEFT + PLOT_W / 2.0
    } else {
        PAD_LEFT + PLOT_W * idx as f64 / (len - 1) as f64
    }
}

/// Y position for `value` on a 0..axis_max scale.
pub fn y_at(value: f64, axis_max: f64) -> f64 {
    if axis_max <= 0.0 {
        PAD_TOP + PLOT_H
    } else {
        PAD_TOP + PLOT_H * (1.0 - (value / axis_max).clamp(0.0, 1.0))
    }
}

/// "x,y x,y ..." point list for a polyline mark.
pub fn polyline_points(values: &[f64], axis_max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(idx, v)| format!("{:.1},{:.1}", x_at(idx, values.len()), y_at(*v, axis_max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Polyline points closed down to the baseline, for an area mark.
pub fn area_points(values: &[f64], axis_max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let baseline = PAD_TOP + PLOT_H;
    let last_x = x_at(values.len() - 1, values.len());
    let first_x = x_at(0, values.len());
    format!(
        "{} {:.1},{:.1} {:.1},{:.1}",
        polyline_points(values, axis_max),
        last_x,
        baseline,
        first_x,
        baseline
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// One bar per bucket, 70% of the slot width.
pub fn bar_rects(values: &[f64], axis_max: f64) -> Vec<BarRect> {
    let len = values.len();
    if len == 0 {
        return Vec::new();
    }
    let slot = PLOT_W / len as f64;
    let bar_w = slot * 0.7;
    values
        .iter()
        .enumerate()
        .map(|(idx, v)| {
            let y = y_at(*v, axis_max);
            BarRect {
                x: PAD_LEFT + slot * idx as f64 + (slot - bar_w) / 2.0,
                y,
                w: bar_w,
                h: (PAD_TOP + PLOT_H - y).max(0.0),
            }
        })
        .collect()
}

#[component]
pub fn MetricChart(
    /// Bucketed series to draw
    #[prop(into)]
    series: Signal<Vec<SeriesPoint>>,
    /// "line", "bar" or "area"
    #[prop(into)]
    chart_type: Signal<String>,
) -> impl IntoView {
    let axis_max = Signal::derive(move || {
        nice_ceil(
            series
                .get()
                .iter()
                .map(|p| p.value)
                .fold(0.0_f64, f64::max),
        )
    });

    // Horizontal gridlines at 0/25/50/75/100% with their value labels
    let gridlines = move || {
        let max = axis_max.get();
        (0..=4)
            .map(|step| {
                let value = max * step as f64 / 4.0;
                let y = y_at(value, max);
                view! {
                    <g>
                        <line
                            x1=format!("{:.1}", PAD_LEFT)
                            y1=format!("{:.1}", y)
                            x2=format!("{:.1}", PAD_LEFT + PLOT_W)
                            y2=format!("{:.1}", y)
                            class="metric-chart__grid"
                        />
                        <text
                            x=format!("{:.1}", PAD_LEFT - 6.0)
                            y=format!("{:.1}", y + 3.0)
                            text-anchor="end"
                            class="metric-chart__axis-label"
                        >
                            {format_compact(value)}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    // First / middle / last bucket labels under the x axis
    let x_labels = move || {
        let points = series.get();
        let len = points.len();
        let mut picks: Vec<usize> = Vec::new();
        if len > 0 {
            picks.push(0);
        }
        if len > 2 {
            picks.push(len / 2);
        }
        if len > 1 {
            picks.push(len - 1);
        }
        picks
            .into_iter()
            .map(|idx| {
                view! {
                    <text
                        x=format!("{:.1}", x_at(idx, len))
                        y=format!("{:.1}", VIEW_H - 8.0)
                        text-anchor="middle"
                        class="metric-chart__axis-label"
                    >
                        {points[idx].label.clone()}
                    </text>
                }
            })
            .collect_view()
    };

    let marks = move || {
        let values: Vec<f64> = series.get().iter().map(|p| p.value).collect();
        let max = axis_max.get();
        match chart_type.get().as_str() {
            "bar" => bar_rects(&values, max)
                .into_iter()
                .map(|r| {
                    view! {
                        <rect
                            x=format!("{:.1}", r.x)
                            y=format!("{:.1}", r.y)
                            width=format!("{:.1}", r.w)
                            height=format!("{:.1}", r.h)
                            class="metric-chart__bar"
                        />
                    }
                })
                .collect_view()
                .into_any(),
            "area" => view! {
                <polygon
                    points=area_points(&values, max)
                    class="metric-chart__area"
                />
            }
            .into_any(),
            _ => view! {
                <polyline
                    points=polyline_points(&values, max)
                    fill="none"
                    class="metric-chart__line"
                />
            }
            .into_any(),
        }
    };

    view! {
        <svg
            class="metric-chart"
            viewBox=format!("0 0 {} {}", VIEW_W, VIEW_H)
            role="img"
        >
            {gridlines}
            {marks}
            {x_labels}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ceil_rounds_to_1_2_5() {
        assert_eq!(nice_ceil(7.3), 10.0);
        assert_eq!(nice_ceil(42.0), 50.0);
        assert_eq!(nice_ceil(160.0), 200.0);
        assert_eq!(nice_ceil(900.0), 1000.0);
        assert_eq!(nice_ceil(0.0), 1.0);
    }

    #[test]
    fn x_positions_span_the_plot() {
        assert_eq!(x_at(0, 5), PAD_LEFT);
        assert_eq!(x_at(4, 5), PAD_LEFT + PLOT_W);
        // a single point sits in the middle
        assert_eq!(x_at(0, 1), PAD_LEFT + PLOT_W / 2.0);
    }

    #[test]
    fn y_scales_from_baseline_to_top() {
        assert_eq!(y_at(0.0, 100.0), PAD_TOP + PLOT_H);
        assert_eq!(y_at(100.0, 100.0), PAD_TOP);
        // values above the axis max clamp to the top
        assert_eq!(y_at(250.0, 100.0), PAD_TOP);
    }

    #[test]
    fn polyline_has_one_point_per_value() {
        let points = polyline_points(&[0.0, 50.0, 100.0], 100.0);
        assert_eq!(points.split(' ').count(), 3);
    }

    #[test]
    fn area_closes_to_the_baseline() {
        let points = area_points(&[10.0, 20.0], 100.0);
        // 2 data points + 2 baseline corners
        assert_eq!(points.split(' ').count(), 4);
    }

    #[test]
    fn bars_never_have_negative_height() {
        let rects = bar_rects(&[0.0, 120.0], 100.0);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].h, 0.0);
        assert!(rects[1].h > 0.0);
    }
}
