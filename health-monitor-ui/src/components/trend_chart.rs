//! Trend Chart Component
//!
//! Health score over time on an HTML5 canvas. The y-axis is fixed to
//! 0-100 so charts of different projects are comparable.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use health_monitor::presentation::{clamp_score, NO_TREND_DATA};
use health_monitor::{ScoreBand, TrendPoint};

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;
const LINE_COLOR: &str = "#3b82f6";

#[component]
pub fn TrendChart(points: Vec<TrendPoint>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let has_data = !points.is_empty();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &points);
        }
    });

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">"Health Trend"</h2>
            {if has_data {
                view! {
                    <canvas node_ref=canvas_ref width="600" height="260" class="w-full h-64" />
                }
                .into_view()
            } else {
                view! {
                    <div class="h-64 flex items-center justify-center text-gray-400 text-sm">
                        {NO_TREND_DATA}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

/// Horizontal position of point `index` out of `count`, spread edge to edge
fn x_for(index: usize, count: usize, chart_width: f64) -> f64 {
    if count <= 1 {
        MARGIN_LEFT + chart_width / 2.0
    } else {
        MARGIN_LEFT + (index as f64 / (count - 1) as f64) * chart_width
    }
}

/// Vertical position of a score on the fixed 0-100 axis
fn y_for(score: f64, chart_height: f64) -> f64 {
    MARGIN_TOP + (1.0 - clamp_score(score) / 100.0) * chart_height
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[TrendPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Grid and y-axis labels every 20 points
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    for step in 0..=5 {
        let value = step as f64 * 20.0;
        let y = y_for(value, chart_height);
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    if points.is_empty() {
        return;
    }

    // Series line
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = x_for(i, points.len(), chart_width);
        let y = y_for(point.score, chart_height);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Points coloured by band, with date labels
    for (i, point) in points.iter().enumerate() {
        let x = x_for(i, points.len(), chart_width);
        let y = y_for(point.score, chart_height);

        ctx.set_fill_style(&ScoreBand::from_score(point.score).tone().hex().into());
        ctx.begin_path();
        let _ = ctx.arc(x, y, 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();

        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&point.label(), x - 18.0, height - 8.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_axis_is_fixed() {
        assert_eq!(y_for(100.0, 200.0), MARGIN_TOP);
        assert_eq!(y_for(0.0, 200.0), MARGIN_TOP + 200.0);
        assert_eq!(y_for(150.0, 200.0), MARGIN_TOP);
    }

    #[test]
    fn test_two_points_span_the_width() {
        assert_eq!(x_for(0, 2, 500.0), MARGIN_LEFT);
        assert_eq!(x_for(1, 2, 500.0), MARGIN_LEFT + 500.0);
        assert_eq!(x_for(0, 1, 500.0), MARGIN_LEFT + 250.0);
    }
}
