//! Animated bar chart, the timeline-bound component.

use crate::component::contract::{Component, Motion, MotionTarget, RenderCtx};
use crate::component::layout::heading;
use crate::dom::document::Document;
use crate::foundation::core::{Affine, css_matrix, fmt_num, px};

/// Midpoint of the periodic scale factor.
pub const PULSE_MIDPOINT: f64 = 0.7;
/// Amplitude of the periodic scale factor around [`PULSE_MIDPOINT`].
pub const PULSE_AMPLITUDE: f64 = 0.3;
/// Angular speed of the pulse, in radians per second.
pub const PULSE_SPEED: f64 = 2.0;
/// Phase offset between neighboring bars, in radians.
pub const PULSE_PHASE_STEP: f64 = 0.6;
/// Smallest scale a bar is ever drawn at while animating.
pub const MIN_VISIBLE_SCALE: f64 = 0.1;

/// Proportion of each value against `max`, or against the data maximum when `max` is absent or
/// not positive.
///
/// Proportions are clamped to `[0, 1]`; a non-positive maximum yields all zeros.
pub fn bar_proportions(values: &[f64], max: Option<f64>) -> Vec<f64> {
    let max = max
        .filter(|m| *m > 0.0)
        .unwrap_or_else(|| values.iter().copied().fold(0.0, f64::max));
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v / max).clamp(0.0, 1.0)).collect()
}

/// Display scale of bar `index` at `time` seconds.
pub fn bar_scale(base: f64, index: usize, time: f64) -> f64 {
    let phase = PULSE_SPEED * time + PULSE_PHASE_STEP * index as f64;
    (base * (PULSE_MIDPOINT + PULSE_AMPLITUDE * phase.sin())).max(MIN_VISIBLE_SCALE)
}

fn scale_transform(scale: f64) -> String {
    css_matrix(Affine::scale_non_uniform(1.0, scale))
}

/// `bar-chart`: grid of vertical bars sized against the maximum value.
///
/// Props: `values` (numbers; empty by default), `labels` (optional, matched by index), `max`
/// (optional explicit maximum), `title` (hidden when empty), `height` (bar track height, default
/// 360), `showValues` (default `true`), `color` (bar fill, default accent).
///
/// Each bar's proportion is recorded as motion state so ticks can pulse it without a rebuild.
#[derive(Debug, Default)]
pub struct BarChart;

impl Component for BarChart {
    fn name(&self) -> &'static str {
        "bar-chart"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        let font = cx.typography().body.as_str();
        let host = cx.host();
        cx.host_el()
            .styles(&[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "24px"),
                ("width", "100%"),
            ])
            .style("font-family", font)
            .style("color", &theme.text);

        let title = props.str_or("title", "");
        if !title.trim().is_empty() {
            heading(cx, host, "h2", &title, 48.0, &theme.text);
        }

        let values = props.f64_seq("values");
        let labels = props.str_seq("labels");
        let proportions = bar_proportions(&values, props.opt_f64("max"));
        let track_h = props.f64_or("height", 360.0).max(1.0);
        let show_values = props.bool_or("showValues", true);
        let color = props.color_or("color", &theme.accent);

        let grid = cx
            .el(host, "div")
            .class("bars")
            .styles(&[("display", "grid"), ("gap", "24px"), ("align-items", "end")])
            .style(
                "grid-template-columns",
                format!("repeat({}, minmax(0, 1fr))", values.len().max(1)),
            )
            .id();

        for (i, (value, base)) in values.iter().zip(&proportions).enumerate() {
            let col = cx
                .el(grid, "div")
                .class("bar-col")
                .styles(&[
                    ("display", "flex"),
                    ("flex-direction", "column"),
                    ("align-items", "stretch"),
                    ("gap", "10px"),
                ])
                .id();
            if show_values {
                cx.el(col, "span")
                    .class("bar-value")
                    .styles(&[("font-size", "22px"), ("text-align", "center")])
                    .style("color", &theme.muted)
                    .text(fmt_num(*value));
            }
            let track = cx
                .el(col, "div")
                .class("bar-track")
                .styles(&[("position", "relative"), ("display", "flex")])
                .style("height", px(track_h))
                .id();
            let bar = cx
                .el(track, "div")
                .class("bar")
                .styles(&[
                    ("width", "100%"),
                    ("height", "100%"),
                    ("border-radius", "10px 10px 0 0"),
                    ("transform-origin", "bottom"),
                ])
                .style("background", &color)
                .style("transform", scale_transform(*base))
                .attr("data-base", fmt_num(*base))
                .id();
            cx.track(bar, *base);

            let label = labels.get(i).map(String::as_str).unwrap_or("");
            if !label.is_empty() {
                cx.el(col, "span")
                    .class("bar-label")
                    .styles(&[("font-size", "20px"), ("text-align", "center")])
                    .style("color", &theme.muted)
                    .text(label);
            }
        }
    }

    fn motion(&self) -> Option<&dyn Motion> {
        Some(self)
    }
}

impl Motion for BarChart {
    fn tick(&self, doc: &mut Document, targets: &[MotionTarget], time: f64) {
        for t in targets {
            doc.set_style(
                t.node,
                "transform",
                scale_transform(bar_scale(t.base, t.index, time)),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/chart.rs"]
mod tests;
