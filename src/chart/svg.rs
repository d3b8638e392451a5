//! Animated SVG markup for the service chart.
//!
//! Everything the chart does at runtime is declarative SVG animation:
//! slices sweep in, labels fade in once the sweep is nearly done, and a
//! hovered slice grows outward until the pointer leaves.
#![allow(clippy::float_arithmetic)]

use std::borrow::Cow;
use std::fmt::Write;

use super::data::ChartDatum;
use super::geometry::{
    Arc,
    PieSlice,
    ease_cubic_in_out,
    num,
    pie,
};

/// Inner radius as a fraction of the chart radius.
const INNER_RATIO: f64 = 0.5;
/// Outer radius at rest.
const OUTER_RATIO: f64 = 0.9;
/// Outer radius while hovered.
const HOVER_RATIO: f64 = 0.95;

const DRAW_MS: u32 = 1000;
const LABEL_DELAY_MS: u32 = 800;
const LABEL_FADE_MS: u32 = 500;
const HOVER_MS: u32 = 200;

/// Where each slice's end angle starts sweeping from, past its start angle.
const SWEEP_OFFSET: f64 = 0.1;
/// Keyframes of the sweep animation.
const SWEEP_FRAMES: u32 = 30;

const REST_OPACITY: &str = "0.9";
/// Cubic ease-in-out as a bezier spline.
const EASE_SPLINE: &str = "0.65 0 0.35 1";

/// A donut chart of `data` sized `width` by `height` user units.
#[derive(Debug, Clone, Copy)]
pub struct ServiceChart<'a> {
    data: &'a [ChartDatum],
    width: u32,
    height: u32,
}

impl<'a> ServiceChart<'a> {
    #[must_use]
    pub const fn new(data: &'a [ChartDatum], width: u32, height: u32) -> Self {
        Self { data, width, height }
    }

    /// Radius of the circle that fits the view box.
    #[must_use]
    pub fn radius(&self) -> f64 {
        f64::from(self.width.min(self.height)) / 2.0
    }

    /// Slice arc at rest.
    #[must_use]
    pub fn arc(&self) -> Arc {
        Arc::new(self.radius() * INNER_RATIO, self.radius() * OUTER_RATIO)
    }

    /// Slice arc while hovered.
    #[must_use]
    pub fn hover_arc(&self) -> Arc {
        Arc::new(self.radius() * INNER_RATIO, self.radius() * HOVER_RATIO)
    }

    /// Full `<svg>` element.
    #[must_use]
    pub fn render(&self) -> String {
        let slices = pie(self.data);
        let mut svg = String::new();

        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        let _ = write!(
            svg,
            r#"<g transform="translate({},{})">"#,
            num(f64::from(self.width) / 2.0),
            num(f64::from(self.height) / 2.0),
        );

        for slice in &slices {
            self.write_slice(&mut svg, slice);
        }
        for slice in &slices {
            self.write_label(&mut svg, slice);
        }

        svg.push_str("</g></svg>");
        svg
    }

    fn write_slice(&self, svg: &mut String, slice: &PieSlice<'_>) {
        let arc = self.arc();
        let rest = arc.path(slice.start_angle, slice.end_angle);
        let hover = self.hover_arc().path(slice.start_angle, slice.end_angle);

        let _ = write!(
            svg,
            r#"<path d="{rest}" fill="{fill}" stroke="white" stroke-width="2" opacity="{REST_OPACITY}" style="cursor: pointer">"#,
            fill = escape_xml(slice.datum.color),
        );
        let _ = write!(
            svg,
            r#"<animate attributeName="d" dur="{DRAW_MS}ms" values="{values}" keyTimes="{times}" fill="freeze"/>"#,
            values = sweep_frames(arc, slice).join(";"),
            times = key_times(),
        );
        write_transition(svg, "d", &hover, "mouseenter");
        write_transition(svg, "opacity", "1", "mouseenter");
        write_transition(svg, "d", &rest, "mouseleave");
        write_transition(svg, "opacity", REST_OPACITY, "mouseleave");
        svg.push_str("</path>");
    }

    fn write_label(&self, svg: &mut String, slice: &PieSlice<'_>) {
        let (x, y) = self.arc().centroid(slice.start_angle, slice.end_angle);

        let _ = write!(
            svg,
            r#"<text transform="translate({x},{y})" dy="0.35em" text-anchor="middle" font-size="12" font-weight="bold" fill="white" pointer-events="none" opacity="0">{label}"#,
            x = num(x),
            y = num(y),
            label = escape_xml(slice.datum.label),
        );
        let _ = write!(
            svg,
            r#"<animate attributeName="opacity" from="0" to="1" begin="{LABEL_DELAY_MS}ms" dur="{LABEL_FADE_MS}ms" fill="freeze" calcMode="spline" keyTimes="0;1" keySplines="{EASE_SPLINE}"/>"#,
        );
        svg.push_str("</text>");
    }
}

/// Eased transition of `attribute` to `to`, started by a pointer event.
fn write_transition(svg: &mut String, attribute: &str, to: &str, event: &str) {
    let _ = write!(
        svg,
        r#"<animate attributeName="{attribute}" to="{to}" begin="{event}" dur="{HOVER_MS}ms" fill="freeze" calcMode="spline" keyTimes="0;1" keySplines="{EASE_SPLINE}"/>"#,
    );
}

/// Path of the slice at each sweep keyframe.
///
/// The end angle grows from just past the start angle to its final value,
/// eased so keyframes can be spaced evenly in time.
fn sweep_frames(arc: Arc, slice: &PieSlice<'_>) -> Vec<String> {
    let from = (slice.start_angle + SWEEP_OFFSET).min(slice.end_angle);
    let span = slice.end_angle - from;
    (0..=SWEEP_FRAMES)
        .map(|frame| {
            let progress = ease_cubic_in_out(f64::from(frame) / f64::from(SWEEP_FRAMES));
            arc.path(slice.start_angle, slice.end_angle - span * (1.0 - progress))
        })
        .collect()
}

/// Evenly spaced key times matching [`sweep_frames`].
fn key_times() -> String {
    (0..=SWEEP_FRAMES)
        .map(|frame| num(f64::from(frame) / f64::from(SWEEP_FRAMES)))
        .collect::<Vec<_>>()
        .join(";")
}

/// Escapes text for use in XML content and attribute values.
fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
