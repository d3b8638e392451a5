//! Service mix donut chart.
//!
//! The chart is rendered once into a named page container as SVG with
//! declarative animation, so the page needs no script to show it.

mod data;
mod geometry;
mod page;
mod svg;

pub use data::{
    ChartDatum,
    SERVICE_MIX,
};
pub use geometry::{
    Arc,
    PieSlice,
    pie,
};
pub use page::{
    Container,
    Page,
    RenderOutcome,
    SERVICE_CHART_ID,
    init_service_chart,
    render_chart,
};
pub use svg::ServiceChart;
