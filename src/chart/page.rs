//! Page containers the chart is drawn into.

use std::collections::HashMap;

use super::data::SERVICE_MIX;
use super::svg::ServiceChart;

/// Id of the element the home page reserves for the chart.
pub const SERVICE_CHART_ID: &str = "service-chart";

/// An element holding rendered markup fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    children: Vec<String>,
}

impl Container {
    #[must_use]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn append(&mut self, markup: String) {
        self.children.push(markup);
    }

    /// Whether any appended markup holds an `<svg>` element, at any depth.
    #[must_use]
    pub fn has_svg(&self) -> bool {
        self.children.iter().any(|child| child.contains("<svg"))
    }

    /// Concatenated markup of all children.
    #[must_use]
    pub fn inner_html(&self) -> String {
        self.children.concat()
    }
}

/// Containers of a page, by element id.
#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: HashMap<String, Container>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty container unless one with this id exists.
    #[must_use]
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.entry(id.into()).or_default();
        self
    }

    #[must_use]
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }
}

/// What a render call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The chart was appended to the container.
    Rendered,
    /// The page has no container with the requested id.
    MissingContainer,
    /// The container already holds a chart; nothing was appended.
    AlreadyRendered,
}

/// Draws `chart` into the container `container_id`, at most once.
pub fn render_chart(page: &mut Page, container_id: &str, chart: &ServiceChart<'_>) -> RenderOutcome {
    let Some(container) = page.container_mut(container_id) else {
        tracing::debug!(container_id, "Chart container not found");
        return RenderOutcome::MissingContainer;
    };
    if container.has_svg() {
        tracing::debug!(container_id, "Chart already rendered");
        return RenderOutcome::AlreadyRendered;
    }

    container.append(chart.render());
    tracing::debug!(container_id, "Chart rendered");
    RenderOutcome::Rendered
}

/// Draws the service mix chart into the page's `service-chart` container.
pub fn init_service_chart(page: &mut Page) -> RenderOutcome {
    render_chart(page, SERVICE_CHART_ID, &ServiceChart::new(&SERVICE_MIX, 300, 300))
}
