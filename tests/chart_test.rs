//! Rendering the service chart into a page.

#![allow(missing_docs)]
#![allow(clippy::float_arithmetic)]

use googletest::prelude::*;
use rstest::rstest;
use scholar_site::chart::{
    Container,
    Page,
    RenderOutcome,
    SERVICE_CHART_ID,
    SERVICE_MIX,
    init_service_chart,
    pie,
};

#[rstest]
fn home_page_gets_one_animated_chart() {
    let mut page = Page::new().with_container("hero").with_container(SERVICE_CHART_ID);

    let outcomes = [init_service_chart(&mut page), init_service_chart(&mut page)];

    assert_eq!(outcomes, [RenderOutcome::Rendered, RenderOutcome::AlreadyRendered]);
    let html = page.container(SERVICE_CHART_ID).map(Container::inner_html).unwrap_or_default();
    assert_that!(html.matches("<svg").count(), eq(1));
    assert_that!(html.matches("<animate ").count(), eq(SERVICE_MIX.len() * 6));
    assert!(page.container("hero").is_some_and(|c| c.children().is_empty()));
}

#[rstest]
fn service_mix_covers_full_circle_in_order() {
    let slices = pie(&SERVICE_MIX);

    let labels: Vec<&str> = slices.iter().map(|slice| slice.datum.label).collect();
    assert_eq!(labels, ["Research", "Engineering", "Planning", "Social"]);
    let total: f64 = slices.iter().map(|slice| slice.end_angle - slice.start_angle).sum();
    assert_that!(total, near(std::f64::consts::TAU, 1e-9));
}
